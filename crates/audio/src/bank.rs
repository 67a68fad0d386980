//! Sound bank - the four game sound effects, built once at startup

use tracing::{debug, info};

use crate::backend::{AudioBackend, AudioError, SoundHandle};
use crate::core::SimpleRng;
use crate::synth::synthesize;
use crate::types::SoundEffect;

/// Registered handles for every [`SoundEffect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundBank {
    correct: SoundHandle,
    wrong: SoundHandle,
    win: SoundHandle,
    lose: SoundHandle,
}

impl SoundBank {
    /// Synthesize and register every effect.
    ///
    /// Each PCM buffer is moved into the backend and dropped there; nothing is
    /// kept here but the handles.
    pub fn build_all(
        backend: &mut dyn AudioBackend,
        rng: &mut SimpleRng,
    ) -> Result<Self, AudioError> {
        let mut build = |effect: SoundEffect| -> Result<SoundHandle, AudioError> {
            let (kind, duration, frequency) = effect.params();
            let pcm = synthesize(kind, duration, frequency, rng)?;
            debug!(?effect, samples = pcm.len(), "synthesized");
            backend.register(pcm)
        };

        let bank = Self {
            correct: build(SoundEffect::Correct)?,
            wrong: build(SoundEffect::Wrong)?,
            win: build(SoundEffect::Win)?,
            lose: build(SoundEffect::Lose)?,
        };
        info!(backend = backend.name(), "sound bank ready");
        Ok(bank)
    }

    pub fn handle(&self, effect: SoundEffect) -> SoundHandle {
        match effect {
            SoundEffect::Correct => self.correct,
            SoundEffect::Wrong => self.wrong,
            SoundEffect::Win => self.win,
            SoundEffect::Lose => self.lose,
        }
    }

    pub fn play(&self, effect: SoundEffect, backend: &mut dyn AudioBackend) {
        backend.play(self.handle(effect));
    }

    /// Release every sound. The bank is unusable afterwards.
    pub fn release(self, backend: &mut dyn AudioBackend) {
        for effect in SoundEffect::ALL {
            backend.release(self.handle(effect));
        }
    }
}
