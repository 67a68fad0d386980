//! Audio capability interface
//!
//! The game only needs three things from an audio device: turn a PCM buffer
//! into a playable sound, play it (fire-and-forget) and release it. Anything
//! that can do that implements [`AudioBackend`]; [`NullBackend`] is the
//! silent fallback used when no device is available.

use thiserror::Error;

use crate::synth::{PcmBuffer, SynthError};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("failed to synthesize sound: {0}")]
    Synth(#[from] SynthError),
}

/// Opaque id of a registered sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(u32);

impl SoundHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }
}

pub trait AudioBackend {
    /// Take ownership of `pcm` and make it playable.
    fn register(&mut self, pcm: PcmBuffer) -> Result<SoundHandle, AudioError>;

    /// Start playback. Never blocks, never fails loudly; overlapping
    /// plays of the same sound are allowed.
    fn play(&mut self, handle: SoundHandle);

    /// Free the sound. Playing a released handle is a no-op.
    fn release(&mut self, handle: SoundHandle);

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn register(&mut self, pcm: PcmBuffer) -> Result<SoundHandle, AudioError> {
        (**self).register(pcm)
    }

    fn play(&mut self, handle: SoundHandle) {
        (**self).play(handle)
    }

    fn release(&mut self, handle: SoundHandle) {
        (**self).release(handle)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Backend that accepts everything and plays nothing.
#[derive(Debug, Default)]
pub struct NullBackend {
    next_id: u32,
}

impl NullBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioBackend for NullBackend {
    fn register(&mut self, _pcm: PcmBuffer) -> Result<SoundHandle, AudioError> {
        let handle = SoundHandle(self.next_id);
        self.next_id += 1;
        Ok(handle)
    }

    fn play(&mut self, _handle: SoundHandle) {}

    fn release(&mut self, _handle: SoundHandle) {}

    fn name(&self) -> &'static str {
        "silent"
    }
}

/// Headless backend that keeps what it was given and logs every play.
///
/// Used by tests and benchmarks to observe sound side effects.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    sounds: Vec<Option<usize>>,
    played: Vec<SoundHandle>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles played so far, in order.
    pub fn played(&self) -> &[SoundHandle] {
        &self.played
    }

    pub fn clear_played(&mut self) {
        self.played.clear();
    }

    /// Sample count of a registered sound, `None` once released.
    pub fn sample_len(&self, handle: SoundHandle) -> Option<usize> {
        self.sounds.get(handle.0 as usize).copied().flatten()
    }

    /// Sounds still registered.
    pub fn live_sounds(&self) -> usize {
        self.sounds.iter().filter(|s| s.is_some()).count()
    }
}

impl AudioBackend for RecordingBackend {
    fn register(&mut self, pcm: PcmBuffer) -> Result<SoundHandle, AudioError> {
        let handle = SoundHandle(self.sounds.len() as u32);
        self.sounds.push(Some(pcm.len()));
        Ok(handle)
    }

    fn play(&mut self, handle: SoundHandle) {
        if self.sample_len(handle).is_some() {
            self.played.push(handle);
        }
    }

    fn release(&mut self, handle: SoundHandle) {
        if let Some(slot) = self.sounds.get_mut(handle.0 as usize) {
            *slot = None;
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimpleRng;
    use crate::synth::synthesize;
    use crate::types::Waveform;

    fn pcm() -> PcmBuffer {
        synthesize(Waveform::Sine, 0.05, 440.0, &mut SimpleRng::new(1)).unwrap()
    }

    #[test]
    fn null_backend_hands_out_distinct_handles() {
        let mut backend = NullBackend::new();
        let a = backend.register(pcm()).unwrap();
        let b = backend.register(pcm()).unwrap();
        assert_ne!(a, b);
        backend.play(a);
        backend.release(a);
        backend.play(a);
    }

    #[test]
    fn recording_backend_logs_plays() {
        let mut backend = RecordingBackend::new();
        let a = backend.register(pcm()).unwrap();
        let b = backend.register(pcm()).unwrap();
        backend.play(b);
        backend.play(a);
        backend.play(b);
        assert_eq!(backend.played(), &[b, a, b]);
        assert_eq!(backend.sample_len(a), Some(2205));
    }

    #[test]
    fn released_sounds_do_not_play() {
        let mut backend = RecordingBackend::new();
        let a = backend.register(pcm()).unwrap();
        backend.release(a);
        backend.play(a);
        assert!(backend.played().is_empty());
        assert_eq!(backend.live_sounds(), 0);
    }

    #[test]
    fn synth_errors_convert() {
        let err: AudioError = SynthError::InvalidDuration(-1.0).into();
        assert!(err.to_string().contains("synthesize"));
    }
}
