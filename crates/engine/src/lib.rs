//! Frame-step engine.
//!
//! [`Engine`] is the single owned aggregate behind the game: the state
//! machine, the sound bank and the audio backend. The host calls
//! [`Engine::step`] once per frame with every input event polled that frame,
//! then renders from [`Engine::snapshot_into`]. Nothing else mutates the game.

use tracing::debug;

use tui_hangman_audio::{AudioBackend, AudioError, SoundBank};
use tui_hangman_core::{GameSnapshot, GameState, LevelCatalog, SimpleRng};
use tui_hangman_types::{GameAction, InputEvent, KeyboardLayout, Phase};

pub use tui_hangman_audio as audio;
pub use tui_hangman_core as core;
pub use tui_hangman_types as types;

/// Salt so the noise generator does not mirror the word picker.
const NOISE_SEED_SALT: u32 = 0x5EED_A0D1;

/// What the host loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Engine<A: AudioBackend> {
    state: GameState,
    sounds: SoundBank,
    audio: A,
}

impl<A: AudioBackend> Engine<A> {
    /// Build the sound bank on `audio` and start in MENU.
    pub fn new(catalog: LevelCatalog, seed: u32, mut audio: A) -> Result<Self, AudioError> {
        let mut noise_rng = SimpleRng::new(seed ^ NOISE_SEED_SALT);
        let sounds = SoundBank::build_all(&mut audio, &mut noise_rng)?;
        Ok(Self {
            state: GameState::new(catalog, seed),
            sounds,
            audio,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn sounds(&self) -> &SoundBank {
        &self.sounds
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Process one frame of input, in arrival order.
    pub fn step(&mut self, events: &[InputEvent], layout: &KeyboardLayout) -> Flow {
        for &event in events {
            if self.handle_event(event, layout) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Process a single input event.
    pub fn handle_event(&mut self, event: InputEvent, layout: &KeyboardLayout) -> Flow {
        match event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::Letter(letter) => {
                self.apply(GameAction::Guess(letter));
            }
            InputEvent::Confirm => {
                if let Some(action) = self.state.phase().confirm_action() {
                    self.apply(action);
                }
            }
            InputEvent::MouseMoved(p) => {
                self.state.set_hover(layout.hit_test(p));
            }
            InputEvent::MousePressed(p) => {
                let hit = layout.hit_test(p);
                self.state.set_hover(hit);
                // Clicks only count on keys that are still unused.
                if let Some(letter) = hit.filter(|&l| self.state.accepts_guess(l)) {
                    self.apply(GameAction::Guess(letter));
                }
            }
        }
        Flow::Continue
    }

    /// Apply an action and play whatever it queued.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let before = self.state.phase();
        let changed = self.state.apply_action(action);
        if changed && self.state.phase() != before {
            debug!(from = ?before, to = ?self.state.phase(), "phase change");
        }
        for effect in self.state.take_sounds() {
            self.sounds.play(effect, &mut self.audio);
        }
        changed
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Release every sound and hand the backend back.
    pub fn shutdown(mut self) -> A {
        self.sounds.release(&mut self.audio);
        self.audio
    }
}
