//! Procedural sound effects.
//!
//! All game audio is synthesized in memory at startup ([`synth`]), registered
//! once with an [`AudioBackend`] and kept in a [`SoundBank`]. Without a usable
//! device the game runs on [`NullBackend`] and behaves identically, only
//! silently.
//!
//! The speaker backend (`RodioBackend`) is behind the `rodio` feature so the
//! crate builds and tests headless.

pub mod backend;
pub mod bank;
#[cfg(feature = "rodio")]
pub mod rodio_backend;
pub mod synth;

pub use tui_hangman_core as core;
pub use tui_hangman_types as types;

pub use backend::{AudioBackend, AudioError, NullBackend, RecordingBackend, SoundHandle};
pub use bank::SoundBank;
#[cfg(feature = "rodio")]
pub use rodio_backend::RodioBackend;
pub use synth::{sample_count, synthesize, PcmBuffer, SynthError};
