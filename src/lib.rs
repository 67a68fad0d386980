//! TUI Hangman (workspace facade crate).
//!
//! Re-exports the member crates as `tui_hangman::{types,core,audio,engine,input,term}`
//! and carries the runtime [`config`] read by the binary.

pub mod config;

pub use tui_hangman_audio as audio;
pub use tui_hangman_core as core;
pub use tui_hangman_engine as engine;
pub use tui_hangman_input as input;
pub use tui_hangman_term as term;
pub use tui_hangman_types as types;

pub use config::Config;
