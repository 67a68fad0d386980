//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::InputEvent`]. Hit
//! testing of mouse positions against the virtual keyboard happens in the
//! engine, which owns the layout for the current frame.

pub mod map;

pub use tui_hangman_types as types;

pub use map::{handle_key_event, handle_mouse_event, map_event, should_quit};
