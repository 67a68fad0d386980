//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: screens are drawn into a plain
//! framebuffer of styled cells, which [`TerminalRenderer`] flushes to the
//! terminal as a diff against the previous frame.
//!
//! The view only reads a [`core::GameSnapshot`]; nothing here mutates game
//! state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_hangman_core as core;
pub use tui_hangman_types as types;

pub use fb::{measure_text, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
