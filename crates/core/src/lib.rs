//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the word catalog, the per-round session and the
//! top-level state machine. It has **zero dependencies** on UI, audio devices
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed picks the same words
//! - **Testable**: Every rule is covered by unit tests, no terminal needed
//! - **Portable**: Runs headless, in a terminal, or behind any other host
//!
//! # Module Structure
//!
//! - [`catalog`]: validated, read-only word lists per difficulty tier
//! - [`session`]: one round (target word, reveal mask, lives, keyboard)
//! - [`game_state`]: MENU / PLAYING / GAME_OVER / VICTORY / GAME_COMPLETE
//! - [`rng`]: seeded LCG used for word picks and noise
//! - [`snapshot`]: plain copy of the state for rendering
//!
//! # Game Rules
//!
//! - Every round starts with `MAX_LIVES` (6) lives and all 26 letters unused
//! - A correct letter reveals every occurrence; a wrong one costs one life
//! - Guessing a used letter does nothing
//! - Revealing the last hidden letter wins, even on the final life
//! - Winning the last tier completes the game
//!
//! # Example
//!
//! ```
//! use tui_hangman_core::{GameState, LevelCatalog};
//! use tui_hangman_types::{GameAction, Letter, Phase};
//!
//! let mut game = GameState::new(LevelCatalog::builtin().unwrap(), 12345);
//! game.apply_action(GameAction::Start);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! game.apply_action(GameAction::Guess(Letter::from_char('e').unwrap()));
//! let sounds = game.take_sounds();
//! assert_eq!(sounds.len(), 1);
//! ```

pub mod catalog;
pub mod game_state;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_hangman_types as types;

// Re-export commonly used types for convenience
pub use catalog::{CatalogError, LevelCatalog, Tier, WordEntry};
pub use game_state::{GameState, SoundCues};
pub use rng::SimpleRng;
pub use session::{GameSession, GuessOutcome, VirtualKey};
pub use snapshot::{GameSnapshot, KeySnapshot};
