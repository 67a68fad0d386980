//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, audio synthesis, terminal rendering).
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_LIVES` | 6 | Wrong guesses allowed per round |
//! | `ALPHABET_LEN` | 26 | Virtual keys on the on-screen keyboard |
//! | `TIER_COUNT` | 3 | Difficulty tiers in the built-in catalog |
//! | `FRAME_MS` | 16 | Frame interval (~60 FPS) |
//!
//! # Audio Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SAMPLE_RATE` | 44100 | PCM sample rate in Hz (mono, 16-bit) |
//! | `FADE_OUT_SAMPLES` | 1000 | Tail length of the linear anti-click fade |
//! | `AMPLITUDE` | 10000 | Peak amplitude (of 32767) applied to every waveform |
//!
//! # Examples
//!
//! ```
//! use tui_hangman_types::{GameAction, Letter, Phase};
//!
//! // Letters accept either case and normalise to uppercase.
//! let a = Letter::from_char('a').unwrap();
//! assert_eq!(a.as_char(), 'A');
//! assert_eq!(a.index(), 0);
//!
//! // ENTER means a different command in each phase.
//! assert_eq!(Phase::Menu.confirm_action(), Some(GameAction::Start));
//! assert_eq!(Phase::Playing.confirm_action(), None);
//! ```

pub mod layout;

pub use layout::{KeyboardLayout, Point, Rect};

/// Lives at the start of every round.
pub const MAX_LIVES: u8 = 6;

/// Number of letters (and virtual keys).
pub const ALPHABET_LEN: usize = 26;

/// Every letter, in order.
pub const ALPHABET: [Letter; ALPHABET_LEN] = {
    let mut out = [Letter(b'A'); ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        out[i] = Letter(b'A' + i as u8);
        i += 1;
    }
    out
};

/// Number of difficulty tiers in the built-in catalog.
pub const TIER_COUNT: usize = 3;

/// Frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Sample rate of every synthesized buffer.
pub const SAMPLE_RATE: u32 = 44_100;

/// Number of trailing samples faded linearly to zero.
pub const FADE_OUT_SAMPLES: usize = 1000;

/// Peak amplitude of synthesized samples (about 30% of `i16::MAX`).
pub const AMPLITUDE: f32 = 10_000.0;

/// Placeholder shown in the reveal mask for a hidden letter.
pub const HIDDEN: char = '_';


/// A single uppercase letter A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Parse a letter from a character (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_hangman_types::Letter;
    ///
    /// assert_eq!(Letter::from_char('q'), Letter::from_char('Q'));
    /// assert_eq!(Letter::from_char('1'), None);
    /// assert_eq!(Letter::from_char('é'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self(ch.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Letter at alphabet position `index` (0 = A).
    pub fn from_index(index: usize) -> Option<Self> {
        ALPHABET.get(index).copied()
    }

    /// Alphabet position, 0 = A.
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        ALPHABET.into_iter()
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Guess state of one virtual key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuessState {
    #[default]
    Unused,
    Correct,
    Wrong,
}

/// Top-level phase of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    GameOver,
    Victory,
    GameComplete,
}

impl Phase {
    /// The command the confirm key (ENTER) issues in this phase.
    pub fn confirm_action(self) -> Option<GameAction> {
        match self {
            Phase::Menu | Phase::GameComplete => Some(GameAction::Start),
            Phase::GameOver => Some(GameAction::Retry),
            Phase::Victory => Some(GameAction::Continue),
            Phase::Playing => None,
        }
    }
}

/// Commands accepted by the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Begin a new career at tier 0 (from MENU or GAME_COMPLETE).
    Start,
    /// Replay the current tier with a new word (from GAME_OVER).
    Retry,
    /// Advance to the next tier (from VICTORY).
    Continue,
    /// Submit a letter (while PLAYING).
    Guess(Letter),
}

/// Raw input forwarded by the host once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A letter key was pressed.
    Letter(Letter),
    /// The confirm key (ENTER) was pressed.
    Confirm,
    /// Pointer moved to a terminal cell.
    MouseMoved(Point),
    /// Left button pressed at a terminal cell.
    MousePressed(Point),
    /// The player asked to close the game.
    Quit,
}

/// The four pre-synthesized sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Correct,
    Wrong,
    Win,
    Lose,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::Correct,
        SoundEffect::Wrong,
        SoundEffect::Win,
        SoundEffect::Lose,
    ];

    /// Synthesis parameters: (waveform, duration in seconds, frequency in Hz).
    pub fn params(self) -> (Waveform, f32, f32) {
        match self {
            SoundEffect::Correct => (Waveform::Sine, 0.3, 880.0),
            SoundEffect::Wrong => (Waveform::Sawtooth, 0.4, 150.0),
            SoundEffect::Win => (Waveform::Sine, 0.8, 660.0),
            SoundEffect::Lose => (Waveform::Noise, 0.8, 0.0),
        }
    }
}

/// Oscillator shapes supported by the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
    Noise,
    Sawtooth,
}

impl Waveform {
    /// Whether the frequency argument is used.
    pub fn is_periodic(self) -> bool {
        !matches!(self, Waveform::Noise)
    }
}
