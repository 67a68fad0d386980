//! Game session module - the state of a single round
//!
//! A session is rebuilt from scratch at the start of every round: a fresh
//! target word, a fully hidden reveal mask, full lives and an unused keyboard.
//! Guess evaluation goes through a letter -> positions index built once per
//! round, so each guess is a single lookup.

use crate::catalog::{LevelCatalog, WordEntry};
use crate::rng::SimpleRng;
use crate::types::{GuessState, Letter, ALPHABET, ALPHABET_LEN, HIDDEN, MAX_LIVES};

/// One on-screen letter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualKey {
    pub letter: Letter,
    pub state: GuessState,
    /// Pointer is over the key. Presentation only.
    pub hover: bool,
}

impl VirtualKey {
    fn new(letter: Letter) -> Self {
        Self {
            letter,
            state: GuessState::Unused,
            hover: false,
        }
    }
}

/// Result of submitting one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter was already used this round; nothing changed.
    Repeated,
    /// Letter occurs in the word; `revealed` positions were uncovered.
    Correct { revealed: usize },
    /// Letter is not in the word; one life was lost.
    Wrong,
}

/// Mutable per-round state.
#[derive(Debug, Clone)]
pub struct GameSession {
    entry: WordEntry,
    target: Vec<Letter>,
    reveal: Vec<Option<Letter>>,
    hidden: usize,
    positions: [Vec<usize>; ALPHABET_LEN],
    lives: u8,
    keys: [VirtualKey; ALPHABET_LEN],
}

impl GameSession {
    /// Begin a round on `entry`.
    ///
    /// `entry` must already be validated (non-empty, letters only); rounds
    /// from outside the crate go through [`GameSession::start_round`].
    pub(crate) fn new(entry: WordEntry) -> Self {
        let target: Vec<Letter> = entry.letters().collect();

        let mut positions: [Vec<usize>; ALPHABET_LEN] = std::array::from_fn(|_| Vec::new());
        for (i, letter) in target.iter().enumerate() {
            positions[letter.index()].push(i);
        }

        Self {
            entry,
            reveal: vec![None; target.len()],
            hidden: target.len(),
            target,
            positions,
            lives: MAX_LIVES,
            keys: ALPHABET.map(VirtualKey::new),
        }
    }

    /// Begin a round on a word picked uniformly from `tier`.
    ///
    /// Returns `None` if the tier does not exist.
    pub fn start_round(catalog: &LevelCatalog, tier: usize, rng: &mut SimpleRng) -> Option<Self> {
        let entries = catalog.entries_for(tier)?;
        let entry = rng.choose(entries)?.clone();
        Some(Self::new(entry))
    }

    /// Submit a letter.
    ///
    /// Used letters are ignored. Callers must not guess once the round is over.
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        let key = &mut self.keys[letter.index()];
        if key.state != GuessState::Unused {
            return GuessOutcome::Repeated;
        }

        let hits = &self.positions[letter.index()];
        if hits.is_empty() {
            key.state = GuessState::Wrong;
            self.lives = self.lives.saturating_sub(1);
            return GuessOutcome::Wrong;
        }

        key.state = GuessState::Correct;
        for &i in hits {
            self.reveal[i] = Some(letter);
        }
        self.hidden -= hits.len();
        GuessOutcome::Correct {
            revealed: hits.len(),
        }
    }

    /// Every position is revealed.
    pub fn is_solved(&self) -> bool {
        self.hidden == 0
    }

    /// No lives left.
    pub fn is_lost(&self) -> bool {
        self.lives == 0
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Wrong guesses so far (drives the gallows drawing).
    pub fn mistakes(&self) -> u8 {
        MAX_LIVES - self.lives
    }

    pub fn target_word(&self) -> &str {
        self.entry.word()
    }

    pub fn hint(&self) -> &str {
        self.entry.hint()
    }

    /// Target word as letters.
    pub fn target(&self) -> &[Letter] {
        &self.target
    }

    /// Revealed letters by position, `None` where still hidden.
    pub fn reveal(&self) -> &[Option<Letter>] {
        &self.reveal
    }

    /// Reveal mask as text, e.g. `"CA_"`.
    pub fn mask_string(&self) -> String {
        self.reveal
            .iter()
            .map(|slot| slot.map_or(HIDDEN, Letter::as_char))
            .collect()
    }

    pub fn keys(&self) -> &[VirtualKey; ALPHABET_LEN] {
        &self.keys
    }

    pub fn key(&self, letter: Letter) -> &VirtualKey {
        &self.keys[letter.index()]
    }

    pub fn guess_state(&self, letter: Letter) -> GuessState {
        self.keys[letter.index()].state
    }

    /// Mark the key under the pointer, clearing every other hover flag.
    pub fn set_hover(&mut self, letter: Option<Letter>) {
        for key in &mut self.keys {
            key.hover = Some(key.letter) == letter;
        }
    }
}
