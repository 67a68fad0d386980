use crate::types::{GuessState, Letter, Phase, ALPHABET, ALPHABET_LEN, HIDDEN, MAX_LIVES};

/// Render-facing copy of one virtual key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySnapshot {
    pub letter: Letter,
    pub state: GuessState,
    pub hover: bool,
}

impl KeySnapshot {
    pub fn unused(letter: Letter) -> Self {
        Self {
            letter,
            state: GuessState::Unused,
            hover: false,
        }
    }
}

/// Everything the renderer reads, detached from the live state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub tier: usize,
    pub tier_count: usize,
    pub tier_name: String,
    pub round_id: u32,
    pub word: String,
    pub hint: String,
    pub mask: Vec<Option<Letter>>,
    pub lives: u8,
    pub keys: [KeySnapshot; ALPHABET_LEN],
}

impl GameSnapshot {
    /// Wrong guesses so far.
    pub fn mistakes(&self) -> u8 {
        MAX_LIVES.saturating_sub(self.lives)
    }

    pub fn mask_string(&self) -> String {
        self.mask
            .iter()
            .map(|slot| slot.map_or(HIDDEN, Letter::as_char))
            .collect()
    }

    /// 1-based level number for display.
    pub fn level_number(&self) -> usize {
        self.tier + 1
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Menu,
            tier: 0,
            tier_count: 0,
            tier_name: String::new(),
            round_id: 0,
            word: String::new(),
            hint: String::new(),
            mask: Vec::new(),
            lives: MAX_LIVES,
            keys: ALPHABET.map(KeySnapshot::unused),
        }
    }
}
