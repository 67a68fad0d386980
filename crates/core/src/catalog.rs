//! Level catalog - the word lists for each difficulty tier
//!
//! The catalog is validated once when it is built and is read-only afterwards.
//! A tier without words (or a word that is not plain A-Z) is a configuration
//! error: the game refuses to start rather than producing an unplayable round.

use thiserror::Error;

use crate::types::Letter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no tiers")]
    NoTiers,

    #[error("tier {tier} ({name}) has no words")]
    EmptyTier { tier: usize, name: String },

    #[error("tier {tier}: word #{index} is empty")]
    EmptyWord { tier: usize, index: usize },

    #[error("tier {tier}: word {word:?} must contain only letters A-Z")]
    InvalidWord { tier: usize, word: String },
}

/// A candidate word and the hint shown while guessing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    hint: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Letters of the word. Only valid after catalog validation.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.word.chars().filter_map(Letter::from_char)
    }
}

/// One difficulty level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    name: String,
    entries: Vec<WordEntry>,
}

impl Tier {
    pub fn new(name: impl Into<String>, entries: Vec<WordEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}

/// Ordered tiers, easiest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    tiers: Vec<Tier>,
}

impl LevelCatalog {
    /// Build a catalog, checking every tier and word.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::NoTiers);
        }

        for (t, tier) in tiers.iter().enumerate() {
            if tier.entries.is_empty() {
                return Err(CatalogError::EmptyTier {
                    tier: t,
                    name: tier.name.clone(),
                });
            }
            for (i, entry) in tier.entries.iter().enumerate() {
                if entry.word.is_empty() {
                    return Err(CatalogError::EmptyWord { tier: t, index: i });
                }
                if !entry.word.bytes().all(|b| b.is_ascii_uppercase()) {
                    return Err(CatalogError::InvalidWord {
                        tier: t,
                        word: entry.word.clone(),
                    });
                }
            }
        }

        Ok(Self { tiers })
    }

    /// The shipped three-tier catalog of computing terms.
    pub fn builtin() -> Result<Self, CatalogError> {
        fn tier(name: &str, words: &[(&str, &str)]) -> Tier {
            Tier::new(
                name,
                words
                    .iter()
                    .map(|&(w, h)| WordEntry::new(w, h))
                    .collect(),
            )
        }

        Self::new(vec![
            tier("Easy", EASY),
            tier("Medium", MEDIUM),
            tier("Hard", HARD),
        ])
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Entries of tier `tier`, or `None` past the last tier.
    pub fn entries_for(&self, tier: usize) -> Option<&[WordEntry]> {
        self.tiers.get(tier).map(Tier::entries)
    }

    pub fn tier_name(&self, tier: usize) -> Option<&str> {
        self.tiers.get(tier).map(Tier::name)
    }
}

const EASY: &[(&str, &str)] = &[
    ("PIXEL", "The smallest unit of a digital image."),
    ("CODE", "Instructions for a computer."),
    ("BUG", "An error in a program."),
    ("RAM", "Temporary computer memory."),
    ("LOOP", "Repeating a block of code."),
    ("DATA", "Information processed by a computer."),
    ("WIFI", "Wireless networking technology."),
    ("JAVA", "A popular programming language."),
    ("MOUSE", "Handheld pointing device."),
    ("FILE", "A resource for storing information."),
];

const MEDIUM: &[(&str, &str)] = &[
    ("POINTER", "A variable that stores a memory address."),
    ("ARRAY", "A collection of items stored at contiguous memory."),
    ("SYNTAX", "The grammar rules of a programming language."),
    ("STRING", "A sequence of characters."),
    ("BINARY", "A system of zeros and ones."),
    ("SERVER", "A computer that provides data to others."),
    ("PYTHON", "A snake, but also a coding language."),
    ("DRIVER", "Software that controls hardware."),
    ("KERNEL", "The core part of an operating system."),
    ("SOCKET", "Endpoint for sending or receiving data."),
];

const HARD: &[(&str, &str)] = &[
    ("ALGORITHM", "A step-by-step procedure for solving a problem."),
    ("COMPILER", "Translates code into machine language."),
    ("POLYMORPHISM", "Objects of different types treated as the same."),
    ("RECURSION", "When a function calls itself."),
    ("ENCRYPTION", "Encoding data to prevent unauthorized access."),
    ("ABSTRACTION", "Hiding complex implementation details."),
    ("INHERITANCE", "Deriving a class from another class."),
    ("BANDWIDTH", "Maximum data transfer rate."),
    ("FIREWALL", "Network security system."),
    ("DEBUGGING", "The process of finding and fixing bugs."),
];
