//! Runtime configuration.
//!
//! There are no config files or flags; the two knobs come from the
//! environment:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `HANGMAN_SEED` | `u32` seed for word selection (default: from the clock) |
//! | `HANGMAN_MUTE` | set to anything to skip the audio device |

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

pub const SEED_VAR: &str = "HANGMAN_SEED";
pub const MUTE_VAR: &str = "HANGMAN_MUTE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Seed for the word picker (and, salted, for noise synthesis).
    pub seed: u32,
    /// Play silently without opening an audio device.
    pub mute: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            mute: false,
        }
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; an unparsable seed falls back to the clock.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::resolve(lookup, clock_seed)
    }

    /// `fallback` supplies the seed when `HANGMAN_SEED` is unset or unparsable.
    fn resolve(lookup: impl Fn(&str) -> Option<String>, fallback: impl Fn() -> u32) -> Self {
        let seed = match lookup(SEED_VAR) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(seed) => seed,
                Err(e) => {
                    warn!("Ignoring {}={:?}: {}, using clock seed", SEED_VAR, raw, e);
                    fallback()
                }
            },
            None => fallback(),
        };
        Self {
            seed,
            mute: lookup(MUTE_VAR).is_some(),
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
