//! Game state module - the top-level state machine
//!
//! MENU -> PLAYING -> (VICTORY | GAME_OVER) -> next tier, retry or GAME_COMPLETE.
//! All mutation happens in [`GameState::apply_action`], one action at a time.
//! Sound cues are queued as a side effect and drained by the host with
//! [`GameState::take_sounds`]; game logic never depends on them being played.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::catalog::LevelCatalog;
use crate::rng::SimpleRng;
use crate::session::{GameSession, GuessOutcome};
use crate::snapshot::{GameSnapshot, KeySnapshot};
use crate::types::*;

/// At most one guess sound plus one end-of-round sound per action.
pub type SoundCues = ArrayVec<SoundEffect, 2>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    catalog: LevelCatalog,
    rng: SimpleRng,
    phase: Phase,
    /// Current tier, 0-based.
    tier: usize,
    /// Round in progress (or the one that just ended). `None` only before the first start.
    session: Option<GameSession>,
    /// Monotonic round id (increments on every round start).
    round_id: u32,
    pending_sounds: SoundCues,
}

impl GameState {
    /// Create a game in MENU with the given RNG seed
    pub fn new(catalog: LevelCatalog, seed: u32) -> Self {
        Self {
            catalog,
            rng: SimpleRng::new(seed),
            phase: Phase::Menu,
            tier: 0,
            session: None,
            round_id: 0,
            pending_sounds: SoundCues::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tier(&self) -> usize {
        self.tier
    }

    pub fn tier_count(&self) -> usize {
        self.catalog.tier_count()
    }

    pub fn tier_name(&self) -> &str {
        self.catalog.tier_name(self.tier).unwrap_or_default()
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Apply a game action
    ///
    /// Returns `true` if the action changed the game. Actions that are not
    /// valid in the current phase, and guesses of already used letters, are
    /// ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (Phase::Menu | Phase::GameComplete, GameAction::Start) => self.start_round(0),
            (Phase::GameOver, GameAction::Retry) => self.start_round(self.tier),
            (Phase::Victory, GameAction::Continue) => {
                if self.tier + 1 < self.catalog.tier_count() {
                    self.start_round(self.tier + 1)
                } else {
                    info!(tiers = self.catalog.tier_count(), "all tiers cleared");
                    self.phase = Phase::GameComplete;
                    true
                }
            }
            (Phase::Playing, GameAction::Guess(letter)) => self.submit_guess(letter),
            _ => false,
        }
    }

    /// Drain the sound cues queued by the last actions.
    pub fn take_sounds(&mut self) -> SoundCues {
        std::mem::take(&mut self.pending_sounds)
    }

    /// Update the hover flag of the virtual keyboard.
    pub fn set_hover(&mut self, letter: Option<Letter>) {
        if let Some(session) = self.session.as_mut() {
            session.set_hover(letter);
        }
    }

    /// Whether a guess of `letter` would be evaluated right now.
    pub fn accepts_guess(&self, letter: Letter) -> bool {
        self.phase == Phase::Playing
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.guess_state(letter) == GuessState::Unused)
    }

    fn start_round(&mut self, tier: usize) -> bool {
        let Some(session) = GameSession::start_round(&self.catalog, tier, &mut self.rng) else {
            return false;
        };

        self.round_id = self.round_id.wrapping_add(1);
        info!(
            round = self.round_id,
            tier,
            letters = session.target().len(),
            "round started"
        );

        self.tier = tier;
        self.session = Some(session);
        self.phase = Phase::Playing;
        true
    }

    fn submit_guess(&mut self, letter: Letter) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        match session.guess(letter) {
            GuessOutcome::Repeated => return false,
            GuessOutcome::Correct { revealed } => {
                debug!(%letter, revealed, "correct guess");
                self.queue_sound(SoundEffect::Correct);
            }
            GuessOutcome::Wrong => {
                debug!(%letter, lives = session.lives(), "wrong guess");
                self.queue_sound(SoundEffect::Wrong);
            }
        }

        // Borrow again: queue_sound needed &mut self.
        let Some(session) = self.session.as_ref() else {
            return true;
        };

        // A solved word wins even if it was the last possible move.
        if session.is_solved() {
            info!(round = self.round_id, tier = self.tier, "round won");
            self.phase = Phase::Victory;
            self.queue_sound(SoundEffect::Win);
        } else if session.is_lost() {
            info!(round = self.round_id, tier = self.tier, "round lost");
            self.phase = Phase::GameOver;
            self.queue_sound(SoundEffect::Lose);
        }

        true
    }

    fn queue_sound(&mut self, effect: SoundEffect) {
        // Capacity covers one guess cue and one end-of-round cue; drop extras
        // if the host never drains.
        if self.pending_sounds.is_full() {
            self.pending_sounds.remove(0);
        }
        self.pending_sounds.push(effect);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.tier = self.tier;
        out.tier_count = self.catalog.tier_count();
        out.tier_name.clear();
        out.tier_name.push_str(self.tier_name());
        out.round_id = self.round_id;

        out.word.clear();
        out.hint.clear();
        out.mask.clear();
        match &self.session {
            Some(session) => {
                out.word.push_str(session.target_word());
                out.hint.push_str(session.hint());
                out.mask.extend_from_slice(session.reveal());
                out.lives = session.lives();
                for (dst, key) in out.keys.iter_mut().zip(session.keys()) {
                    *dst = KeySnapshot {
                        letter: key.letter,
                        state: key.state,
                        hover: key.hover,
                    };
                }
            }
            None => {
                out.lives = MAX_LIVES;
                for (dst, letter) in out.keys.iter_mut().zip(ALPHABET) {
                    *dst = KeySnapshot::unused(letter);
                }
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
