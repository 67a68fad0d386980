//! Integration tests for the game state machine driven through the facade.

use tui_hangman::core::{
    CatalogError, GameSession, GameState, GuessOutcome, LevelCatalog, SimpleRng, Tier, WordEntry,
};
use tui_hangman::types::{GameAction, GuessState, Letter, Phase, SoundEffect, MAX_LIVES};

fn l(ch: char) -> Letter {
    Letter::from_char(ch).unwrap()
}

fn guess(state: &mut GameState, ch: char) -> bool {
    state.apply_action(GameAction::Guess(l(ch)))
}

/// Guess every distinct letter of the current word.
fn solve(state: &mut GameState) {
    let word = state.session().unwrap().target_word().to_string();
    for ch in word.chars() {
        guess(state, ch);
    }
}

/// Letters absent from the current word.
fn misses(state: &GameState) -> Vec<Letter> {
    let word = state.session().unwrap().target_word();
    Letter::all()
        .filter(|letter| !word.contains(letter.as_char()))
        .collect()
}

#[test]
fn test_full_career_with_builtin_catalog() {
    let catalog = LevelCatalog::builtin().unwrap();
    let mut state = GameState::new(catalog, 2024);
    assert_eq!(state.phase(), Phase::Menu);
    assert_eq!(state.tier_count(), 3);

    assert!(state.apply_action(GameAction::Start));
    for (tier, name) in ["Easy", "Medium", "Hard"].iter().enumerate() {
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.tier(), tier);
        assert_eq!(state.tier_name(), *name);

        solve(&mut state);
        assert_eq!(state.phase(), Phase::Victory);
        assert_eq!(state.session().unwrap().lives(), MAX_LIVES);
        assert_eq!(state.take_sounds().last(), Some(&SoundEffect::Win));

        assert!(state.apply_action(GameAction::Continue));
    }
    assert_eq!(state.phase(), Phase::GameComplete);

    // Starting over resets to the first tier.
    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.tier(), 0);
}

#[test]
fn test_words_come_from_the_current_tier() {
    let catalog = LevelCatalog::builtin().unwrap();
    for seed in 0..50 {
        let mut state = GameState::new(catalog.clone(), seed);
        state.apply_action(GameAction::Start);
        let word = state.session().unwrap().target_word().to_string();
        assert!(catalog
            .entries_for(0)
            .unwrap()
            .iter()
            .any(|e| e.word() == word));
    }
}

#[test]
fn test_losing_then_retrying_keeps_the_tier() {
    let mut state = GameState::new(LevelCatalog::builtin().unwrap(), 7);
    state.apply_action(GameAction::Start);
    solve(&mut state);
    state.apply_action(GameAction::Continue);
    assert_eq!(state.tier(), 1);
    state.take_sounds();

    let wrong = misses(&state);
    assert!(wrong.len() >= MAX_LIVES as usize);

    for &letter in wrong.iter().take(MAX_LIVES as usize) {
        assert!(state.apply_action(GameAction::Guess(letter)));
    }
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.session().unwrap().lives(), 0);
    let sounds = state.take_sounds();
    assert_eq!(sounds.last(), Some(&SoundEffect::Lose));

    // Guesses are ignored once the round is over.
    assert!(!state.apply_action(GameAction::Guess(wrong[MAX_LIVES as usize - 1])));

    let round = state.round_id();
    assert!(state.apply_action(GameAction::Retry));
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.tier(), 1);
    assert_eq!(state.round_id(), round + 1);
    assert_eq!(state.session().unwrap().lives(), MAX_LIVES);
}

#[test]
fn test_actions_out_of_phase_are_rejected() {
    let mut state = GameState::new(LevelCatalog::builtin().unwrap(), 1);
    assert!(!state.apply_action(GameAction::Retry));
    assert!(!state.apply_action(GameAction::Continue));
    assert!(!guess(&mut state, 'A'));
    assert_eq!(state.phase(), Phase::Menu);

    state.apply_action(GameAction::Start);
    assert!(!state.apply_action(GameAction::Start));
    assert!(!state.apply_action(GameAction::Continue));
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.take_sounds().is_empty());
}

#[test]
fn test_session_reveals_every_position() {
    let catalog = LevelCatalog::new(vec![Tier::new(
        "Only",
        vec![WordEntry::new("BANANA", "Fruit")],
    )])
    .unwrap();
    let mut state = GameState::new(catalog, 3);
    state.apply_action(GameAction::Start);

    guess(&mut state, 'A');
    let session = state.session().unwrap();
    assert_eq!(session.mask_string(), "_A_A_A");
    assert_eq!(session.guess_state(l('A')), GuessState::Correct);

    guess(&mut state, 'N');
    assert_eq!(state.session().unwrap().mask_string(), "_ANANA");
    assert!(state.accepts_guess(l('B')));
    assert!(!state.accepts_guess(l('A')));

    guess(&mut state, 'B');
    assert_eq!(state.phase(), Phase::Victory);
    assert_eq!(state.snapshot().mask_string(), "BANANA");
}

#[test]
fn test_repeated_guess_has_no_effect() {
    let catalog = LevelCatalog::new(vec![Tier::new(
        "Only",
        vec![WordEntry::new("DOG", "Barks")],
    )])
    .unwrap();
    let mut state = GameState::new(catalog, 3);
    state.apply_action(GameAction::Start);

    assert!(guess(&mut state, 'Z'));
    state.take_sounds();
    assert!(!guess(&mut state, 'Z'));
    assert!(state.take_sounds().is_empty());
    assert_eq!(state.session().unwrap().lives(), MAX_LIVES - 1);
}

#[test]
fn test_guess_outcomes_from_session() {
    let catalog =
        LevelCatalog::new(vec![Tier::new("Only", vec![WordEntry::new("LOOP", "Repeat")])])
            .unwrap();
    let mut session = GameSession::start_round(&catalog, 0, &mut SimpleRng::new(1)).unwrap();
    assert_eq!(session.guess(l('O')), GuessOutcome::Correct { revealed: 2 });
    assert_eq!(session.guess(l('O')), GuessOutcome::Repeated);
    assert_eq!(session.guess(l('X')), GuessOutcome::Wrong);
    assert_eq!(session.mistakes(), 1);
}

#[test]
fn test_sessions_only_start_from_validated_words() {
    for word in ["", "C-T"] {
        let result = LevelCatalog::new(vec![Tier::new("Only", vec![WordEntry::new(word, "x")])]);
        assert!(
            matches!(
                result,
                Err(CatalogError::EmptyWord { .. } | CatalogError::InvalidWord { .. })
            ),
            "{word:?} was accepted"
        );
    }

    let catalog =
        LevelCatalog::new(vec![Tier::new("Only", vec![WordEntry::new("CAT", "x")])]).unwrap();
    let session = GameSession::start_round(&catalog, 0, &mut SimpleRng::new(1)).unwrap();
    assert_eq!(session.reveal().len(), session.target_word().len());
    assert!(!session.is_solved());
    assert!(GameSession::start_round(&catalog, 1, &mut SimpleRng::new(1)).is_none());
}
