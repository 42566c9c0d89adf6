//! Match flow integration tests.
//!
//! These tests drive whole matches through the public click handlers and
//! check the turn, mana, hand and victory rules.

use std::sync::Arc;

use grid_duel::ai::{AiPlayer, SeatController};
use grid_duel::cards::starter::{ai_deck, human_deck, starter_catalog};
use grid_duel::cards::CardId;
use grid_duel::core::{
    Action, ActionStatus, Coord, GameConfig, GameEvent, GameState, PlayerId, Rejection,
};
use grid_duel::rules::VictoryReason;

fn new_match(config: GameConfig) -> GameState {
    let catalog = Arc::new(starter_catalog().unwrap());
    GameState::new(config, catalog, human_deck(), ai_deck()).unwrap()
}

fn tile(x: i32, y: i32) -> Coord {
    Coord::new(x, y).unwrap()
}

/// A new match places both avatars and deals the opening hands.
#[test]
fn test_new_match_setup() {
    let state = new_match(GameConfig::default());

    let human = state.unit_at(tile(2, 3)).unwrap();
    let ai = state.unit_at(tile(6, 3)).unwrap();
    assert!(human.is_avatar && human.owner == PlayerId::HUMAN);
    assert!(ai.is_avatar && ai.owner == PlayerId::AI);

    for seat in PlayerId::both() {
        assert_eq!(state.player(seat).health, 20);
        assert_eq!(state.player(seat).hand.len(), 3);
    }
    assert_eq!(state.board.unit_count(), 2);
}

/// Hands stay empty until something draws.
#[test]
fn test_hands_empty_before_draw() {
    let mut state = new_match(GameConfig::default().with_opening_hand(0));
    assert!(state.player(PlayerId::HUMAN).hand.is_empty());
    assert!(state.player(PlayerId::AI).hand.is_empty());

    state.draw_card(PlayerId::HUMAN);

    assert_eq!(state.player(PlayerId::HUMAN).hand, vec![CardId::new(1)]);
}

/// The first end-turn hands the second seat 2 mana.
#[test]
fn test_first_end_turn_grants_two_mana() {
    let mut state = new_match(GameConfig::default());

    state.on_end_turn().unwrap();

    assert_eq!(state.current_player(), PlayerId::AI);
    assert_eq!(state.player(PlayerId::AI).mana, 2);
    assert_eq!(state.player(PlayerId::HUMAN).mana, 0);
}

/// Two end-turns restore the original seat.
#[test]
fn test_turn_swap_is_involution() {
    let mut state = new_match(GameConfig::default());
    let first = state.current_player();

    state.end_turn();
    assert_ne!(state.current_player(), first);
    state.end_turn();

    assert_eq!(state.current_player(), first);
    assert_eq!(state.turn_number(), 3);
}

/// Starting mana after the n-th end-turn is min(n + 1, 9).
#[test]
fn test_mana_sequence() {
    let mut state = new_match(GameConfig::default());
    let mut seen = Vec::new();

    for _ in 0..12 {
        state.end_turn();
        seen.push(state.player(state.current_player()).mana);
    }

    assert_eq!(seen, vec![2, 3, 4, 5, 6, 7, 8, 9, 9, 9, 9, 9]);
}

/// Passing every turn fills the hand to 6 and never past it.
#[test]
fn test_hand_never_exceeds_limit() {
    let mut state = new_match(GameConfig::default());

    for _ in 0..20 {
        state.end_turn();
        for seat in PlayerId::both() {
            assert!(state.player(seat).hand.len() <= 6);
        }
    }
    assert_eq!(state.player(PlayerId::HUMAN).hand.len(), 6);
}

/// Running out of cards loses once; later actions are refused.
#[test]
fn test_decked_out_game_over_once() {
    let catalog = Arc::new(starter_catalog().unwrap());
    let config = GameConfig::default().with_opening_hand(1);
    let mut state = GameState::new(config, catalog, vec![CardId::new(18)], ai_deck()).unwrap();

    // Play the only card, leaving hand and deck empty.
    assert!(state.on_card_clicked(1).unwrap().is_applied());
    assert!(state.on_tile_clicked(3, 3).unwrap().is_applied());
    assert!(state.player(PlayerId::HUMAN).hand.is_empty());

    state.on_end_turn().unwrap();
    state.on_end_turn().unwrap();

    assert_eq!(state.winner(), Some(PlayerId::AI));
    assert_eq!(state.result().unwrap().reason, VictoryReason::DeckedOut);
    assert_eq!(
        state.on_end_turn().unwrap(),
        ActionStatus::Rejected(Rejection::GameOver)
    );
    state.draw_card(PlayerId::HUMAN);

    let overs = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(overs, 1);
}

/// The same seed and inputs produce the same match.
#[test]
fn test_seeded_matches_replay_identically() {
    let config = GameConfig::default().with_seed(7).with_shuffle(true);
    let mut a = new_match(config.clone());
    let mut b = new_match(config);

    for _ in 0..6 {
        for state in [&mut a, &mut b] {
            AiPlayer::new().take_turn(state).unwrap();
        }
    }

    assert_eq!(a.drain_events(), b.drain_events());
    assert_eq!(a.history(), b.history());
}

/// AI against AI keeps the board consistent every turn.
#[test]
fn test_ai_mirror_match_invariants() {
    let mut state = new_match(GameConfig::default().with_seed(3));
    let mut ai = AiPlayer::new();

    for _ in 0..30 {
        if state.is_game_over() {
            break;
        }
        ai.take_turn(&mut state).unwrap();

        assert!(state.board.is_consistent());
        for (_, id) in state.board.occupied() {
            let unit = state.unit(id).unwrap();
            assert!(unit.is_alive());
            assert!(unit.health <= unit.max_health);
        }
        for seat in PlayerId::both() {
            let player = state.player(seat);
            assert!(player.hand.len() <= 6);
            assert!(player.mana <= 9);
            assert!(player.health <= 20);
        }
    }
}

/// Actions go through one dispatch point and land in the history.
#[test]
fn test_apply_action_records_history() {
    let mut state = new_match(GameConfig::default());

    state.apply_action(Action::CardClicked { slot: 1 }).unwrap();
    state.apply_action(Action::TileClicked { tile: tile(3, 3) }).unwrap();
    state.apply_action(Action::EndTurn).unwrap();
    let rejected = state.apply_action(Action::CardClicked { slot: 9 }).unwrap();

    assert_eq!(rejected, ActionStatus::Rejected(Rejection::EmptyHandSlot));
    let actions: Vec<Action> = state.history().iter().map(|r| r.action).collect();
    assert_eq!(
        actions,
        vec![
            Action::CardClicked { slot: 1 },
            Action::TileClicked { tile: tile(3, 3) },
            Action::EndTurn,
        ]
    );
    assert_eq!(state.unit_at(tile(3, 3)).unwrap().name, "Bad Omen");
}

/// Off-board tiles cannot reach the engine: they fail at deserialization.
#[test]
fn test_off_board_tile_action_is_refused() {
    let ok: Action = serde_json::from_str(r#"{"TileClicked":{"tile":{"x":3,"y":3}}}"#).unwrap();
    assert_eq!(ok, Action::TileClicked { tile: tile(3, 3) });

    for raw in [
        r#"{"TileClicked":{"tile":{"x":9,"y":0}}}"#,
        r#"{"TileClicked":{"tile":{"x":-1,"y":0}}}"#,
    ] {
        assert!(serde_json::from_str::<Action>(raw).is_err(), "{raw} accepted");
    }
}
