//! Computer-controlled seat.
//!
//! The AI plays through the same click handlers as a human: it clicks a hand
//! card, clicks the first highlighted tile, and ends its turn when nothing
//! else is affordable. It makes no tactical decisions.

use log::info;

use crate::core::{ActionStatus, GameError, GameState, PlayerId};

/// Drives one seat for a whole turn.
pub trait SeatController {
    /// Take every action for the current turn, ending with end-turn.
    ///
    /// Returns the number of cards played.
    fn take_turn(&mut self, state: &mut GameState) -> Result<usize, GameError>;
}

/// Plays each affordable card on its first legal target, then ends the turn.
///
/// ```
/// use std::sync::Arc;
/// use grid_duel::ai::{AiPlayer, SeatController};
/// use grid_duel::cards::starter::{ai_deck, human_deck, starter_catalog};
/// use grid_duel::core::{GameConfig, GameState, PlayerId};
///
/// let catalog = Arc::new(starter_catalog().unwrap());
/// let mut state = GameState::new(GameConfig::default(), catalog, human_deck(), ai_deck()).unwrap();
/// state.on_end_turn().unwrap();
///
/// AiPlayer::new().take_turn(&mut state).unwrap();
/// assert_eq!(state.current_player(), PlayerId::HUMAN);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether the card in `slot` is affordable and has somewhere to go.
    fn is_playable(state: &GameState, slot: usize) -> bool {
        let seat = state.current_player();
        let Some(card) = state.player(seat).card_in_slot(slot) else {
            return false;
        };
        let Ok(definition) = state.catalog().lookup(card) else {
            return false;
        };
        if state.player(seat).mana < definition.mana_cost {
            return false;
        }
        if definition.is_creature() {
            !state.summon_targets(seat).is_empty()
        } else {
            state
                .catalog()
                .spell_for(&definition.name)
                .is_some_and(|spell| !spell.valid_targets(state, seat).is_empty())
        }
    }

    /// Click one playable hand slot, then the first tile it lights.
    ///
    /// Unplayable cards are never clicked, so the history holds no dead
    /// selections.
    fn try_play(state: &mut GameState, slot: usize) -> Result<bool, GameError> {
        if !Self::is_playable(state, slot) {
            return Ok(false);
        }
        if !state.on_card_clicked(slot)?.is_applied() {
            return Ok(false);
        }
        let Some(target) = state.selection().highlighted().into_iter().min() else {
            state.clear_selection();
            return Ok(false);
        };
        match state.on_tile_clicked(target.x(), target.y())? {
            ActionStatus::Applied => Ok(true),
            ActionStatus::Rejected(_) => {
                state.clear_selection();
                Ok(false)
            }
        }
    }
}

impl SeatController for AiPlayer {
    fn take_turn(&mut self, state: &mut GameState) -> Result<usize, GameError> {
        let seat: PlayerId = state.current_player();
        let mut played = 0;

        'scan: while !state.is_game_over() {
            for slot in 1..=state.player(seat).hand.len() {
                if Self::try_play(state, slot)? {
                    played += 1;
                    continue 'scan;
                }
            }
            break;
        }

        if !state.is_game_over() {
            state.on_end_turn()?;
        }
        info!("{} played {} card(s)", seat, played);
        Ok(played)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::starter::{ai_deck, human_deck, starter_catalog};
    use crate::cards::CardId;
    use crate::core::{Action, GameConfig};

    #[test]
    fn test_ai_spends_mana_and_passes() {
        let catalog = Arc::new(starter_catalog().unwrap());
        let mut state = GameState::new(GameConfig::default(), catalog, human_deck(), ai_deck()).unwrap();
        state.on_end_turn().unwrap();
        let units_before = state.units_owned_by(PlayerId::AI).len();

        let played = AiPlayer::new().take_turn(&mut state).unwrap();

        // Opening hand + draw: Squire (1), Entangler (1), Golem (2), Truestrike (1) with 2 mana.
        assert!(played >= 1);
        assert!(state.units_owned_by(PlayerId::AI).len() > units_before);
        assert_eq!(state.current_player(), PlayerId::HUMAN);
        assert_eq!(state.player(PlayerId::AI).mana, 0);
    }

    #[test]
    fn test_ai_skips_unaffordable_cards() {
        let catalog = Arc::new(starter_catalog().unwrap());
        let deck = vec![CardId::new(17)];
        let config = GameConfig::default().with_opening_hand(1);
        let mut state = GameState::new(config, catalog, deck.clone(), deck).unwrap();
        state.on_end_turn().unwrap();

        let played = AiPlayer::new().take_turn(&mut state).unwrap();

        assert_eq!(played, 0);
        assert_eq!(state.player(PlayerId::AI).hand.len(), 1);
        assert_eq!(state.current_player(), PlayerId::HUMAN);
    }

    #[test]
    fn test_ai_does_not_record_targetless_card_clicks() {
        let catalog = Arc::new(starter_catalog().unwrap());
        // Truestrike is affordable, but there is no enemy minion to hit.
        let deck = vec![CardId::new(19)];
        let config = GameConfig::default().with_opening_hand(1);
        let mut state = GameState::new(config, catalog, deck.clone(), deck).unwrap();
        state.on_end_turn().unwrap();

        let played = AiPlayer::new().take_turn(&mut state).unwrap();

        assert_eq!(played, 0);
        let ai_actions: Vec<Action> = state
            .history()
            .iter()
            .filter(|r| r.player == PlayerId::AI)
            .map(|r| r.action)
            .collect();
        assert_eq!(ai_actions, vec![Action::EndTurn]);
    }
}
