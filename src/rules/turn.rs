//! Turn lifecycle: end-turn and card draw.
//!
//! The match is a two-state machine (human turn, AI turn). `end_turn` moves
//! mana, swaps the seats and refreshes the starting seat; draws happen at
//! match start and at the beginning of each turn.

use log::{debug, info};

use super::engine::VictoryReason;
use crate::core::{GameEvent, GameState, PlayerId};

impl GameState {
    /// Finish the current seat's turn and start the opponent's.
    pub fn end_turn(&mut self) {
        let ending = self.current_player();
        let starting = ending.opponent();

        self.clear_selection();

        self.set_mana(ending, 0);
        let mana = self.config().mana_for_turn(self.turn_number());
        self.set_mana(starting, mana);

        self.advance_turn();
        info!("turn {}: {} to act with {} mana", self.turn_number(), starting, mana);

        let cards = self.player(ending).hand.clone();
        self.emit(GameEvent::HandRevealed { player: ending, cards });
        self.draw_card(starting);

        for unit in self.units_mut() {
            if unit.owner == starting {
                unit.refresh();
            } else {
                unit.is_stunned = false;
            }
        }
    }

    /// Move the top card of a seat's deck into its hand.
    ///
    /// A full hand discards the card. Drawing with an empty deck does nothing,
    /// unless the hand is also empty, which loses the match.
    pub fn draw_card(&mut self, seat: PlayerId) {
        let player = self.player(seat);
        if player.deck.is_empty() {
            if player.hand.is_empty() {
                info!("{} has no cards left", seat);
                self.declare_winner(seat.opponent(), VictoryReason::DeckedOut);
            }
            return;
        }

        let max_hand = self.config().max_hand_size;
        let hand_full = player.hand.len() >= max_hand;
        let Some(card) = self.player_mut(seat).deck.pop_front() else {
            return;
        };

        if hand_full {
            debug!("{} discards {}: hand full", seat, card);
            self.emit(GameEvent::Notification {
                player: seat,
                message: "Hand is full, card discarded".to_string(),
            });
            return;
        }

        let hand = &mut self.player_mut(seat).hand;
        hand.push(card);
        let slot = hand.len();
        self.emit(GameEvent::HandCardAdded { player: seat, slot, card });
    }
}
