//! Match outcome and the single inbound dispatch point.
//!
//! Hosts feed every player action through `GameState::apply_action`; it
//! routes to the click/end-turn handlers, which validate before mutating and
//! record applied actions in the history.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionStatus, GameError, GameState, PlayerId};

/// How a match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryReason {
    /// The loser's health dropped to zero.
    HealthDepleted,
    /// The loser had to draw with an empty deck and an empty hand.
    DeckedOut,
}

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: VictoryReason,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

impl GameState {
    /// Apply one inbound action for the seat whose turn it is.
    pub fn apply_action(&mut self, action: Action) -> Result<ActionStatus, GameError> {
        let status = match action {
            Action::CardClicked { slot } => self.on_card_clicked(slot)?,
            Action::TileClicked { tile } => self.on_tile_clicked(tile.x(), tile.y())?,
            Action::EndTurn => self.on_end_turn()?,
        };
        if let ActionStatus::Rejected(reason) = status {
            debug!("{:?} from {} rejected: {:?}", action, self.current_player(), reason);
        }
        Ok(status)
    }
}
