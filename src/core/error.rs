//! Error and rejection types.
//!
//! Two different failure channels exist:
//!
//! - [`GameError`]: an invariant was violated (off-board coordinate, unit ID
//!   collision, dangling reference). These indicate an engine or host bug and
//!   are returned as `Err`.
//! - [`Rejection`]: player input was not legal right now (occupied tile, not
//!   enough mana, empty hand slot, ...). The action is dropped without touching
//!   state and reported as `Ok(ActionStatus::Rejected(..))`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::UnitId;
use crate::cards::CardId;

/// Invariant violations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("tile ({x}, {y}) is outside the 9x5 board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("unit id {0} is already in use")]
    UnitIdCollision(UnitId),

    #[error("unknown unit {0}")]
    UnknownUnit(UnitId),

    #[error("unknown card {0}")]
    UnknownCard(CardId),

    #[error("card {0} is already registered")]
    DuplicateCard(CardId),

    #[error("card {0} has no creature stats")]
    NotACreature(CardId),
}

/// Why an inbound action was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The match already has a winner.
    GameOver,
    /// The clicked hand slot holds no card.
    EmptyHandSlot,
    /// The caster cannot pay the card's mana cost.
    InsufficientMana,
    /// The tile is occupied, off the board or not highlighted.
    IllegalTarget,
    /// The unit cannot act (moved, attacked, stunned or not owned).
    UnitCannotAct,
    /// Nothing is selected that the click could apply to.
    NothingSelected,
}

/// Outcome of an inbound action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    /// State changed.
    Applied,
    /// Nothing changed.
    Rejected(Rejection),
}

impl ActionStatus {
    /// True if the action changed state.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, ActionStatus::Applied)
    }
}
