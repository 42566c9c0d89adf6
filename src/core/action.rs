//! Inbound actions and the action history.
//!
//! The transport layer turns raw messages into one of three `Action`s. Every
//! action that changes state is recorded with the turn and seat that issued
//! it, which is enough to replay a match from its seed.
//!
//! ```
//! use grid_duel::core::{Action, Coord};
//!
//! let click = Action::TileClicked { tile: Coord::new(3, 2).unwrap() };
//! assert_ne!(click, Action::EndTurn);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Coord;

/// An inbound player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A hand card was clicked; slots are 1-based.
    CardClicked { slot: usize },
    /// A board tile was clicked.
    TileClicked { tile: Coord },
    /// The end-turn button was pressed.
    EndTurn,
}

/// An applied action in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat that issued the action.
    pub player: PlayerId,

    /// The action.
    pub action: Action,

    /// Turn number when it was applied.
    pub turn: u32,

    /// Position in the history, starting at 0.
    pub sequence: u32,
}
