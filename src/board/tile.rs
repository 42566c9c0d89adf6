//! A single board tile.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Position, UnitId};

/// One cell of the grid.
///
/// The occupant is a back-reference only; `Board` is the authority on which
/// unit stands where and keeps this field in sync.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    pub(super) occupant: Option<UnitId>,
}

impl Tile {
    pub(super) fn new(coord: Coord) -> Self {
        Self {
            position: coord.into(),
            occupant: None,
        }
    }

    /// Tile coordinate.
    #[must_use]
    pub fn coord(&self) -> Coord {
        self.position.tile
    }

    /// Unit standing here, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<UnitId> {
        self.occupant
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}
