//! Board coordinates.
//!
//! The board is 9 columns wide and 5 rows tall. A `Coord` (column, row) is the
//! authoritative identity of a tile. `Position` pairs a `Coord` with the pixel
//! location the renderer draws it at; the pixel half is derived and never
//! consulted by any rule.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;

/// Number of tile columns.
pub const BOARD_WIDTH: i32 = 9;

/// Number of tile rows.
pub const BOARD_HEIGHT: i32 = 5;

/// Pixel offset of tile (0, 0).
pub const TILE_ORIGIN_PX: i32 = 45;

/// Pixel distance between neighbouring tile origins.
pub const TILE_STRIDE_PX: i32 = 120;

/// Up to eight neighbours of a tile.
pub type Neighbours = SmallVec<[Coord; 8]>;

/// Tile coordinate: column `x` in `0..9`, row `y` in `0..5`.
///
/// Every `Coord` is on the board: the fields are private, and deserializing
/// an off-board pair fails with `OutOfBounds`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord", into = "RawCoord")]
pub struct Coord {
    x: i32,
    y: i32,
}

/// Unchecked wire form of a `Coord`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawCoord {
    x: i32,
    y: i32,
}

impl TryFrom<RawCoord> for Coord {
    type Error = GameError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.x, raw.y)
    }
}

impl From<Coord> for RawCoord {
    fn from(coord: Coord) -> Self {
        Self { x: coord.x, y: coord.y }
    }
}

impl Coord {
    /// Default tile of the human avatar.
    pub const HUMAN_AVATAR: Coord = Coord { x: 2, y: 3 };

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Create a coordinate, failing if it is off the board.
    pub fn new(x: i32, y: i32) -> Result<Self, GameError> {
        if Self::in_bounds(x, y) {
            Ok(Self { x, y })
        } else {
            Err(GameError::OutOfBounds { x, y })
        }
    }

    /// Check raw values against the board bounds.
    #[must_use]
    pub const fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_WIDTH && y >= 0 && y < BOARD_HEIGHT
    }

    /// Offset this coordinate, returning `None` when the result is off the board.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::new(self.x + dx, self.y + dy).ok()
    }

    /// The 8 Chebyshev neighbours clipped to the board, in row-major order.
    #[must_use]
    pub fn neighbours(self) -> Neighbours {
        let mut out = Neighbours::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if let Some(c) = self.offset(dx, dy) {
                    out.push(c);
                }
            }
        }
        out
    }

    /// True when `other` is one of this tile's 8 neighbours.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }

    /// Mirror the column across the board's vertical centre line.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            x: BOARD_WIDTH - self.x - 1,
            y: self.y,
        }
    }

    /// Iterate every tile in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_HEIGHT).flat_map(|y| (0..BOARD_WIDTH).map(move |x| Coord { x, y }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A tile coordinate plus its pixel rendering hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub tile: Coord,
    pub pixel_x: i32,
    pub pixel_y: i32,
}

impl From<Coord> for Position {
    fn from(tile: Coord) -> Self {
        Self {
            tile,
            pixel_x: TILE_ORIGIN_PX + tile.x * TILE_STRIDE_PX,
            pixel_y: TILE_ORIGIN_PX + tile.y * TILE_STRIDE_PX,
        }
    }
}
