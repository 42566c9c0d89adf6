//! The 9x5 tile grid and unit occupancy.
//!
//! `Board` owns every `Tile` and the two-way occupancy relation between units
//! and tiles. It guarantees that a tile holds at most one unit and a unit
//! stands on at most one tile; both directions are updated together by every
//! mutation.
//!
//! ## Usage
//!
//! ```
//! use grid_duel::board::Board;
//! use grid_duel::core::{Coord, UnitId};
//!
//! let mut board = Board::new();
//! let tile = Coord::new(4, 2).unwrap();
//!
//! assert!(board.place_unit(UnitId(7), tile, false));
//! assert_eq!(board.unit_on(tile), Some(UnitId(7)));
//!
//! // Occupied tiles refuse a second unit unless overwriting is allowed.
//! assert!(!board.place_unit(UnitId(8), tile, false));
//! ```

use rustc_hash::FxHashMap;

use super::tile::Tile;
use crate::core::{Coord, GameError, Neighbours, UnitId, BOARD_HEIGHT, BOARD_WIDTH};

/// Tile grid plus the unit → tile index.
#[derive(Clone, Debug)]
pub struct Board {
    /// Row-major, `y * BOARD_WIDTH + x`.
    tiles: Vec<Tile>,
    locations: FxHashMap<UnitId, Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: Coord::all().map(Tile::new).collect(),
            locations: FxHashMap::default(),
        }
    }

    fn slot(coord: Coord) -> usize {
        (coord.y() * BOARD_WIDTH + coord.x()) as usize
    }

    /// Look up a tile by raw coordinates.
    pub fn tile(&self, x: i32, y: i32) -> Result<&Tile, GameError> {
        let coord = Coord::new(x, y)?;
        Ok(&self.tiles[Self::slot(coord)])
    }

    /// Look up a tile by coordinate.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> &Tile {
        &self.tiles[Self::slot(coord)]
    }

    /// Unit standing on a tile.
    #[must_use]
    pub fn unit_on(&self, coord: Coord) -> Option<UnitId> {
        self.tile_at(coord).occupant
    }

    /// Tile a unit stands on.
    #[must_use]
    pub fn location_of(&self, unit: UnitId) -> Option<Coord> {
        self.locations.get(&unit).copied()
    }

    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.unit_on(coord).is_none()
    }

    /// Put a unit on a tile.
    ///
    /// If the unit is already on the board it leaves its old tile. When the
    /// target is occupied and `allow_overwrite` is false nothing changes and
    /// `false` is returned; with `allow_overwrite` the previous occupant loses
    /// its location.
    pub fn place_unit(&mut self, unit: UnitId, coord: Coord, allow_overwrite: bool) -> bool {
        match self.unit_on(coord) {
            Some(existing) if existing == unit => return true,
            Some(existing) => {
                if !allow_overwrite {
                    return false;
                }
                self.locations.remove(&existing);
            }
            None => {}
        }

        if let Some(old) = self.locations.insert(unit, coord) {
            self.tiles[Self::slot(old)].occupant = None;
        }
        self.tiles[Self::slot(coord)].occupant = Some(unit);
        true
    }

    /// Clear a tile, returning the unit that stood there.
    pub fn remove_unit(&mut self, coord: Coord) -> Option<UnitId> {
        let unit = self.tiles[Self::slot(coord)].occupant.take()?;
        self.locations.remove(&unit);
        Some(unit)
    }

    /// The 8 Chebyshev neighbours of a tile, clipped to the board.
    #[must_use]
    pub fn adjacent(&self, coord: Coord) -> Neighbours {
        coord.neighbours()
    }

    /// Neighbours nobody stands on.
    #[must_use]
    pub fn adjacent_empty(&self, coord: Coord) -> Neighbours {
        coord
            .neighbours()
            .into_iter()
            .filter(|&c| self.is_empty_at(c))
            .collect()
    }

    /// The tile one column behind `coord` from a side's point of view.
    ///
    /// The human side's "behind" is column - 1, the AI side's column + 1.
    #[must_use]
    pub fn tile_behind(&self, coord: Coord, is_human_side: bool) -> Option<Coord> {
        let dx = if is_human_side { -1 } else { 1 };
        coord.offset(dx, 0)
    }

    /// The tile one column ahead of `coord` from a side's point of view.
    #[must_use]
    pub fn tile_ahead(&self, coord: Coord, is_human_side: bool) -> Option<Coord> {
        let dx = if is_human_side { 1 } else { -1 };
        coord.offset(dx, 0)
    }

    /// Every empty tile in row-major order.
    pub fn empty_tiles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.tiles.iter().filter(|t| t.is_empty()).map(Tile::coord)
    }

    /// Every (tile, unit) pair in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, UnitId)> + '_ {
        self.tiles
            .iter()
            .filter_map(|t| t.occupant.map(|u| (t.coord(), u)))
    }

    /// Number of units on the board.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.locations.len()
    }

    /// Verify both directions of the occupancy relation agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let from_tiles = self.occupied().count();
        from_tiles == self.locations.len()
            && self
                .locations
                .iter()
                .all(|(&unit, &coord)| self.unit_on(coord) == Some(unit))
            && self.tiles.len() == (BOARD_WIDTH * BOARD_HEIGHT) as usize
    }
}
