//! Board: tiles and unit placement.
//!
//! ## Key Types
//!
//! - `Tile`: one grid cell with its position and occupant back-reference
//! - `Board`: owns the 9x5 tile grid and the occupancy relation

mod grid;
mod tile;

pub use grid::Board;
pub use tile::Tile;
