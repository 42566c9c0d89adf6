//! Units on the board.
//!
//! - `Unit`: health, attack, action flags, ability and on-hit hooks
//! - `OnHitListener`: hooks fired when the carrying unit is damaged

mod unit;

pub use unit::{OnHitListener, Unit};
