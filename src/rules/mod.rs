//! Game rules, implemented as operations on `GameState`.
//!
//! - `engine`: match result and the `apply_action` dispatch point
//! - `turn`: end-turn and card draw
//! - `summon`: creature summons, tokens and card play
//! - `combat`: movement, attacks, damage, healing and unit removal
//! - `input`: card/tile/end-turn click handlers and the selection flow
//!
//! Every handler validates before it mutates: a rejected action leaves the
//! state untouched and comes back as `ActionStatus::Rejected`.

pub mod engine;
pub mod turn;
pub mod summon;
pub mod combat;
pub mod input;

pub use engine::{GameResult, VictoryReason};
pub use summon::WRAITHLING;
