//! Core engine types: IDs, coordinates, players, state, actions, RNG,
//! configuration, errors and outbound events.
//!
//! Everything the rule modules share lives here. `GameState` is the only
//! mutable context; the rest are small value types.

pub mod entity;
pub mod player;
pub mod position;
pub mod rng;
pub mod config;
pub mod error;
pub mod event;
pub mod action;
pub mod state;

pub use entity::UnitId;
pub use player::{Artifact, Player, PlayerId, PlayerKind, PlayerMap};
pub use position::{Coord, Neighbours, Position, BOARD_HEIGHT, BOARD_WIDTH};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use error::{ActionStatus, GameError, Rejection};
pub use event::{Animation, GameEvent, HighlightMode};
pub use action::{Action, ActionRecord};
pub use state::{GameState, Selection};
