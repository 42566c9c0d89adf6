//! # grid-duel
//!
//! Rules engine for a two-player tactical card game played on a 9x5 grid.
//!
//! ## Design Principles
//!
//! 1. **One mutable context per match**: `GameState` owns the board, units,
//!    both players, selection and RNG. Every rule is a method on it.
//!
//! 2. **Reject before mutate**: illegal player input comes back as
//!    `ActionStatus::Rejected` with the state untouched; broken invariants are
//!    `GameError`s.
//!
//! 3. **Events out, no pacing**: every visible change is queued as a
//!    `GameEvent`. The host drains the queue and decides how to animate it.
//!
//! 4. **Explicit catalog**: card definitions and the name → ability / spell
//!    tables live in a `CardCatalog` built by the host and shared via `Arc`.
//!
//! ## Modules
//!
//! - `core`: IDs, coordinates, players, state, actions, RNG, config, errors, events
//! - `board`: tile grid and unit occupancy
//! - `units`: combat units
//! - `cards`: card definitions, catalog and starter decks
//! - `abilities`: Deathwatch, Opening Gambit, Provoke, Flying, Rush, Zeal
//! - `spells`: two-phase targeted spell effects
//! - `rules`: turns, summoning, combat and the click handlers
//! - `ai`: mechanical computer seat

pub mod core;
pub mod board;
pub mod units;
pub mod cards;
pub mod abilities;
pub mod spells;
pub mod rules;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ActionStatus, Coord, GameConfig, GameError, GameEvent, GameRng,
    GameState, HighlightMode, Player, PlayerId, PlayerMap, Position, Rejection, UnitId,
};

pub use crate::board::{Board, Tile};

pub use crate::units::{OnHitListener, Unit};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, CardType};

pub use crate::abilities::{Ability, AbilityKind, DeathwatchEffect, GambitEffect};

pub use crate::spells::{Spell, TargetRule};

pub use crate::rules::{GameResult, VictoryReason};

pub use crate::ai::{AiPlayer, SeatController};
