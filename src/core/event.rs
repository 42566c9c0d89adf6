//! Outbound state-change events.
//!
//! The rules never draw anything. Each change the UI should reflect is pushed
//! once onto the match's event queue; the host drains the queue with
//! `GameState::drain_events` and decides how to render and pace it.

use serde::{Deserialize, Serialize};

use super::entity::UnitId;
use super::player::PlayerId;
use super::position::Position;
use crate::cards::CardId;

/// How a highlighted tile is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightMode {
    /// A legal destination (move, summon, friendly spell target).
    Plain,
    /// An attack or hostile spell target.
    Danger,
}

/// Named effect animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Animation {
    Summon,
    Attack,
    Hit,
    Death,
    Buff,
    Heal,
    Move,
}

/// A state change for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TileHighlighted { position: Position, mode: HighlightMode },
    TileCleared { position: Position },
    UnitPlaced { unit: UnitId, name: String, owner: PlayerId, position: Position },
    UnitMoved { unit: UnitId, from: Position, to: Position },
    UnitRemoved { unit: UnitId, position: Position },
    UnitStats { unit: UnitId, health: i32, attack: i32 },
    Animation { position: Position, animation: Animation },
    PlayerHealth { player: PlayerId, health: i32 },
    PlayerMana { player: PlayerId, mana: u32 },
    Notification { player: PlayerId, message: String },
    /// A card entered the 1-based hand slot.
    HandCardAdded { player: PlayerId, slot: usize, card: CardId },
    /// The 1-based slot was emptied; later slots shifted down by one.
    HandCardRemoved { player: PlayerId, slot: usize },
    HandRevealed { player: PlayerId, cards: Vec<CardId> },
    GameOver { winner: PlayerId },
}
