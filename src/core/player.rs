//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! A match always has exactly two seats: the human at index 0 and the AI at
//! index 1. Whose turn it is lives in `GameState` as a `PlayerId`; the `Player`
//! values themselves never move.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::entity::UnitId;
use crate::cards::CardId;

/// Seat identifier: `PlayerId::HUMAN` or `PlayerId::AI`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The human seat (moves first).
    pub const HUMAN: PlayerId = PlayerId(0);

    /// The AI seat.
    pub const AI: PlayerId = PlayerId(1);

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// True for the human seat, which faces towards higher columns.
    #[must_use]
    pub const fn is_human_side(self) -> bool {
        self.0 == 0
    }

    /// Both seats, human first.
    pub fn both() -> [PlayerId; 2] {
        [PlayerId::HUMAN, PlayerId::AI]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PlayerId::HUMAN => write!(f, "Human"),
            _ => write!(f, "AI"),
        }
    }
}

/// Per-player data with one slot per seat.
///
/// ```
/// use grid_duel::core::{PlayerId, PlayerMap};
///
/// let mut mana: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// mana[PlayerId::AI] = 3;
/// assert_eq!(mana[PlayerId::HUMAN], 0);
/// assert_eq!(mana[PlayerId::AI], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::HUMAN), factory(PlayerId::AI)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Who drives a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves arrive as click events from the transport layer.
    Human,
    /// Moves are produced by `ai::AiPlayer`.
    Ai,
}

/// An equipped avatar artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Hits left before the artifact breaks.
    pub robustness: u32,
    pub equipped: bool,
}

/// A seat's resources: health, mana, hand, deck and avatar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub kind: PlayerKind,
    pub health: i32,
    pub mana: u32,
    /// Hand in slot order; slot 1 is index 0.
    pub hand: Vec<CardId>,
    /// Front is the next draw.
    pub deck: VecDeque<CardId>,
    pub avatar: UnitId,
    pub artifact: Option<Artifact>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, kind: PlayerKind, health: i32, avatar: UnitId, deck: Vec<CardId>) -> Self {
        Self {
            id,
            kind,
            health,
            mana: 0,
            hand: Vec::new(),
            deck: deck.into(),
            avatar,
            artifact: None,
        }
    }

    /// Set health, clamped to `max`.
    pub fn set_health(&mut self, health: i32, max: i32) {
        self.health = health.min(max);
    }

    /// Set mana, clamped to `max`.
    pub fn set_mana(&mut self, mana: u32, max: u32) {
        self.mana = mana.min(max);
    }

    /// True once health has dropped to zero or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Card in a 1-based hand slot.
    #[must_use]
    pub fn card_in_slot(&self, slot: usize) -> Option<CardId> {
        slot.checked_sub(1).and_then(|i| self.hand.get(i)).copied()
    }

    /// Remove the card at a 1-based slot, shifting later cards down.
    pub fn take_from_slot(&mut self, slot: usize) -> Option<CardId> {
        let index = slot.checked_sub(1)?;
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }
}
