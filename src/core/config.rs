//! Match configuration.
//!
//! The rule constants of a match live in one serde struct so a host can load
//! them from its own settings file. `Default` gives the standard rules.

use serde::{Deserialize, Serialize};

use super::position::Coord;

/// Rule constants for one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the match RNG.
    pub seed: u64,

    /// Health each player (and avatar) starts with.
    pub starting_health: i32,

    /// Cap applied whenever player health is set.
    pub max_health: i32,

    /// Cap applied whenever mana is set.
    pub max_mana: u32,

    /// Cards a hand can hold; further draws are discarded.
    pub max_hand_size: usize,

    /// Cards each player draws when the match is created.
    pub opening_hand_size: usize,

    /// Attack power of both avatars.
    pub avatar_attack: i32,

    /// Human avatar tile; the AI avatar starts on its mirror.
    pub human_avatar_tile: Coord,

    /// Shuffle both decks at match creation.
    pub shuffle_decks: bool,

    /// Re-fire every placed Opening Gambit unit whenever a card summons a
    /// creature, not only the new unit's own gambit.
    pub retrigger_gambits_on_summon: bool,

    /// Deepest nested trigger chain that still resolves.
    pub max_trigger_depth: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_health: 20,
            max_health: 20,
            max_mana: 9,
            max_hand_size: 6,
            opening_hand_size: 3,
            avatar_attack: 2,
            human_avatar_tile: Coord::HUMAN_AVATAR,
            shuffle_decks: false,
            retrigger_gambits_on_summon: true,
            max_trigger_depth: 16,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    /// Enable or disable deck shuffling.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle_decks = shuffle;
        self
    }

    /// Choose whether every summon re-fires existing Opening Gambits.
    #[must_use]
    pub fn with_gambit_retrigger(mut self, enabled: bool) -> Self {
        self.retrigger_gambits_on_summon = enabled;
        self
    }

    /// Mana granted to the player starting a turn, given the turn counter
    /// before it advances.
    #[must_use]
    pub fn mana_for_turn(&self, turn: u32) -> u32 {
        (turn + 1).min(self.max_mana)
    }
}
