//! Spell effects.
//!
//! Spells resolve in two phases:
//! 1. `highlight_valid_targets` clears the current highlights and lights every
//!    tile the spell may target.
//! 2. `apply_effect` resolves the spell on a confirmed tile.
//!
//! ## Key Types
//!
//! - `Spell`: the closed set of spell effects, bound to card names by the catalog
//! - `TargetRule`: which tiles a spell may target

pub mod targeting;

use std::collections::BTreeSet;

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub use targeting::{TargetRule, SWARM_LENGTH};

use crate::core::{ActionStatus, Coord, GameError, GameState, PlayerId, Rejection};

/// Damage dealt by Truestrike.
pub const TRUESTRIKE_DAMAGE: i32 = 2;

/// Health restored by Sundrop Elixir.
pub const SUNDROP_HEAL: i32 = 4;

/// A spell effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spell {
    /// Destroy an enemy minion and summon a Wraithling in its place.
    DarkTerminus,
    /// Equip the caster's avatar with an artifact that spawns Wraithlings when hit.
    HornOfTheForsaken,
    /// Deal 2 damage to an enemy minion.
    TrueStrike,
    /// Restore 4 health to a damaged friendly minion.
    SundropElixir,
    /// Summon three Wraithlings in an empty column.
    WraithlingSwarm,
}

impl Spell {
    #[must_use]
    pub fn target_rule(self) -> TargetRule {
        match self {
            Spell::DarkTerminus | Spell::TrueStrike => TargetRule::EnemyMinion,
            Spell::HornOfTheForsaken => TargetRule::OwnAvatar,
            Spell::SundropElixir => TargetRule::DamagedFriendlyMinion,
            Spell::WraithlingSwarm => TargetRule::EmptyColumn,
        }
    }

    /// Tiles this spell may currently be cast on.
    #[must_use]
    pub fn valid_targets(self, state: &GameState, caster: PlayerId) -> BTreeSet<Coord> {
        self.target_rule().matching_tiles(state, caster)
    }

    /// Replace the current highlights with this spell's targets.
    ///
    /// Returns the number of highlighted tiles.
    pub fn highlight_valid_targets(self, state: &mut GameState, caster: PlayerId) -> usize {
        state.clear_highlights();
        let mode = self.target_rule().highlight_mode();
        let targets = self.valid_targets(state, caster);
        for &coord in &targets {
            state.highlight(coord, mode);
        }
        targets.len()
    }

    /// Resolve the spell on `target`.
    ///
    /// Wraithling Swarm checks the tile against the highlighted set; the
    /// others rely on the caller having validated it.
    pub fn apply_effect(self, state: &mut GameState, caster: PlayerId, target: Coord) -> Result<ActionStatus, GameError> {
        debug!("{} casts {:?} on {}", caster, self, target);
        match self {
            Spell::DarkTerminus => {
                let Some(victim) = state.board.unit_on(target) else {
                    return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
                };
                state.destroy_unit(victim)?;
                state.summon_wraithling(caster, target)?;
            }
            Spell::HornOfTheForsaken => {
                state.equip_horn(caster)?;
                info!("{} equips Horn of the Forsaken", caster);
            }
            Spell::TrueStrike => {
                let Some(victim) = state.board.unit_on(target) else {
                    return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
                };
                state.damage_unit(victim, TRUESTRIKE_DAMAGE)?;
            }
            Spell::SundropElixir => {
                let Some(patient) = state.board.unit_on(target) else {
                    return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
                };
                state.heal_unit(patient, SUNDROP_HEAL)?;
            }
            Spell::WraithlingSwarm => {
                let highlighted = state.selection().mode_of(target).is_some();
                let column = targeting::column_from(target)
                    .filter(|column| column.iter().all(|&c| state.board.is_empty_at(c)));
                let (true, Some(column)) = (highlighted, column) else {
                    return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
                };
                for coord in column {
                    state.summon_wraithling(caster, coord)?;
                }
            }
        }
        Ok(ActionStatus::Applied)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::starter::starter_catalog;
    use crate::core::{GameConfig, HighlightMode, UnitId};
    use crate::units::Unit;

    fn empty_match() -> GameState {
        let catalog = Arc::new(starter_catalog().unwrap());
        GameState::new(GameConfig::default().with_opening_hand(0), catalog, vec![], vec![]).unwrap()
    }

    fn tile(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn place(state: &mut GameState, owner: PlayerId, health: i32, at: Coord) -> UnitId {
        let id = state.alloc_unit_id().unwrap();
        state.insert_unit(Unit::new(id, "Grunt", owner, 1, health), at).unwrap();
        id
    }

    #[test]
    fn test_dark_terminus_replaces_target() {
        let mut state = empty_match();
        let victim = place(&mut state, PlayerId::AI, 9, tile(5, 1));

        let status = Spell::DarkTerminus.apply_effect(&mut state, PlayerId::HUMAN, tile(5, 1)).unwrap();

        assert!(status.is_applied());
        assert!(state.unit(victim).is_none());
        let token = state.unit_at(tile(5, 1)).unwrap();
        assert_eq!(token.owner, PlayerId::HUMAN);
        assert_eq!((token.attack, token.health), (1, 1));
    }

    #[test]
    fn test_enemy_minion_targets_skip_avatars() {
        let mut state = empty_match();
        place(&mut state, PlayerId::AI, 3, tile(5, 1));
        place(&mut state, PlayerId::HUMAN, 3, tile(4, 1));

        let targets = Spell::TrueStrike.valid_targets(&state, PlayerId::HUMAN);

        assert_eq!(targets.into_iter().collect::<Vec<_>>(), vec![tile(5, 1)]);
    }

    #[test]
    fn test_sundrop_targets_damaged_friends_only() {
        let mut state = empty_match();
        let hurt = place(&mut state, PlayerId::HUMAN, 6, tile(4, 1));
        place(&mut state, PlayerId::HUMAN, 6, tile(4, 2));
        let enemy = place(&mut state, PlayerId::AI, 6, tile(5, 1));
        state.unit_mut(hurt).unwrap().take_damage(5);
        state.unit_mut(enemy).unwrap().take_damage(5);

        let targets = Spell::SundropElixir.valid_targets(&state, PlayerId::HUMAN);
        assert_eq!(targets.into_iter().collect::<Vec<_>>(), vec![tile(4, 1)]);

        Spell::SundropElixir.apply_effect(&mut state, PlayerId::HUMAN, tile(4, 1)).unwrap();
        assert_eq!(state.unit(hurt).unwrap().health, 5);
    }

    #[test]
    fn test_horn_targets_own_avatar() {
        let mut state = empty_match();

        let targets = Spell::HornOfTheForsaken.valid_targets(&state, PlayerId::AI);
        assert_eq!(targets.into_iter().collect::<Vec<_>>(), vec![tile(6, 3)]);

        Spell::HornOfTheForsaken.apply_effect(&mut state, PlayerId::AI, tile(6, 3)).unwrap();
        let artifact = state.player(PlayerId::AI).artifact.unwrap();
        assert!(artifact.equipped);
        assert_eq!(artifact.robustness, 3);
    }

    #[test]
    fn test_highlight_replaces_previous_highlights() {
        let mut state = empty_match();
        state.highlight(tile(0, 0), HighlightMode::Plain);
        place(&mut state, PlayerId::AI, 3, tile(5, 1));

        let count = Spell::TrueStrike.highlight_valid_targets(&mut state, PlayerId::HUMAN);

        assert_eq!(count, 1);
        assert!(state.selection().plain.is_empty());
        assert!(state.selection().danger.contains(&tile(5, 1)));
    }
}
