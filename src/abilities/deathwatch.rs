//! Deathwatch: fires every time the unit takes damage and survives.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Animation, GameError, GameState, UnitId};

/// Per-card Deathwatch branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathwatchEffect {
    /// +1 attack.
    BadOmen,
    /// +1/+1.
    ShadowWatcher,
    /// Summon a Wraithling on a random empty adjacent tile.
    BloodmoonPriestess,
    /// 1 damage to the enemy avatar, heal own avatar 1.
    Shadowdancer,
}

impl GameState {
    pub(crate) fn resolve_deathwatch(&mut self, effect: DeathwatchEffect, source: UnitId) -> Result<(), GameError> {
        let Some(owner) = self.unit(source).map(|u| u.owner) else {
            return Ok(());
        };
        debug!("deathwatch {:?} on {}", effect, source);

        match effect {
            DeathwatchEffect::BadOmen => self.buff_unit(source, 1, 0),
            DeathwatchEffect::ShadowWatcher => self.buff_unit(source, 1, 1),
            DeathwatchEffect::BloodmoonPriestess => {
                let Some(center) = self.location_of(source) else {
                    return Ok(());
                };
                self.summon_wraithling_near(owner, center).map(|_| ())
            }
            DeathwatchEffect::Shadowdancer => {
                let enemy_avatar = self.player(owner.opponent()).avatar;
                let own_avatar = self.player(owner).avatar;
                self.animate_unit(source, Animation::Attack);
                if self.unit(enemy_avatar).is_some() {
                    self.damage_unit(enemy_avatar, 1)?;
                }
                if self.unit(own_avatar).is_some() {
                    self.heal_unit(own_avatar, 1)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::abilities::Ability;
    use crate::cards::starter::starter_catalog;
    use crate::core::{Coord, GameConfig, PlayerId};
    use crate::units::Unit;

    fn empty_match() -> GameState {
        let catalog = Arc::new(starter_catalog().unwrap());
        GameState::new(GameConfig::default().with_opening_hand(0), catalog, vec![], vec![]).unwrap()
    }

    fn place(state: &mut GameState, owner: PlayerId, effect: DeathwatchEffect, x: i32, y: i32) -> UnitId {
        let id = state.alloc_unit_id().unwrap();
        let mut unit = Unit::new(id, "Watcher", owner, 2, 5);
        unit.ability = Some(Ability::Deathwatch(effect));
        state.insert_unit(unit, Coord::new(x, y).unwrap()).unwrap();
        id
    }

    #[test]
    fn test_bad_omen_gains_attack() {
        let mut state = empty_match();
        let id = place(&mut state, PlayerId::HUMAN, DeathwatchEffect::BadOmen, 4, 0);

        state.damage_unit(id, 1).unwrap();

        let unit = state.unit(id).unwrap();
        assert_eq!((unit.attack, unit.health), (3, 4));
    }

    #[test]
    fn test_shadow_watcher_gains_both() {
        let mut state = empty_match();
        let id = place(&mut state, PlayerId::HUMAN, DeathwatchEffect::ShadowWatcher, 4, 0);

        state.damage_unit(id, 2).unwrap();

        let unit = state.unit(id).unwrap();
        assert_eq!((unit.attack, unit.health, unit.max_health), (3, 4, 6));
    }

    #[test]
    fn test_no_trigger_on_death() {
        let mut state = empty_match();
        let id = place(&mut state, PlayerId::HUMAN, DeathwatchEffect::BloodmoonPriestess, 4, 0);
        let before = state.board.unit_count();

        state.damage_unit(id, 10).unwrap();

        assert!(state.unit(id).is_none());
        assert_eq!(state.board.unit_count(), before - 1);
    }

    #[test]
    fn test_bloodmoon_spawns_adjacent_wraithling() {
        let mut state = empty_match();
        let id = place(&mut state, PlayerId::HUMAN, DeathwatchEffect::BloodmoonPriestess, 4, 0);
        let center = state.location_of(id).unwrap();

        state.damage_unit(id, 1).unwrap();

        let spawned: Vec<_> = state
            .board
            .adjacent(center)
            .into_iter()
            .filter_map(|c| state.unit_at(c))
            .filter(|u| u.name == "Wraithling")
            .collect();
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].owner, PlayerId::HUMAN);
    }

    #[test]
    fn test_shadowdancer_swings_avatar_health() {
        let mut state = empty_match();
        let own_avatar = state.player(PlayerId::HUMAN).avatar;
        state.damage_unit(own_avatar, 3).unwrap();
        let id = place(&mut state, PlayerId::HUMAN, DeathwatchEffect::Shadowdancer, 4, 0);

        state.damage_unit(id, 1).unwrap();

        assert_eq!(state.player(PlayerId::HUMAN).health, 18);
        assert_eq!(state.player(PlayerId::AI).health, 19);
    }
}
