//! Keyword abilities (Provoke, Rush, Zeal) and avatar on-hit listeners.
//!
//! Flying has no hook here; `GameState::legal_moves` checks for it.

use log::{debug, info};

use super::AbilityKind;
use crate::core::{Animation, Artifact, GameError, GameEvent, GameState, PlayerId, UnitId};
use crate::units::OnHitListener;

/// Attack gained by every Zeal unit when its avatar is hit.
pub const ZEAL_ATTACK_BONUS: i32 = 2;

/// Hits a freshly equipped Horn of the Forsaken absorbs before breaking.
pub const HORN_ROBUSTNESS: u32 = 3;

impl GameState {
    /// Restrict every enemy adjacent to `provoker`.
    pub(crate) fn apply_provoke(&mut self, provoker: UnitId) -> Result<(), GameError> {
        let (Some(owner), Some(here)) = (self.unit(provoker).map(|u| u.owner), self.location_of(provoker)) else {
            return Ok(());
        };

        let victims: Vec<UnitId> = self
            .board
            .adjacent(here)
            .into_iter()
            .filter_map(|c| self.unit_at(c))
            .filter(|u| u.owner != owner)
            .map(|u| u.id)
            .collect();
        for victim in victims {
            debug!("{} provoked by {}", victim, provoker);
            self.unit_mut(victim)?.provoke(provoker);
        }
        Ok(())
    }

    /// Drop a provoker from every restriction set.
    pub(crate) fn release_provoker(&mut self, provoker: UnitId) {
        for unit in self.units_mut() {
            unit.release(provoker);
        }
    }

    pub(crate) fn apply_rush(&mut self, unit: UnitId) -> Result<(), GameError> {
        self.unit_mut(unit)?.refresh();
        Ok(())
    }

    /// Listen for hits on the owner's avatar.
    pub(crate) fn register_zeal(&mut self, unit: UnitId) -> Result<(), GameError> {
        let Some(owner) = self.unit(unit).map(|u| u.owner) else {
            return Ok(());
        };
        let avatar = self.player(owner).avatar;
        if let Ok(avatar) = self.unit_mut(avatar) {
            avatar.on_hit.push(OnHitListener::Zeal { unit });
        }
        Ok(())
    }

    /// Drop every on-hit listener registered by `unit`.
    pub(crate) fn drop_listeners_of(&mut self, unit: UnitId) {
        for other in self.units_mut() {
            other
                .on_hit
                .retain(|l| !matches!(l, OnHitListener::Zeal { unit: u } if *u == unit));
        }
    }

    /// Run the on-hit listeners of an avatar that took damage and survived.
    pub(crate) fn trigger_on_hit(&mut self, avatar: UnitId) -> Result<(), GameError> {
        let Some((owner, listeners)) = self.unit(avatar).map(|u| (u.owner, u.on_hit.clone())) else {
            return Ok(());
        };

        let mut zeal_done = false;
        for listener in listeners {
            match listener {
                OnHitListener::Zeal { .. } => {
                    if zeal_done {
                        continue;
                    }
                    zeal_done = true;
                    self.run_trigger("zeal", |state| {
                        for id in state.units_with_ability(AbilityKind::Zeal) {
                            if state.unit(id).is_some_and(|u| u.owner == owner) {
                                state.buff_unit(id, ZEAL_ATTACK_BONUS, 0)?;
                            }
                        }
                        Ok(())
                    })?;
                }
                OnHitListener::HornOfTheForsaken => {
                    self.run_trigger("horn of the forsaken", |state| state.resolve_horn_hit(avatar))?;
                }
            }
        }
        Ok(())
    }

    fn resolve_horn_hit(&mut self, avatar: UnitId) -> Result<(), GameError> {
        let Some(owner) = self.unit(avatar).map(|u| u.owner) else {
            return Ok(());
        };
        let Some(mut artifact) = self.player(owner).artifact.filter(|a| a.equipped) else {
            return Ok(());
        };

        if let Some(center) = self.location_of(avatar) {
            self.summon_wraithling_near(owner, center)?;
        }

        artifact.robustness = artifact.robustness.saturating_sub(1);
        if artifact.robustness == 0 {
            artifact.equipped = false;
            if let Ok(unit) = self.unit_mut(avatar) {
                unit.on_hit.retain(|l| *l != OnHitListener::HornOfTheForsaken);
            }
            info!("{}'s Horn of the Forsaken broke", owner);
            self.emit(GameEvent::Notification {
                player: owner,
                message: "Horn of the Forsaken broke".to_string(),
            });
        }
        self.player_mut(owner).artifact = Some(artifact);
        Ok(())
    }

    /// Equip Horn of the Forsaken on a seat's avatar, resetting robustness.
    pub(crate) fn equip_horn(&mut self, owner: PlayerId) -> Result<(), GameError> {
        let avatar = self.player(owner).avatar;
        let unit = self.unit_mut(avatar)?;
        if !unit.on_hit.contains(&OnHitListener::HornOfTheForsaken) {
            unit.on_hit.push(OnHitListener::HornOfTheForsaken);
        }
        self.player_mut(owner).artifact = Some(Artifact {
            robustness: HORN_ROBUSTNESS,
            equipped: true,
        });
        self.animate_unit(avatar, Animation::Buff);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::abilities::Ability;
    use crate::cards::starter::starter_catalog;
    use crate::core::{Coord, GameConfig};
    use crate::units::Unit;

    fn empty_match() -> GameState {
        let catalog = Arc::new(starter_catalog().unwrap());
        GameState::new(GameConfig::default().with_opening_hand(0), catalog, vec![], vec![]).unwrap()
    }

    fn place(state: &mut GameState, owner: PlayerId, ability: Option<Ability>, x: i32, y: i32) -> UnitId {
        let id = state.alloc_unit_id().unwrap();
        let mut unit = Unit::new(id, "Grunt", owner, 1, 5);
        unit.ability = ability;
        state.insert_unit(unit, Coord::new(x, y).unwrap()).unwrap();
        id
    }

    #[test]
    fn test_rush_readies_unit() {
        let mut state = empty_match();
        let id = place(&mut state, PlayerId::HUMAN, Some(Ability::Rush), 4, 0);
        assert!(!state.unit(id).unwrap().can_attack());

        state.trigger_on_summon(id).unwrap();

        let unit = state.unit(id).unwrap();
        assert!(unit.can_move() && unit.can_attack());
    }

    #[test]
    fn test_provoke_released_on_death() {
        let mut state = empty_match();
        let enemy = place(&mut state, PlayerId::AI, None, 5, 0);
        let provoker = place(&mut state, PlayerId::HUMAN, Some(Ability::Provoke), 4, 0);
        state.trigger_on_summon(provoker).unwrap();
        assert!(state.unit(enemy).unwrap().is_provoked());

        state.destroy_unit(provoker).unwrap();

        assert!(!state.unit(enemy).unwrap().is_provoked());
    }

    #[test]
    fn test_zeal_fires_once_per_hit() {
        let mut state = empty_match();
        let first = place(&mut state, PlayerId::HUMAN, Some(Ability::Zeal), 0, 0);
        let second = place(&mut state, PlayerId::HUMAN, Some(Ability::Zeal), 0, 1);
        state.trigger_on_summon(first).unwrap();
        state.trigger_on_summon(second).unwrap();
        let avatar = state.player(PlayerId::HUMAN).avatar;

        state.damage_unit(avatar, 1).unwrap();

        assert_eq!(state.unit(first).unwrap().attack, 3);
        assert_eq!(state.unit(second).unwrap().attack, 3);
    }

    #[test]
    fn test_zeal_listener_dropped_on_death() {
        let mut state = empty_match();
        let zealot = place(&mut state, PlayerId::HUMAN, Some(Ability::Zeal), 0, 0);
        state.trigger_on_summon(zealot).unwrap();
        let avatar = state.player(PlayerId::HUMAN).avatar;
        assert_eq!(state.unit(avatar).unwrap().on_hit.len(), 1);

        state.destroy_unit(zealot).unwrap();

        assert!(state.unit(avatar).unwrap().on_hit.is_empty());
    }

    #[test]
    fn test_horn_breaks_after_robustness() {
        let mut state = empty_match();
        state.equip_horn(PlayerId::HUMAN).unwrap();
        let avatar = state.player(PlayerId::HUMAN).avatar;
        let units_before = state.board.unit_count();

        for _ in 0..4 {
            state.damage_unit(avatar, 1).unwrap();
        }

        let artifact = state.player(PlayerId::HUMAN).artifact.unwrap();
        assert!(!artifact.equipped);
        assert_eq!(artifact.robustness, 0);
        assert_eq!(state.board.unit_count(), units_before + 3);
        assert!(state.unit(avatar).unwrap().on_hit.is_empty());
    }
}
