//! Movement, attacks and the damage pipeline.
//!
//! All damage goes through `GameState::damage_unit`, which mirrors avatar
//! health into the owning player, removes dead units in the same step and
//! fires the on-hit and Deathwatch hooks of survivors.

use std::collections::BTreeSet;

use log::{debug, info};

use super::engine::VictoryReason;
use crate::abilities::Ability;
use crate::core::{
    ActionStatus, Animation, Coord, GameError, GameEvent, GameState, Position, Rejection, UnitId,
};

impl GameState {
    /// Tiles a unit may move to this turn.
    ///
    /// Adjacent empty tiles, or every empty tile for Flying units.
    #[must_use]
    pub fn legal_moves(&self, unit: UnitId) -> BTreeSet<Coord> {
        let (Some(u), Some(here)) = (self.unit(unit), self.location_of(unit)) else {
            return BTreeSet::new();
        };
        if !u.can_move() {
            return BTreeSet::new();
        }
        if u.ability == Some(Ability::Flying) {
            self.board.empty_tiles().collect()
        } else {
            self.board.adjacent_empty(here).into_iter().collect()
        }
    }

    /// Tiles holding enemies a unit may attack this turn.
    #[must_use]
    pub fn legal_attacks(&self, unit: UnitId) -> BTreeSet<Coord> {
        let (Some(u), Some(here)) = (self.unit(unit), self.location_of(unit)) else {
            return BTreeSet::new();
        };
        if !u.can_attack() {
            return BTreeSet::new();
        }
        self.board
            .adjacent(here)
            .into_iter()
            .filter(|&c| {
                self.unit_at(c)
                    .is_some_and(|target| target.owner != u.owner && u.may_attack(target))
            })
            .collect()
    }

    /// Move the current seat's unit on `from` to `to`.
    pub fn move_unit(&mut self, from: Coord, to: Coord) -> Result<ActionStatus, GameError> {
        let Some(id) = self.acting_unit(from) else {
            return Ok(ActionStatus::Rejected(Rejection::UnitCannotAct));
        };
        if !self.legal_moves(id).contains(&to) {
            return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
        }

        self.board.place_unit(id, to, false);
        self.unit_mut(id)?.has_moved = true;
        self.emit(GameEvent::UnitMoved {
            unit: id,
            from: Position::from(from),
            to: Position::from(to),
        });
        self.animate_unit(id, Animation::Move);
        debug!("{} moved {} -> {}", id, from, to);
        Ok(ActionStatus::Applied)
    }

    /// Attack the unit on `target` with the current seat's unit on `from`.
    ///
    /// A defender that survives and is still adjacent strikes back.
    pub fn attack(&mut self, from: Coord, target: Coord) -> Result<ActionStatus, GameError> {
        let Some(attacker) = self.acting_unit(from) else {
            return Ok(ActionStatus::Rejected(Rejection::UnitCannotAct));
        };
        if !self.legal_attacks(attacker).contains(&target) {
            return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
        }
        let Some(defender) = self.board.unit_on(target) else {
            return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
        };

        let unit = self.unit_mut(attacker)?;
        unit.has_attacked = true;
        unit.has_moved = true;
        let damage = unit.attack;
        self.animate_unit(attacker, Animation::Attack);
        debug!("{} attacks {} for {}", attacker, defender, damage);
        self.damage_unit(defender, damage)?;

        let counter = self.unit(defender).map(|d| d.counter_damage());
        let still_adjacent = match (self.location_of(attacker), self.location_of(defender)) {
            (Some(a), Some(d)) => a.is_adjacent(d),
            _ => false,
        };
        if let (Some(counter), true) = (counter, still_adjacent) {
            self.animate_unit(defender, Animation::Attack);
            self.damage_unit(attacker, counter)?;
        }
        Ok(ActionStatus::Applied)
    }

    /// Deal damage to a unit and resolve everything that follows from it.
    pub fn damage_unit(&mut self, target: UnitId, amount: i32) -> Result<(), GameError> {
        let unit = self.unit_mut(target)?;
        unit.take_damage(amount);
        let (owner, health, alive, is_avatar) = (unit.owner, unit.health, unit.is_alive(), unit.is_avatar);

        self.animate_unit(target, Animation::Hit);
        self.push_unit_stats(target);
        if is_avatar {
            self.set_player_health(owner, health);
        }

        if !alive {
            return self.destroy_unit(target);
        }
        if is_avatar {
            self.trigger_on_hit(target)?;
        }
        self.trigger_on_damaged(target)
    }

    /// Restore health, capped at the unit's maximum.
    pub fn heal_unit(&mut self, target: UnitId, amount: i32) -> Result<(), GameError> {
        let unit = self.unit_mut(target)?;
        unit.heal(amount);
        let (owner, health, is_avatar) = (unit.owner, unit.health, unit.is_avatar);

        self.animate_unit(target, Animation::Heal);
        self.push_unit_stats(target);
        if is_avatar {
            self.set_player_health(owner, health);
        }
        Ok(())
    }

    /// Permanently raise a unit's attack and health.
    pub(crate) fn buff_unit(&mut self, target: UnitId, attack: i32, health: i32) -> Result<(), GameError> {
        self.unit_mut(target)?.buff(attack, health);
        self.animate_unit(target, Animation::Buff);
        self.push_unit_stats(target);
        Ok(())
    }

    /// Take a unit off the board for good.
    ///
    /// Releases its provoke restrictions and on-hit listeners. Losing an
    /// avatar loses the match.
    pub fn destroy_unit(&mut self, target: UnitId) -> Result<(), GameError> {
        let coord = self.location_of(target).ok_or(GameError::UnknownUnit(target))?;
        self.animate_unit(target, Animation::Death);
        self.board.remove_unit(coord);
        let unit = self.forget_unit(target).ok_or(GameError::UnknownUnit(target))?;
        self.emit(GameEvent::UnitRemoved {
            unit: target,
            position: Position::from(coord),
        });
        info!("{} ({}) removed from {}", unit.name, target, coord);

        self.release_provoker(target);
        self.drop_listeners_of(target);
        if unit.is_avatar {
            self.declare_winner(unit.owner.opponent(), VictoryReason::HealthDepleted);
        }
        Ok(())
    }

    /// The current seat's unit on `coord`, if it can still act.
    pub(crate) fn acting_unit(&self, coord: Coord) -> Option<UnitId> {
        self.unit_at(coord)
            .filter(|u| u.owner == self.current_player() && (u.can_move() || u.can_attack()))
            .map(|u| u.id)
    }
}
