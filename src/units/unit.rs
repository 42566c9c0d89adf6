//! Units - the mutable combat entities on the board.
//!
//! A `Unit` is created when a creature is summoned (from a card or by an
//! ability) and dropped when it dies or is destroyed. Its tile is tracked by
//! `Board`, not by the unit.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::abilities::{Ability, AbilityKind};
use crate::cards::CardId;
use crate::core::{PlayerId, UnitId};

/// A hook run every time the unit it is attached to takes damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnHitListener {
    /// Registered by a Zeal unit on its avatar.
    Zeal { unit: UnitId },
    /// Registered by the Horn of the Forsaken artifact.
    HornOfTheForsaken,
}

/// A unit on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub owner: PlayerId,
    /// Card this unit was summoned from; `None` for avatars and tokens.
    pub card: Option<CardId>,

    pub health: i32,
    pub max_health: i32,
    pub attack: i32,

    pub has_moved: bool,
    pub has_attacked: bool,
    pub is_stunned: bool,
    pub is_avatar: bool,

    pub ability: Option<Ability>,
    pub on_hit: SmallVec<[OnHitListener; 2]>,

    /// When set, the unit may not move and may only attack these provokers.
    pub attack_restriction: Option<SmallVec<[UnitId; 4]>>,
}

impl Unit {
    /// Create a unit with the given stats.
    ///
    /// New units are exhausted (moved and attacked) until their owner's next
    /// turn starts.
    #[must_use]
    pub fn new(id: UnitId, name: impl Into<String>, owner: PlayerId, attack: i32, health: i32) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
            card: None,
            health,
            max_health: health,
            attack,
            has_moved: true,
            has_attacked: true,
            is_stunned: false,
            is_avatar: false,
            ability: None,
            on_hit: SmallVec::new(),
            attack_restriction: None,
        }
    }

    /// Create an avatar, ready to act.
    #[must_use]
    pub fn avatar(id: UnitId, owner: PlayerId, attack: i32, health: i32) -> Self {
        let mut unit = Self::new(id, format!("{owner} Avatar"), owner, attack, health);
        unit.is_avatar = true;
        unit.has_moved = false;
        unit.has_attacked = false;
        unit
    }

    /// Overwrite attack and health, e.g. from a card's printed stats.
    pub fn set_stats(&mut self, attack: i32, health: i32) {
        self.attack = attack;
        self.health = health;
        self.max_health = health;
    }

    /// Reduce health. Not floored at zero; callers check `is_alive`.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Damage this unit deals back when it survives an attack.
    #[must_use]
    pub fn counter_damage(&self) -> i32 {
        self.attack
    }

    /// Restore health up to `max_health`.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Permanently raise attack and health (both current and maximum).
    pub fn buff(&mut self, attack: i32, health: i32) {
        self.attack += attack;
        self.max_health += health;
        self.health += health;
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[must_use]
    pub fn is_damaged(&self) -> bool {
        self.health < self.max_health
    }

    /// Ability class of this unit, if any.
    #[must_use]
    pub fn ability_kind(&self) -> Option<AbilityKind> {
        self.ability.map(|a| a.kind())
    }

    #[must_use]
    pub fn is_provoked(&self) -> bool {
        self.attack_restriction.is_some()
    }

    #[must_use]
    pub fn can_move(&self) -> bool {
        !self.has_moved && !self.is_stunned && !self.is_provoked()
    }

    #[must_use]
    pub fn can_attack(&self) -> bool {
        !self.has_attacked && !self.is_stunned
    }

    /// Whether `target` is allowed by the provoke restriction.
    ///
    /// A provoked unit may attack any Provoke unit, not only the ones that
    /// provoked it. The restriction set only tracks when the provoke lifts.
    #[must_use]
    pub fn may_attack(&self, target: &Unit) -> bool {
        !self.is_provoked() || target.ability == Some(Ability::Provoke)
    }

    /// Add a provoker to the restriction set.
    pub fn provoke(&mut self, provoker: UnitId) {
        let allowed = self.attack_restriction.get_or_insert_with(SmallVec::new);
        if !allowed.contains(&provoker) {
            allowed.push(provoker);
        }
    }

    /// Drop a provoker; lifts the restriction when none remain.
    pub fn release(&mut self, provoker: UnitId) {
        if let Some(allowed) = self.attack_restriction.as_mut() {
            allowed.retain(|p| *p != provoker);
            if allowed.is_empty() {
                self.attack_restriction = None;
            }
        }
    }

    /// Clear the per-turn action flags.
    pub fn refresh(&mut self) {
        self.has_moved = false;
        self.has_attacked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grunt() -> Unit {
        Unit::new(UnitId(5), "Grunt", PlayerId::HUMAN, 2, 3)
    }

    #[test]
    fn test_new_unit_is_exhausted() {
        let unit = grunt();
        assert!(!unit.can_move());
        assert!(!unit.can_attack());

        let avatar = Unit::avatar(UnitId(0), PlayerId::HUMAN, 2, 20);
        assert!(avatar.is_avatar);
        assert!(avatar.can_move());
        assert_eq!(avatar.name, "Human Avatar");
    }

    #[test]
    fn test_take_damage_is_not_floored() {
        let mut unit = grunt();
        unit.take_damage(5);
        assert_eq!(unit.health, -2);
        assert!(!unit.is_alive());
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut unit = grunt();
        unit.take_damage(2);
        assert!(unit.is_damaged());
        unit.heal(4);
        assert_eq!(unit.health, 3);
        assert!(!unit.is_damaged());
    }

    #[test]
    fn test_buff_raises_max() {
        let mut unit = grunt();
        unit.buff(1, 1);
        assert_eq!((unit.attack, unit.health, unit.max_health), (3, 4, 4));
    }

    #[test]
    fn test_counter_damage_matches_attack() {
        assert_eq!(grunt().counter_damage(), 2);
    }

    #[test]
    fn test_provoke_and_release() {
        let mut unit = grunt();
        unit.refresh();

        unit.provoke(UnitId(9));
        unit.provoke(UnitId(9));
        unit.provoke(UnitId(10));
        assert!(!unit.can_move());
        assert!(unit.can_attack());
        assert_eq!(unit.attack_restriction.as_ref().map(|r| r.len()), Some(2));

        unit.release(UnitId(9));
        assert!(unit.is_provoked());
        unit.release(UnitId(10));
        assert!(!unit.is_provoked());
        assert!(unit.can_move());
    }

    #[test]
    fn test_provoked_unit_may_attack_any_provoker() {
        let mut unit = grunt();
        let mut guard = Unit::new(UnitId(20), "Guard", PlayerId::AI, 1, 4);
        guard.ability = Some(Ability::Provoke);
        let plain = Unit::new(UnitId(21), "Plain", PlayerId::AI, 1, 4);

        assert!(unit.may_attack(&plain));

        unit.provoke(UnitId(9));
        assert!(unit.may_attack(&guard));
        assert!(!unit.may_attack(&plain));

        unit.release(UnitId(9));
        assert!(unit.may_attack(&plain));
    }
}
