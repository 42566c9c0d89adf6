//! Summoning: card creatures, ability tokens and card play.

use std::collections::BTreeSet;

use log::{debug, info};

use crate::abilities::{Ability, AbilityKind};
use crate::cards::CardId;
use crate::core::{
    ActionStatus, Animation, Coord, GameError, GameEvent, GameState, PlayerId, Rejection, UnitId,
};
use crate::units::Unit;

/// Name of the 1/1 token summoned by abilities and spells.
pub const WRAITHLING: &str = "Wraithling";

impl GameState {
    /// Empty tiles next to any unit `owner` controls.
    #[must_use]
    pub fn summon_targets(&self, owner: PlayerId) -> BTreeSet<Coord> {
        self.units_owned_by(owner)
            .into_iter()
            .filter_map(|id| self.location_of(id))
            .flat_map(|c| self.board.adjacent_empty(c))
            .collect()
    }

    /// Create a unit for `owner` on an empty tile.
    ///
    /// Returns `Ok(None)` if the tile is occupied.
    pub(crate) fn spawn_unit(
        &mut self,
        owner: PlayerId,
        name: &str,
        attack: i32,
        health: i32,
        coord: Coord,
    ) -> Result<Option<UnitId>, GameError> {
        if !self.board.is_empty_at(coord) {
            return Ok(None);
        }
        let id = self.alloc_unit_id()?;
        let unit = Unit::new(id, name, owner, attack, health);
        if !self.insert_unit(unit, coord)? {
            return Ok(None);
        }
        self.animate_unit(id, Animation::Summon);
        Ok(Some(id))
    }

    /// Summon a 1/1 Wraithling for `owner` on `coord`, if it is empty.
    pub(crate) fn summon_wraithling(&mut self, owner: PlayerId, coord: Coord) -> Result<Option<UnitId>, GameError> {
        self.spawn_unit(owner, WRAITHLING, 1, 1, coord)
    }

    /// Summon a Wraithling on a random empty tile around `center`.
    pub(crate) fn summon_wraithling_near(
        &mut self,
        owner: PlayerId,
        center: Coord,
    ) -> Result<Option<UnitId>, GameError> {
        let free = self.board.adjacent_empty(center);
        match self.rng.pick(&free) {
            Some(coord) => self.summon_wraithling(owner, coord),
            None => Ok(None),
        }
    }

    /// Summon the creature printed on `card` for the current seat.
    ///
    /// Order of resolution:
    /// 1. validate the card and the tile (occupied tile is rejected)
    /// 2. re-fire the Opening Gambits already on the board, if enabled
    /// 3. create the unit, bind its ability and place it; a tile filled by
    ///    step 2 rejects the summon
    /// 4. apply the printed stats
    /// 5. run the new unit's own on-summon hook
    pub fn summon_creature(&mut self, card: CardId, target: Coord) -> Result<ActionStatus, GameError> {
        let definition = self.catalog().lookup(card)?;
        let template = definition.unit.clone().ok_or(GameError::NotACreature(card))?;
        let name = definition.name.clone();
        let stats = definition.stats.clone();
        let ability = self.catalog().ability_for(&name);

        if !self.board.is_empty_at(target) {
            return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
        }

        if self.config().retrigger_gambits_on_summon {
            for gambit in self.units_with_ability(AbilityKind::OpeningGambit) {
                if let Some(Ability::OpeningGambit(effect)) = self.unit(gambit).and_then(|u| u.ability) {
                    self.run_trigger("opening gambit", |state| state.resolve_gambit(effect, gambit))?;
                }
            }
            if !self.board.is_empty_at(target) {
                debug!("{} filled by an opening gambit, summon of {} refused", target, name);
                return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
            }
        }

        let owner = self.current_player();
        let id = self.alloc_unit_id()?;
        let mut unit = Unit::new(id, name.clone(), owner, template.attack, template.health);
        unit.card = Some(card);
        unit.ability = ability;
        if !self.insert_unit(unit, target)? {
            return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
        }
        self.animate_unit(id, Animation::Summon);

        self.unit_mut(id)?.set_stats(stats.attack, stats.health);
        self.push_unit_stats(id);
        info!("{} summons {} ({}) at {}", owner, name, id, target);

        self.trigger_on_summon(id)?;
        Ok(ActionStatus::Applied)
    }

    /// Pay for and resolve the card in a hand slot on `target`.
    ///
    /// Every check happens before mana is spent or the card leaves the hand.
    pub fn play_card(&mut self, slot: usize, target: Coord) -> Result<ActionStatus, GameError> {
        if self.is_game_over() {
            return Ok(ActionStatus::Rejected(Rejection::GameOver));
        }
        let caster = self.current_player();
        let Some(card) = self.player(caster).card_in_slot(slot) else {
            return Ok(ActionStatus::Rejected(Rejection::EmptyHandSlot));
        };
        let definition = self.catalog().lookup(card)?;
        let cost = definition.mana_cost;
        let spell = self.catalog().spell_for(&definition.name);
        let is_creature = definition.is_creature();

        if self.player(caster).mana < cost {
            return Ok(ActionStatus::Rejected(Rejection::InsufficientMana));
        }
        let legal = match (is_creature, spell) {
            (true, _) => self.summon_targets(caster).contains(&target),
            (false, Some(spell)) => spell.valid_targets(self, caster).contains(&target),
            (false, None) => false,
        };
        if !legal {
            return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
        }

        // Direct plays skip the card click, so run the highlight phase here.
        if let (false, Some(spell)) = (is_creature, spell) {
            if self.selection().mode_of(target).is_none() {
                spell.highlight_valid_targets(self, caster);
            }
        }

        let remaining = self.player(caster).mana - cost;
        self.set_mana(caster, remaining);
        self.player_mut(caster).take_from_slot(slot);
        self.emit(GameEvent::HandCardRemoved { player: caster, slot });

        let status = match spell {
            Some(spell) if !is_creature => spell.apply_effect(self, caster, target)?,
            _ => self.summon_creature(card, target)?,
        };
        self.clear_selection();
        Ok(status)
    }
}
