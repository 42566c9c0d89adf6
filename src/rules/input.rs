//! Inbound click handlers.
//!
//! The transport layer reports three events: a hand card was clicked, a tile
//! was clicked, the end-turn button was pressed. Handlers act for the seat
//! whose turn it is, reject illegal input without touching state and record
//! every applied action.
//!
//! ## Selection flow
//!
//! - Card click: select the card and highlight its legal targets.
//! - Tile click with a card selected: play it on a highlighted tile.
//! - Tile click with a unit selected: move (plain tile) or attack (danger tile).
//! - Tile click on an own unit that can act: select it and highlight its
//!   moves and attacks.

use log::debug;

use crate::core::{Action, ActionStatus, Coord, GameError, GameState, HighlightMode, Rejection};

impl GameState {
    /// A hand card (1-based slot) was clicked.
    pub fn on_card_clicked(&mut self, slot: usize) -> Result<ActionStatus, GameError> {
        if self.is_game_over() {
            return Ok(ActionStatus::Rejected(Rejection::GameOver));
        }
        let caster = self.current_player();
        let Some(card) = self.player(caster).card_in_slot(slot) else {
            return Ok(ActionStatus::Rejected(Rejection::EmptyHandSlot));
        };
        let definition = self.catalog().lookup(card)?;
        let cost = definition.mana_cost;
        let is_creature = definition.is_creature();
        let spell = self.catalog().spell_for(&definition.name);
        if self.player(caster).mana < cost {
            return Ok(ActionStatus::Rejected(Rejection::InsufficientMana));
        }

        self.select_card(slot);
        if is_creature {
            for coord in self.summon_targets(caster) {
                self.highlight(coord, HighlightMode::Plain);
            }
        } else if let Some(spell) = spell {
            spell.highlight_valid_targets(self, caster);
        }
        debug!("{} selected {} in slot {}", caster, card, slot);

        Ok(self.applied(Action::CardClicked { slot }))
    }

    /// A board tile was clicked. Off-board coordinates are rejected.
    pub fn on_tile_clicked(&mut self, x: i32, y: i32) -> Result<ActionStatus, GameError> {
        if self.is_game_over() {
            return Ok(ActionStatus::Rejected(Rejection::GameOver));
        }
        let Ok(coord) = Coord::new(x, y) else {
            return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
        };
        let action = Action::TileClicked { tile: coord };
        let selection = self.selection();
        let (mode, card_slot, source) = (selection.mode_of(coord), selection.card_slot, selection.source);

        if let Some(slot) = card_slot {
            if mode.is_none() {
                return Ok(ActionStatus::Rejected(Rejection::IllegalTarget));
            }
            return match self.play_card(slot, coord)? {
                ActionStatus::Applied => Ok(self.applied(action)),
                rejected => Ok(rejected),
            };
        }

        if let Some(source) = source {
            let status = match mode {
                Some(HighlightMode::Plain) => self.move_unit(source, coord)?,
                Some(HighlightMode::Danger) => self.attack(source, coord)?,
                None => return self.select_unit(coord),
            };
            if status.is_applied() {
                self.clear_selection();
                return Ok(self.applied(action));
            }
            return Ok(status);
        }

        self.select_unit(coord)
    }

    /// The end-turn button was pressed.
    pub fn on_end_turn(&mut self) -> Result<ActionStatus, GameError> {
        if self.is_game_over() {
            return Ok(ActionStatus::Rejected(Rejection::GameOver));
        }
        let status = self.applied(Action::EndTurn);
        self.end_turn();
        Ok(status)
    }

    fn select_unit(&mut self, coord: Coord) -> Result<ActionStatus, GameError> {
        let Some(id) = self.acting_unit(coord) else {
            let own = self.unit_at(coord).is_some_and(|u| u.owner == self.current_player());
            let reason = if own { Rejection::UnitCannotAct } else { Rejection::NothingSelected };
            return Ok(ActionStatus::Rejected(reason));
        };

        self.select_source(coord);
        for tile in self.legal_moves(id) {
            self.highlight(tile, HighlightMode::Plain);
        }
        for tile in self.legal_attacks(id) {
            self.highlight(tile, HighlightMode::Danger);
        }
        Ok(self.applied(Action::TileClicked { tile: coord }))
    }

    fn applied(&mut self, action: Action) -> ActionStatus {
        let player = self.current_player();
        self.record(player, action);
        ActionStatus::Applied
    }
}
