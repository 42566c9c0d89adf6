//! Match state.
//!
//! `GameState` is the single mutable context of one match:
//! - Board occupancy and the unit table
//! - Both players (fixed seats; `current` toggles between them)
//! - Turn counter, card/tile selection and highlighted tiles
//! - Seeded RNG, outbound event queue and action history
//!
//! The rule operations (`end_turn`, `summon_creature`, `attack`, the click
//! handlers, ...) are implemented on `GameState` in the `rules` module. This
//! file holds construction, accessors and the low-level helpers they share.

use std::collections::BTreeSet;
use std::sync::Arc;

use im::Vector;
use log::{info, warn};
use rustc_hash::FxHashMap;

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::entity::UnitId;
use super::error::GameError;
use super::event::{Animation, GameEvent, HighlightMode};
use super::player::{Player, PlayerId, PlayerKind, PlayerMap};
use super::position::{Coord, Position};
use super::rng::GameRng;
use crate::abilities::AbilityKind;
use crate::board::Board;
use crate::cards::{CardCatalog, CardId};
use crate::rules::{GameResult, VictoryReason};
use crate::units::Unit;

/// What the current player has selected and which tiles are lit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// 1-based hand slot of the selected card.
    pub card_slot: Option<usize>,
    /// Tile of the unit selected to move or attack.
    pub source: Option<Coord>,
    /// Tiles highlighted as destinations.
    pub plain: BTreeSet<Coord>,
    /// Tiles highlighted as attack or hostile targets.
    pub danger: BTreeSet<Coord>,
}

impl Selection {
    /// Highlight mode of a tile, if it is highlighted.
    #[must_use]
    pub fn mode_of(&self, coord: Coord) -> Option<HighlightMode> {
        if self.plain.contains(&coord) {
            Some(HighlightMode::Plain)
        } else if self.danger.contains(&coord) {
            Some(HighlightMode::Danger)
        } else {
            None
        }
    }

    /// Every highlighted tile, plain first, each set in board order.
    #[must_use]
    pub fn highlighted(&self) -> Vec<Coord> {
        self.plain.iter().chain(self.danger.iter()).copied().collect()
    }

    #[must_use]
    pub fn has_highlights(&self) -> bool {
        !self.plain.is_empty() || !self.danger.is_empty()
    }
}

/// Complete state of one match.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    catalog: Arc<CardCatalog>,

    /// Tile grid and occupancy.
    pub board: Board,

    /// Units currently on the board.
    units: FxHashMap<UnitId, Unit>,

    players: PlayerMap<Player>,

    /// Starts at 1 and increments on every end-turn.
    turn_number: u32,

    /// Seat whose turn it is.
    current: PlayerId,

    selection: Selection,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Next unit ID to allocate.
    next_unit_id: UnitId,

    result: Option<GameResult>,

    events: Vec<GameEvent>,

    history: Vector<ActionRecord>,

    trigger_depth: u32,
}

impl GameState {
    /// Create a match: place both avatars, load the decks, draw opening hands
    /// and give the human seat its first-turn mana.
    ///
    /// Fails if a deck names a card the catalog does not know.
    pub fn new(
        config: GameConfig,
        catalog: Arc<CardCatalog>,
        human_deck: Vec<CardId>,
        ai_deck: Vec<CardId>,
    ) -> Result<Self, GameError> {
        for &id in human_deck.iter().chain(ai_deck.iter()) {
            catalog.lookup(id)?;
        }

        let human_tile = config.human_avatar_tile;
        let ai_tile = human_tile.mirrored();

        let mut next_unit_id = UnitId::FIRST;
        let human_avatar = next_unit_id.bump();
        let ai_avatar = next_unit_id.bump();

        let health = config.starting_health;
        let players = PlayerMap::new(|seat| match seat {
            PlayerId::HUMAN => Player::new(seat, PlayerKind::Human, health, human_avatar, human_deck.clone()),
            _ => Player::new(seat, PlayerKind::Ai, health, ai_avatar, ai_deck.clone()),
        });

        let mut state = Self {
            rng: GameRng::new(config.seed),
            config,
            catalog,
            board: Board::new(),
            units: FxHashMap::default(),
            players,
            turn_number: 1,
            current: PlayerId::HUMAN,
            selection: Selection::default(),
            next_unit_id,
            result: None,
            events: Vec::new(),
            history: Vector::new(),
            trigger_depth: 0,
        };

        if state.config.shuffle_decks {
            for seat in PlayerId::both() {
                state.rng.shuffle_deck(&mut state.players[seat].deck);
            }
        }

        for (seat, tile) in [(PlayerId::HUMAN, human_tile), (PlayerId::AI, ai_tile)] {
            let id = state.players[seat].avatar;
            let avatar = Unit::avatar(id, seat, state.config.avatar_attack, health);
            state.insert_unit(avatar, tile)?;
            state.emit(GameEvent::PlayerHealth { player: seat, health });
        }

        for seat in PlayerId::both() {
            for _ in 0..state.config.opening_hand_size {
                state.draw_card(seat);
            }
        }

        let mana = state.config.mana_for_turn(state.turn_number);
        state.set_mana(PlayerId::HUMAN, mana);

        info!(
            "match created: seed={} avatars at {} and {}",
            state.config.seed, human_tile, ai_tile
        );
        Ok(state)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Seat waiting for its turn.
    #[must_use]
    pub fn opponent_player(&self) -> PlayerId {
        self.current.opponent()
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    pub(crate) fn player_mut(&mut self, seat: PlayerId) -> &mut Player {
        &mut self.players[seat]
    }

    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Result<&mut Unit, GameError> {
        self.units.get_mut(&id).ok_or(GameError::UnknownUnit(id))
    }

    /// Unit standing on a tile.
    #[must_use]
    pub fn unit_at(&self, coord: Coord) -> Option<&Unit> {
        self.board.unit_on(coord).and_then(|id| self.units.get(&id))
    }

    /// Tile a unit stands on.
    #[must_use]
    pub fn location_of(&self, id: UnitId) -> Option<Coord> {
        self.board.location_of(id)
    }

    /// A seat's avatar, while it is on the board.
    #[must_use]
    pub fn avatar_of(&self, seat: PlayerId) -> Option<&Unit> {
        self.unit(self.players[seat].avatar)
    }

    /// Living units whose ability belongs to `kind`, in board order.
    #[must_use]
    pub fn units_with_ability(&self, kind: AbilityKind) -> Vec<UnitId> {
        self.board
            .occupied()
            .filter_map(|(_, id)| self.units.get(&id))
            .filter(|u| u.is_alive() && u.ability_kind() == Some(kind))
            .map(|u| u.id)
            .collect()
    }

    /// Units a seat controls, in board order.
    #[must_use]
    pub fn units_owned_by(&self, seat: PlayerId) -> Vec<UnitId> {
        self.board
            .occupied()
            .filter_map(|(_, id)| self.units.get(&id))
            .filter(|u| u.owner == seat)
            .map(|u| u.id)
            .collect()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.as_ref().map(|r| r.winner)
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Events not yet drained.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every pending event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Helpers shared by the rules ===

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord {
            player,
            action,
            turn: self.turn_number,
            sequence,
        });
    }

    pub(crate) fn advance_turn(&mut self) {
        self.current = self.current.opponent();
        self.turn_number += 1;
    }

    /// Hand out the next unit ID.
    pub(crate) fn alloc_unit_id(&mut self) -> Result<UnitId, GameError> {
        let id = self.next_unit_id.bump();
        if self.units.contains_key(&id) {
            return Err(GameError::UnitIdCollision(id));
        }
        Ok(id)
    }

    /// Add a new unit to the table and the board.
    ///
    /// Returns `Ok(false)` without changing anything if the tile is occupied.
    pub(crate) fn insert_unit(&mut self, unit: Unit, coord: Coord) -> Result<bool, GameError> {
        if self.units.contains_key(&unit.id) {
            return Err(GameError::UnitIdCollision(unit.id));
        }
        if !self.board.place_unit(unit.id, coord, false) {
            return Ok(false);
        }

        self.emit(GameEvent::UnitPlaced {
            unit: unit.id,
            name: unit.name.clone(),
            owner: unit.owner,
            position: Position::from(coord),
        });
        self.emit(GameEvent::UnitStats {
            unit: unit.id,
            health: unit.health,
            attack: unit.attack,
        });
        self.units.insert(unit.id, unit);
        Ok(true)
    }

    /// Drop a unit from the table once it has left the board.
    pub(crate) fn forget_unit(&mut self, id: UnitId) -> Option<Unit> {
        self.units.remove(&id)
    }

    pub(crate) fn units_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.values_mut()
    }

    /// Play an animation on the tile a unit stands on.
    pub(crate) fn animate_unit(&mut self, id: UnitId, animation: Animation) {
        if let Some(coord) = self.board.location_of(id) {
            self.emit(GameEvent::Animation {
                position: Position::from(coord),
                animation,
            });
        }
    }

    pub(crate) fn push_unit_stats(&mut self, id: UnitId) {
        if let Some(unit) = self.units.get(&id) {
            let event = GameEvent::UnitStats {
                unit: id,
                health: unit.health,
                attack: unit.attack,
            };
            self.emit(event);
        }
    }

    pub(crate) fn set_mana(&mut self, seat: PlayerId, mana: u32) {
        let max = self.config.max_mana;
        self.players[seat].set_mana(mana, max);
        let mana = self.players[seat].mana;
        self.emit(GameEvent::PlayerMana { player: seat, mana });
    }

    /// Set a seat's health (capped) and end the match if it hit zero.
    pub(crate) fn set_player_health(&mut self, seat: PlayerId, health: i32) {
        let max = self.config.max_health;
        self.players[seat].set_health(health, max);
        let health = self.players[seat].health;
        self.emit(GameEvent::PlayerHealth { player: seat, health });
        if health <= 0 {
            self.declare_winner(seat.opponent(), VictoryReason::HealthDepleted);
        }
    }

    /// Record the winner. Only the first call has any effect.
    pub(crate) fn declare_winner(&mut self, winner: PlayerId, reason: VictoryReason) {
        if self.result.is_some() {
            return;
        }
        info!("{} wins ({:?}) on turn {}", winner, reason, self.turn_number);
        self.result = Some(GameResult { winner, reason });
        self.emit(GameEvent::GameOver { winner });
    }

    // === Selection and highlights ===

    pub(crate) fn highlight(&mut self, coord: Coord, mode: HighlightMode) {
        let inserted = match mode {
            HighlightMode::Plain => self.selection.plain.insert(coord),
            HighlightMode::Danger => self.selection.danger.insert(coord),
        };
        if inserted {
            self.emit(GameEvent::TileHighlighted {
                position: Position::from(coord),
                mode,
            });
        }
    }

    /// Un-highlight every lit tile.
    pub fn clear_highlights(&mut self) {
        let lit = self.selection.highlighted();
        self.selection.plain.clear();
        self.selection.danger.clear();
        for coord in lit {
            self.emit(GameEvent::TileCleared {
                position: Position::from(coord),
            });
        }
    }

    /// Drop the selected card/unit and clear highlights.
    pub fn clear_selection(&mut self) {
        self.clear_highlights();
        self.selection.card_slot = None;
        self.selection.source = None;
    }

    pub(crate) fn select_card(&mut self, slot: usize) {
        self.clear_selection();
        self.selection.card_slot = Some(slot);
    }

    pub(crate) fn select_source(&mut self, coord: Coord) {
        self.clear_selection();
        self.selection.source = Some(coord);
    }

    // === Trigger chains ===

    /// Run a triggered effect one level deeper in the trigger chain.
    ///
    /// Chains deeper than `max_trigger_depth` are dropped.
    pub(crate) fn run_trigger<F>(&mut self, label: &str, effect: F) -> Result<(), GameError>
    where
        F: FnOnce(&mut Self) -> Result<(), GameError>,
    {
        if self.trigger_depth >= self.config.max_trigger_depth {
            warn!("trigger chain too deep, dropping {label}");
            return Ok(());
        }
        self.trigger_depth += 1;
        let result = effect(self);
        self.trigger_depth -= 1;
        result
    }
}
