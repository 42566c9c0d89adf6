//! Card catalog.
//!
//! The `CardCatalog` stores every card definition a match can reference plus
//! the two name-keyed tables that give cards their behaviour:
//! - card name → `Ability` for creatures
//! - card name → `Spell` for spells
//!
//! A catalog is built once (usually at process start), wrapped in an `Arc`
//! and handed to each `GameState`.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::abilities::{Ability, DeathwatchEffect, GambitEffect};
use crate::core::GameError;
use crate::spells::Spell;

/// Registry of card definitions and behaviour tables.
///
/// ## Example
///
/// ```
/// use grid_duel::abilities::Ability;
/// use grid_duel::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::standard();
/// catalog
///     .register(CardDefinition::creature(CardId::new(1), "Rock Pulveriser", 2, 1, 4))
///     .unwrap();
///
/// let card = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(catalog.ability_for(&card.name), Some(Ability::Provoke));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    abilities: FxHashMap<String, Ability>,
    spells: FxHashMap<String, Spell>,
}

impl CardCatalog {
    /// Create an empty catalog with no behaviour tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the stock ability and spell tables installed.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register_ability("Bad Omen", Ability::Deathwatch(DeathwatchEffect::BadOmen));
        catalog.register_ability("Shadow Watcher", Ability::Deathwatch(DeathwatchEffect::ShadowWatcher));
        catalog.register_ability(
            "Bloodmoon Priestess",
            Ability::Deathwatch(DeathwatchEffect::BloodmoonPriestess),
        );
        catalog.register_ability("Shadowdancer", Ability::Deathwatch(DeathwatchEffect::Shadowdancer));

        catalog.register_ability("Gloom Chaser", Ability::OpeningGambit(GambitEffect::GloomChaser));
        catalog.register_ability(
            "Nightsorrow Assassin",
            Ability::OpeningGambit(GambitEffect::NightsorrowAssassin),
        );
        catalog.register_ability(
            "Silverguard Squire",
            Ability::OpeningGambit(GambitEffect::SilverguardSquire),
        );

        catalog.register_ability("Rock Pulveriser", Ability::Provoke);
        catalog.register_ability("Swamp Entangler", Ability::Provoke);
        catalog.register_ability("Ironcliffe Guardian", Ability::Provoke);
        catalog.register_ability("Young Flamewing", Ability::Flying);
        catalog.register_ability("Saberspine Tiger", Ability::Rush);
        catalog.register_ability("Silverguard Knight", Ability::Zeal);

        catalog.register_spell("Dark Terminus", Spell::DarkTerminus);
        catalog.register_spell("Horn of the Forsaken", Spell::HornOfTheForsaken);
        catalog.register_spell("Truestrike", Spell::TrueStrike);
        catalog.register_spell("Sundrop Elixir", Spell::SundropElixir);
        catalog.register_spell("Wraithling Swarm", Spell::WraithlingSwarm);

        catalog
    }

    /// Register a card definition.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), GameError> {
        if self.cards.contains_key(&card.id) {
            return Err(GameError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Register many definitions, stopping at the first duplicate.
    pub fn register_all(&mut self, cards: impl IntoIterator<Item = CardDefinition>) -> Result<(), GameError> {
        cards.into_iter().try_for_each(|card| self.register(card))
    }

    /// Bind an ability to every card with this name.
    pub fn register_ability(&mut self, name: impl Into<String>, ability: Ability) {
        self.abilities.insert(name.into(), ability);
    }

    /// Bind a spell effect to every card with this name.
    pub fn register_spell(&mut self, name: impl Into<String>, spell: Spell) {
        self.spells.insert(name.into(), spell);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition, failing for unknown IDs.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition, GameError> {
        self.get(id).ok_or(GameError::UnknownCard(id))
    }

    /// Find a card by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.values().find(|c| c.name == name)
    }

    /// Ability bound to a card name.
    #[must_use]
    pub fn ability_for(&self, name: &str) -> Option<Ability> {
        self.abilities.get(name).copied()
    }

    /// Spell effect bound to a card name.
    #[must_use]
    pub fn spell_for(&self, name: &str) -> Option<Spell> {
        self.spells.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}
