//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its cost,
//! whether it summons a creature or casts a spell, and its printed stats.
//! A card in a hand or deck is just its `CardId`; there is no per-copy state.

use serde::{Deserialize, Serialize};

/// Identifier of a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Creature or spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Creature,
    Spell,
}

/// Default stats of the unit a creature card summons, as loaded from the
/// unit's own asset. Overwritten by the card's `StatBlock` on summon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTemplate {
    /// Asset key the renderer uses for this unit.
    pub asset: String,
    pub attack: i32,
    pub health: i32,
}

/// Printed stats shown on the card's detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub attack: i32,
    pub health: i32,
    #[serde(default)]
    pub rules_text: String,
}

/// Static card definition.
///
/// ```
/// use grid_duel::cards::{CardDefinition, CardId, CardType};
///
/// let gloom = CardDefinition::creature(CardId::new(3), "Gloom Chaser", 2, 3, 1);
/// assert_eq!(gloom.card_type, CardType::Creature);
/// assert_eq!(gloom.stats.attack, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub mana_cost: u32,
    pub card_type: CardType,
    /// Present for creatures.
    #[serde(default)]
    pub unit: Option<UnitTemplate>,
    #[serde(default)]
    pub stats: StatBlock,
}

impl CardDefinition {
    /// Create a creature card whose template defaults to its printed stats.
    #[must_use]
    pub fn creature(id: CardId, name: impl Into<String>, mana_cost: u32, attack: i32, health: i32) -> Self {
        let name = name.into();
        Self {
            id,
            unit: Some(UnitTemplate {
                asset: name.to_lowercase().replace(' ', "_"),
                attack,
                health,
            }),
            name,
            mana_cost,
            card_type: CardType::Creature,
            stats: StatBlock {
                attack,
                health,
                rules_text: String::new(),
            },
        }
    }

    /// Create a spell card.
    #[must_use]
    pub fn spell(id: CardId, name: impl Into<String>, mana_cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            mana_cost,
            card_type: CardType::Spell,
            unit: None,
            stats: StatBlock::default(),
        }
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.stats.rules_text = text.into();
        self
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.card_type == CardType::Creature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_template_defaults() {
        let card = CardDefinition::creature(CardId::new(1), "Rock Pulveriser", 2, 1, 4);
        let template = card.unit.as_ref().unwrap();
        assert_eq!(template.asset, "rock_pulveriser");
        assert_eq!((template.attack, template.health), (1, 4));
        assert!(card.is_creature());
    }

    #[test]
    fn test_spell_has_no_unit() {
        let card = CardDefinition::spell(CardId::new(2), "Truestrike", 1).with_text("Deal 2 damage");
        assert!(!card.is_creature());
        assert!(card.unit.is_none());
        assert_eq!(card.stats.rules_text, "Deal 2 damage");
    }

    #[test]
    fn test_parse_from_json() {
        let json = r#"{
            "id": 7,
            "name": "Swamp Entangler",
            "mana_cost": 1,
            "card_type": "Creature",
            "unit": { "asset": "swamp_entangler", "attack": 0, "health": 1 },
            "stats": { "attack": 0, "health": 3 }
        }"#;
        let card: CardDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, CardId::new(7));
        assert_eq!(card.stats.health, 3);
        assert_eq!(card.unit.unwrap().health, 1);
    }
}
