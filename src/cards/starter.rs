//! Starter card pool and decks.
//!
//! Two ready-made 20-card decks: a Deathwatch/Wraithling deck for the human
//! seat and a Provoke/Zeal deck for the AI seat.

use super::definition::{CardDefinition, CardId};
use super::registry::CardCatalog;
use crate::core::GameError;

/// Every card used by the starter decks.
#[must_use]
pub fn starter_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::creature(CardId::new(1), "Bad Omen", 1, 0, 1)
            .with_text("Deathwatch: gain +1 Attack."),
        CardDefinition::spell(CardId::new(2), "Horn of the Forsaken", 1)
            .with_text("Artifact. Whenever your avatar is hit, summon a Wraithling nearby."),
        CardDefinition::creature(CardId::new(3), "Gloom Chaser", 2, 3, 1)
            .with_text("Opening Gambit: summon a Wraithling behind this minion."),
        CardDefinition::creature(CardId::new(4), "Shadow Watcher", 3, 3, 2)
            .with_text("Deathwatch: gain +1/+1."),
        CardDefinition::spell(CardId::new(5), "Wraithling Swarm", 3)
            .with_text("Summon three Wraithlings in a column."),
        CardDefinition::creature(CardId::new(6), "Nightsorrow Assassin", 4, 4, 2)
            .with_text("Opening Gambit: destroy a nearby damaged enemy minion."),
        CardDefinition::creature(CardId::new(7), "Rock Pulveriser", 2, 1, 4).with_text("Provoke"),
        CardDefinition::spell(CardId::new(8), "Dark Terminus", 4)
            .with_text("Destroy an enemy minion. Summon a Wraithling in its place."),
        CardDefinition::creature(CardId::new(9), "Bloodmoon Priestess", 4, 3, 3)
            .with_text("Deathwatch: summon a Wraithling nearby."),
        CardDefinition::creature(CardId::new(10), "Shadowdancer", 5, 4, 4)
            .with_text("Deathwatch: deal 1 damage to the enemy avatar and heal yours for 1."),
        CardDefinition::creature(CardId::new(11), "Skyrock Golem", 2, 4, 2),
        CardDefinition::creature(CardId::new(12), "Swamp Entangler", 1, 0, 3).with_text("Provoke"),
        CardDefinition::creature(CardId::new(13), "Silverguard Knight", 3, 1, 5)
            .with_text("Zeal: whenever your avatar is hit, gain +2 Attack."),
        CardDefinition::creature(CardId::new(14), "Saberspine Tiger", 3, 3, 2).with_text("Rush"),
        CardDefinition::creature(CardId::new(15), "Young Flamewing", 4, 5, 4).with_text("Flying"),
        CardDefinition::creature(CardId::new(16), "Silverguard Squire", 1, 1, 1)
            .with_text("Opening Gambit: allies in front of and behind your avatar gain +1/+1."),
        CardDefinition::creature(CardId::new(17), "Ironcliffe Guardian", 5, 3, 10).with_text("Provoke"),
        CardDefinition::creature(CardId::new(18), "Planar Scout", 1, 2, 1),
        CardDefinition::spell(CardId::new(19), "Truestrike", 1).with_text("Deal 2 damage to an enemy minion."),
        CardDefinition::spell(CardId::new(20), "Sundrop Elixir", 1).with_text("Restore 4 Health to a damaged minion."),
    ]
}

/// The stock catalog with every starter card registered.
pub fn starter_catalog() -> Result<CardCatalog, GameError> {
    let mut catalog = CardCatalog::standard();
    catalog.register_all(starter_cards())?;
    Ok(catalog)
}

fn doubled(ids: &[u32]) -> Vec<CardId> {
    ids.iter()
        .chain(ids.iter())
        .map(|&id| CardId::new(id))
        .collect()
}

/// Human starter deck, in draw order.
#[must_use]
pub fn human_deck() -> Vec<CardId> {
    doubled(&[1, 3, 2, 7, 4, 5, 6, 8, 9, 10])
}

/// AI starter deck, in draw order.
#[must_use]
pub fn ai_deck() -> Vec<CardId> {
    doubled(&[16, 12, 11, 19, 14, 13, 20, 15, 17, 18])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_catalog_covers_decks() {
        let catalog = starter_catalog().unwrap();
        assert_eq!(catalog.len(), 20);
        for id in human_deck().into_iter().chain(ai_deck()) {
            assert!(catalog.contains(id), "{id} missing from catalog");
        }
    }

    #[test]
    fn test_every_spell_card_has_an_effect() {
        let catalog = starter_catalog().unwrap();
        for card in catalog.iter().filter(|c| !c.is_creature()) {
            assert!(catalog.spell_for(&card.name).is_some(), "{} has no effect", card.name);
        }
    }

    #[test]
    fn test_deck_sizes() {
        assert_eq!(human_deck().len(), 20);
        assert_eq!(ai_deck().len(), 20);
    }
}
