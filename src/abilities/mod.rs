//! Unit abilities.
//!
//! Abilities are dispatched in two levels:
//! 1. `Ability` picks the class (Deathwatch, Opening Gambit, Provoke, ...).
//! 2. Classes with per-card behaviour carry a branch enum
//!    (`DeathwatchEffect`, `GambitEffect`) chosen when the catalog resolves
//!    the card name, so trigger time is a plain `match`.
//!
//! ## Trigger points
//!
//! - On summon: `GameState::trigger_on_summon`
//! - On surviving damage: `GameState::trigger_on_damaged`
//! - On avatar hit: `GameState::trigger_on_hit` (on-hit listeners)

pub mod deathwatch;
pub mod gambit;
pub mod keywords;

use log::debug;
use serde::{Deserialize, Serialize};

pub use deathwatch::DeathwatchEffect;
pub use gambit::GambitEffect;

use crate::core::{GameError, GameState, UnitId};

/// Ability class, without the per-card branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    Deathwatch,
    OpeningGambit,
    Provoke,
    Flying,
    Rush,
    Zeal,
}

/// An ability attached to a unit.
///
/// ```
/// use grid_duel::abilities::{Ability, AbilityKind, GambitEffect};
///
/// let ability = Ability::OpeningGambit(GambitEffect::GloomChaser);
/// assert_eq!(ability.kind(), AbilityKind::OpeningGambit);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Fires each time the unit takes damage and survives.
    Deathwatch(DeathwatchEffect),
    /// Fires once when the unit is summoned.
    OpeningGambit(GambitEffect),
    /// Adjacent enemies can't move and may only attack provokers.
    Provoke,
    /// The unit may move to any empty tile.
    Flying,
    /// The unit may act on the turn it is summoned.
    Rush,
    /// +2 attack whenever the owner's avatar is hit.
    Zeal,
}

impl Ability {
    #[must_use]
    pub fn kind(self) -> AbilityKind {
        match self {
            Ability::Deathwatch(_) => AbilityKind::Deathwatch,
            Ability::OpeningGambit(_) => AbilityKind::OpeningGambit,
            Ability::Provoke => AbilityKind::Provoke,
            Ability::Flying => AbilityKind::Flying,
            Ability::Rush => AbilityKind::Rush,
            Ability::Zeal => AbilityKind::Zeal,
        }
    }
}

impl GameState {
    /// Run a freshly summoned unit's on-summon hook.
    pub(crate) fn trigger_on_summon(&mut self, unit: UnitId) -> Result<(), GameError> {
        let Some(ability) = self.unit(unit).and_then(|u| u.ability) else {
            return Ok(());
        };
        debug!("on-summon {:?} for {}", ability, unit);

        match ability {
            Ability::OpeningGambit(effect) => {
                self.run_trigger("opening gambit", |state| state.resolve_gambit(effect, unit))
            }
            Ability::Provoke => self.apply_provoke(unit),
            Ability::Rush => self.apply_rush(unit),
            Ability::Zeal => self.register_zeal(unit),
            // Flying only widens movement; Deathwatch waits for damage.
            Ability::Flying | Ability::Deathwatch(_) => Ok(()),
        }
    }

    /// Run a unit's hook after it took damage and survived.
    pub(crate) fn trigger_on_damaged(&mut self, unit: UnitId) -> Result<(), GameError> {
        let Some(Ability::Deathwatch(effect)) = self.unit(unit).and_then(|u| u.ability) else {
            return Ok(());
        };
        self.run_trigger("deathwatch", |state| state.resolve_deathwatch(effect, unit))
    }
}
