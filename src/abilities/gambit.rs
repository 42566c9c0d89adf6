//! Opening Gambit: fires when the unit is summoned.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Animation, GameError, GameState, UnitId};

/// Per-card Opening Gambit branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GambitEffect {
    /// Summon a Wraithling on the tile behind the caster.
    GloomChaser,
    /// Destroy the first adjacent damaged enemy that is not an avatar.
    NightsorrowAssassin,
    /// +1/+1 to the allies directly ahead of and behind the owner's avatar.
    SilverguardSquire,
}

impl GameState {
    pub(crate) fn resolve_gambit(&mut self, effect: GambitEffect, source: UnitId) -> Result<(), GameError> {
        let (Some(owner), Some(here)) = (self.unit(source).map(|u| u.owner), self.location_of(source)) else {
            return Ok(());
        };
        debug!("opening gambit {:?} from {} at {}", effect, source, here);

        match effect {
            GambitEffect::GloomChaser => {
                if let Some(behind) = self.board.tile_behind(here, owner.is_human_side()) {
                    self.summon_wraithling(owner, behind)?;
                }
                Ok(())
            }
            GambitEffect::NightsorrowAssassin => {
                let victim = self
                    .board
                    .adjacent(here)
                    .into_iter()
                    .filter_map(|c| self.unit_at(c))
                    .find(|u| u.owner != owner && !u.is_avatar && u.is_damaged())
                    .map(|u| u.id);
                if let Some(victim) = victim {
                    self.animate_unit(source, Animation::Attack);
                    self.destroy_unit(victim)?;
                }
                Ok(())
            }
            GambitEffect::SilverguardSquire => {
                let Some(avatar_tile) = self.location_of(self.player(owner).avatar) else {
                    return Ok(());
                };
                let side = owner.is_human_side();
                let flanks = [
                    self.board.tile_ahead(avatar_tile, side),
                    self.board.tile_behind(avatar_tile, side),
                ];
                let allies: Vec<UnitId> = flanks
                    .into_iter()
                    .flatten()
                    .filter_map(|c| self.unit_at(c))
                    .filter(|u| u.owner == owner && !u.is_avatar)
                    .map(|u| u.id)
                    .collect();
                for ally in allies {
                    self.buff_unit(ally, 1, 1)?;
                }
                Ok(())
            }
        }
    }
}
