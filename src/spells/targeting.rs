//! Spell target rules.
//!
//! Each spell names one `TargetRule`; the rule turns the board into the set of
//! tiles the spell may be cast on.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::{Coord, GameState, HighlightMode, PlayerId};

/// Height of the empty column Wraithling Swarm needs.
pub const SWARM_LENGTH: i32 = 3;

/// Which tiles a spell may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRule {
    /// Tiles holding an enemy unit that is not an avatar.
    EnemyMinion,
    /// Tiles holding a damaged friendly unit that is not an avatar.
    DamagedFriendlyMinion,
    /// The caster's avatar tile.
    OwnAvatar,
    /// Tiles that start a run of `SWARM_LENGTH` empty tiles going down.
    EmptyColumn,
}

impl TargetRule {
    /// How matching tiles are highlighted.
    #[must_use]
    pub fn highlight_mode(self) -> HighlightMode {
        match self {
            TargetRule::EnemyMinion => HighlightMode::Danger,
            _ => HighlightMode::Plain,
        }
    }

    /// Tiles that satisfy the rule for `caster`, in board order.
    #[must_use]
    pub fn matching_tiles(self, state: &GameState, caster: PlayerId) -> BTreeSet<Coord> {
        match self {
            TargetRule::EnemyMinion => state
                .board
                .occupied()
                .filter(|&(_, id)| state.unit(id).is_some_and(|u| u.owner != caster && !u.is_avatar))
                .map(|(c, _)| c)
                .collect(),
            TargetRule::DamagedFriendlyMinion => state
                .board
                .occupied()
                .filter(|&(_, id)| {
                    state
                        .unit(id)
                        .is_some_and(|u| u.owner == caster && !u.is_avatar && u.is_damaged())
                })
                .map(|(c, _)| c)
                .collect(),
            TargetRule::OwnAvatar => state
                .location_of(state.player(caster).avatar)
                .into_iter()
                .collect(),
            TargetRule::EmptyColumn => Coord::all().filter(|&c| column_is_empty(state, c)).collect(),
        }
    }
}

/// The `SWARM_LENGTH` tiles from `top` downwards, if all are on the board.
#[must_use]
pub fn column_from(top: Coord) -> Option<Vec<Coord>> {
    (0..SWARM_LENGTH).map(|dy| top.offset(0, dy)).collect()
}

fn column_is_empty(state: &GameState, top: Coord) -> bool {
    column_from(top).is_some_and(|column| column.iter().all(|&c| state.board.is_empty_at(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_from_respects_bottom_edge() {
        assert_eq!(column_from(Coord::new(0, 2).unwrap()).map(|c| c.len()), Some(3));
        assert!(column_from(Coord::new(0, 3).unwrap()).is_none());
        assert!(column_from(Coord::new(8, 4).unwrap()).is_none());
    }

    #[test]
    fn test_highlight_modes() {
        assert_eq!(TargetRule::EnemyMinion.highlight_mode(), HighlightMode::Danger);
        assert_eq!(TargetRule::EmptyColumn.highlight_mode(), HighlightMode::Plain);
    }
}
