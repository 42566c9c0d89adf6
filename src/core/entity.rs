//! Unit identification.
//!
//! Every unit placed on the board (avatars, summoned creatures, tokens
//! spawned by abilities) has a unique `UnitId`.
//!
//! ## ID Layout
//!
//! IDs are allocated by `GameState` from a monotonic counter:
//! - `0` and `1`: the two avatars, allocated when the match is created
//! - `2..`: everything summoned afterwards
//!
//! An ID is never reused, even after the unit it named has died.
//!
//! ```
//! use grid_duel::core::UnitId;
//!
//! let mut next = UnitId::FIRST;
//! let a = next.bump();
//! let b = next.bump();
//! assert_ne!(a, b);
//! assert!(b > a);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a unit on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// The first ID handed out in a match.
    pub const FIRST: UnitId = UnitId(0);

    /// Create a unit ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Return the current value and advance this counter by one.
    ///
    /// Used as an allocator: the counter always holds the next free ID.
    pub fn bump(&mut self) -> UnitId {
        let id = *self;
        self.0 += 1;
        id
    }
}

impl From<u32> for UnitId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}
