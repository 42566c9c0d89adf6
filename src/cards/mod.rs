//! Card system: definitions, catalog and starter decks.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data (cost, type, printed stats)
//! - `CardCatalog`: Definition lookup plus the name → ability / spell tables
//!
//! Cards are immutable templates. Hands and decks hold `CardId`s.

pub mod definition;
pub mod registry;
pub mod starter;

pub use definition::{CardDefinition, CardId, CardType, StatBlock, UnitTemplate};
pub use registry::CardCatalog;
