//! Card content and the doubled-deck builder.

pub mod deck;
pub mod definition;

pub use deck::{CardVariant, GameCard};
pub use definition::{CardDefinition, CardId, CardImage};
