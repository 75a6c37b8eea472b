//! Content-source pieces: the built-in card set and ingestion validation.
//!
//! Content sources (manual entry, spreadsheet import, decoded share links)
//! run their definitions through [`validate`] before handing them to the
//! engine; the engine itself never sees invalid content and has no error
//! channel of its own.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::cards::{CardDefinition, CardId};

/// Minimum number of definitions for a playable game.
pub const MIN_CARD_COUNT: usize = 3;

/// Why a definition list was rejected at ingestion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// Fewer than [`MIN_CARD_COUNT`] definitions.
    #[error("a game needs at least {MIN_CARD_COUNT} cards, got {0}")]
    NotEnoughCards(usize),

    /// Two definitions share an id.
    #[error("duplicate card id \"{0}\"")]
    DuplicateId(CardId),

    /// A definition has an empty name.
    #[error("card \"{0}\" has no name")]
    EmptyName(CardId),

    /// A definition has an empty image.
    #[error("card \"{0}\" has no image")]
    EmptyImage(CardId),
}

/// Check a definition list against the ingestion contract:
/// at least [`MIN_CARD_COUNT`] entries, unique ids, non-empty name and
/// image. Returns the first violation found.
pub fn validate(definitions: &[CardDefinition]) -> Result<(), ContentError> {
    if definitions.len() < MIN_CARD_COUNT {
        return Err(ContentError::NotEnoughCards(definitions.len()));
    }

    let mut seen = FxHashSet::default();
    for def in definitions {
        if !seen.insert(&def.id) {
            return Err(ContentError::DuplicateId(def.id.clone()));
        }
        if def.name.is_empty() {
            return Err(ContentError::EmptyName(def.id.clone()));
        }
        if def.image.as_str().is_empty() {
            return Err(ContentError::EmptyImage(def.id.clone()));
        }
    }

    Ok(())
}

/// The built-in starter set shown on the home screen.
#[must_use]
pub fn default_cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(CardId::new("1"), "貓咪", "🐱").with_english_name("Cat"),
        CardDefinition::new(CardId::new("2"), "狗狗", "🐶").with_english_name("Dog"),
        CardDefinition::new(CardId::new("3"), "蘋果", "🍎").with_english_name("Apple"),
        CardDefinition::new(CardId::new("4"), "香蕉", "🍌").with_english_name("Banana"),
        CardDefinition::new(CardId::new("5"), "汽車", "🚗").with_english_name("Car"),
        CardDefinition::new(CardId::new("6"), "飛機", "✈️").with_english_name("Airplane"),
    ]
}
