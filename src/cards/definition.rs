//! Card definitions - author-supplied card content.
//!
//! `CardDefinition` holds the immutable content of one pair: the textual
//! name, the image side (emoji or picture URL), and an optional English
//! translation. The deck builder doubles each definition into a name card
//! and an image card.
//!
//! Runtime flip/match state lives on `GameCard`, not here.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Caller-supplied (manual entry, spreadsheet row) or generator-assigned
/// (`url-<index>` for definitions decoded from a share token). Unique
/// within one deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The image side of a card: an emoji glyph or a picture URL.
///
/// Decided once at ingestion by URL-scheme prefix, so neither the engine
/// nor the codec re-inspects the string later. Serializes as the raw
/// string either way.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardImage {
    /// An emoji (or any short text) rendered directly.
    Emoji(String),
    /// A picture fetched from an `http(s)` URL.
    Url(String),
}

impl CardImage {
    /// Get the raw image string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CardImage::Emoji(s) | CardImage::Url(s) => s,
        }
    }

    /// Check whether this is a picture URL.
    #[must_use]
    pub fn is_url(&self) -> bool {
        matches!(self, CardImage::Url(_))
    }
}

impl From<String> for CardImage {
    fn from(raw: String) -> Self {
        if raw.starts_with("http") {
            CardImage::Url(raw)
        } else {
            CardImage::Emoji(raw)
        }
    }
}

impl From<&str> for CardImage {
    fn from(raw: &str) -> Self {
        CardImage::from(raw.to_string())
    }
}

impl From<CardImage> for String {
    fn from(image: CardImage) -> Self {
        match image {
            CardImage::Emoji(s) | CardImage::Url(s) => s,
        }
    }
}

impl std::fmt::Display for CardImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author-supplied content for one pair of cards.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardDefinition, CardId};
///
/// let cat = CardDefinition::new(CardId::new("1"), "貓咪", "🐱")
///     .with_english_name("Cat");
///
/// assert!(!cat.image.is_url());
/// assert_eq!(cat.english_name.as_deref(), Some("Cat"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier within a deck.
    pub id: CardId,

    /// Display name (the text side of the pair).
    pub name: String,

    /// Image side of the pair.
    pub image: CardImage,

    /// Optional English translation of the name.
    pub english_name: Option<String>,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, image: impl Into<CardImage>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            english_name: None,
        }
    }

    /// Add an English translation (builder pattern).
    #[must_use]
    pub fn with_english_name(mut self, english_name: impl Into<String>) -> Self {
        self.english_name = Some(english_name.into());
        self
    }
}
