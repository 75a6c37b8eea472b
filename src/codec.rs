//! Shareable-state codec: definition list ⇄ URL-safe token.
//!
//! A game is shared by encoding its card definitions into a path segment.
//! Each definition is projected to the triple `[name, image, english]`
//! (empty string for a missing translation), the list is serialized as
//! JSON, and the UTF-8 bytes are base64url-encoded (`+`→`-`, `/`→`_`,
//! padding stripped). Decoding reverses the transform and assigns fresh
//! positional ids, so an imported deck never keeps caller-supplied ids.
//!
//! ```
//! use memory_match::cards::{CardDefinition, CardId};
//! use memory_match::codec;
//!
//! let defs = vec![CardDefinition::new(CardId::new("1"), "貓咪", "🐱").with_english_name("Cat")];
//! let token = codec::encode(&defs);
//!
//! let decoded = codec::decode(&token).unwrap();
//! assert_eq!(decoded[0].id.as_str(), "url-0");
//! assert_eq!(decoded[0].name, "貓咪");
//! ```

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use thiserror::Error;
use tracing::debug;

use crate::cards::{CardDefinition, CardId, CardImage};

/// Why a share token failed to decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token is not valid base64url text.
    #[error("token is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not UTF-8.
    #[error("token payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The payload text is not a list of card triples.
    #[error("token payload is not a card list: {0}")]
    Format(#[from] serde_json::Error),
}

/// Encode a definition list into a URL-safe token.
pub fn encode(definitions: &[CardDefinition]) -> String {
    let compact: Vec<[&str; 3]> = definitions
        .iter()
        .map(|def| {
            [
                def.name.as_str(),
                def.image.as_str(),
                def.english_name.as_deref().unwrap_or(""),
            ]
        })
        .collect();

    // A list of string triples always serializes
    let json = serde_json::to_string(&compact).expect("string triples serialize");
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Decode a token back into a definition list.
///
/// Tolerates trailing `=` padding. Decoded definitions get fresh
/// positional ids (`url-0`, `url-1`, ...) and an empty stored translation
/// becomes `None`.
pub fn decode(token: &str) -> Result<Vec<CardDefinition>, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim_end_matches('='))?;
    let json = String::from_utf8(bytes)?;
    let compact: Vec<(String, String, String)> = serde_json::from_str(&json)?;

    Ok(compact
        .into_iter()
        .enumerate()
        .map(|(index, (name, image, english))| CardDefinition {
            id: CardId::new(format!("url-{index}")),
            name,
            image: CardImage::from(image),
            english_name: (!english.is_empty()).then_some(english),
        })
        .collect())
}

/// Pre-flight check: does `token` decode to a non-empty definition list?
///
/// Never panics; any decode failure is `false`.
#[must_use]
pub fn is_valid(token: &str) -> bool {
    match decode(token) {
        Ok(definitions) => !definitions.is_empty(),
        Err(err) => {
            debug!(%err, "rejected share token");
            false
        }
    }
}
