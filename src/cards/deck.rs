//! The doubled-deck builder.
//!
//! Every definition becomes two `GameCard`s - one showing the name, one
//! showing the image - and the combined deck is dealt in uniform random
//! order. A deck of N definitions is always exactly 2N cards.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, CardImage};
use crate::core::GameRng;

/// Which side of a definition a game card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardVariant {
    /// The textual name side.
    Name,
    /// The image side.
    Image,
}

/// One card on the table: definition content plus runtime flip state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCard {
    /// Identifier shared by both cards of a pair.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Image side.
    pub image: CardImage,

    /// Optional English translation.
    pub english_name: Option<String>,

    /// Which side this card shows.
    pub variant: CardVariant,

    /// Currently face-up (outside the preview interval)?
    pub is_flipped: bool,

    /// Resolved as part of a matched pair?
    pub is_matched: bool,

    /// Deal order before shuffling. Informational only.
    pub position: usize,
}

impl GameCard {
    fn from_definition(def: &CardDefinition, variant: CardVariant, position: usize) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            image: def.image.clone(),
            english_name: def.english_name.clone(),
            variant,
            is_flipped: false,
            is_matched: false,
            position,
        }
    }

    /// Recover the definition this card was built from.
    #[must_use]
    pub fn definition(&self) -> CardDefinition {
        CardDefinition {
            id: self.id.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            english_name: self.english_name.clone(),
        }
    }
}

/// Build a shuffled deck from a list of definitions.
///
/// Each definition at index `i` yields a name card at position `2i` and an
/// image card at position `2i + 1`, both face-down, then the whole deck is
/// shuffled uniformly. The input list is not consumed or reordered.
///
/// Playability (at least 3 definitions) is enforced by callers, not here.
#[must_use]
pub fn build(definitions: &[CardDefinition], rng: &mut GameRng) -> Vec<GameCard> {
    let mut cards = Vec::with_capacity(definitions.len() * 2);

    for (i, def) in definitions.iter().enumerate() {
        cards.push(GameCard::from_definition(def, CardVariant::Name, i * 2));
        cards.push(GameCard::from_definition(def, CardVariant::Image, i * 2 + 1));
    }

    rng.shuffle(&mut cards);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definitions(n: usize) -> Vec<CardDefinition> {
        (0..n)
            .map(|i| CardDefinition::new(CardId::new(format!("{i}")), format!("card-{i}"), "🂠"))
            .collect()
    }

    #[test]
    fn test_doubles_every_definition() {
        let defs = definitions(6);
        let mut rng = GameRng::new(42);

        let deck = build(&defs, &mut rng);

        assert_eq!(deck.len(), 12);
        for def in &defs {
            let names = deck
                .iter()
                .filter(|c| c.id == def.id && c.variant == CardVariant::Name)
                .count();
            let images = deck
                .iter()
                .filter(|c| c.id == def.id && c.variant == CardVariant::Image)
                .count();
            assert_eq!((names, images), (1, 1));
        }
    }

    #[test]
    fn test_cards_start_face_down() {
        let defs = definitions(4);
        let mut rng = GameRng::new(42);

        let deck = build(&defs, &mut rng);

        assert!(deck.iter().all(|c| !c.is_flipped && !c.is_matched));
    }

    #[test]
    fn test_positions_cover_deal_order() {
        let defs = definitions(5);
        let mut rng = GameRng::new(42);

        let mut positions: Vec<_> = build(&defs, &mut rng).iter().map(|c| c.position).collect();
        positions.sort_unstable();

        assert_eq!(positions, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let defs = definitions(8);

        let deck1 = build(&defs, &mut GameRng::new(7));
        let deck2 = build(&defs, &mut GameRng::new(7));
        let deck3 = build(&defs, &mut GameRng::new(8));

        assert_eq!(deck1, deck2);
        assert_ne!(deck1, deck3);
    }

    #[test]
    fn test_single_definition() {
        let defs = definitions(1);
        let mut rng = GameRng::new(42);

        let deck = build(&defs, &mut rng);

        assert_eq!(deck.len(), 2);
        assert_ne!(deck[0].variant, deck[1].variant);
    }

    #[test]
    fn test_definition_round_trip() {
        let defs = vec![CardDefinition::new(CardId::new("x"), "貓咪", "🐱").with_english_name("Cat")];
        let mut rng = GameRng::new(42);

        let deck = build(&defs, &mut rng);

        assert_eq!(deck[0].definition(), defs[0]);
        assert_eq!(deck[1].definition(), defs[0]);
    }
}
