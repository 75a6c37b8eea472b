//! Deck builder property tests.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memory_match::cards::{deck, CardVariant};
use memory_match::{CardDefinition, CardId, GameRng};

fn definitions(n: usize) -> Vec<CardDefinition> {
    (0..n)
        .map(|i| CardDefinition::new(CardId::new(format!("{i}")), format!("card-{i}"), "🂠"))
        .collect()
}

#[test]
fn test_input_list_is_not_consumed() {
    let defs = definitions(4);
    let before = defs.clone();

    let _ = deck::build(&defs, &mut GameRng::new(42));

    assert_eq!(defs, before);
}

proptest! {
    /// A deck of N definitions is exactly 2N cards: one name and one
    /// image card per id, with the id multiset unchanged by shuffling.
    #[test]
    fn prop_doubled_and_paired(n in 1usize..24, seed in any::<u64>()) {
        let defs = definitions(n);
        let cards = deck::build(&defs, &mut GameRng::new(seed));

        prop_assert_eq!(cards.len(), 2 * n);

        let mut by_id: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
        for card in &cards {
            let entry = by_id.entry(card.id.as_str()).or_default();
            match card.variant {
                CardVariant::Name => entry.0 += 1,
                CardVariant::Image => entry.1 += 1,
            }
        }

        prop_assert_eq!(by_id.len(), n);
        for def in &defs {
            prop_assert_eq!(by_id[def.id.as_str()], (1, 1));
        }
    }

    /// Positions are a permutation of the deal order 0..2N.
    #[test]
    fn prop_positions_permuted(n in 1usize..24, seed in any::<u64>()) {
        let defs = definitions(n);
        let mut positions: Vec<_> = deck::build(&defs, &mut GameRng::new(seed))
            .iter()
            .map(|c| c.position)
            .collect();
        positions.sort_unstable();

        prop_assert_eq!(positions, (0..2 * n).collect::<Vec<_>>());
    }
}
