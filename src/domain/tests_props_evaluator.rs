//! Property-based tests for the combination evaluator.

use proptest::prelude::*;

use crate::domain::{evaluate, test_gens, PlayKind};

proptest! {
    /// Permuting the input set never changes the evaluation result.
    #[test]
    fn prop_evaluate_is_order_independent(
        cards in test_gens::unique_cards_up_to(5),
        shift in 0usize..5,
    ) {
        let mut rotated = cards.clone();
        rotated.rotate_left(shift % cards.len().max(1));
        let mut reversed = cards.clone();
        reversed.reverse();

        prop_assert_eq!(evaluate(&cards), evaluate(&rotated));
        prop_assert_eq!(evaluate(&cards), evaluate(&reversed));
    }

    /// A successful evaluation keeps exactly the input cards, sorted
    /// ascending by power, and its kind matches the cardinality.
    #[test]
    fn prop_evaluation_is_consistent(cards in test_gens::unique_cards_up_to(5)) {
        if let Ok(combo) = evaluate(&cards) {
            prop_assert_eq!(combo.kind.size(), cards.len());
            prop_assert_eq!(combo.cards.len(), cards.len());
            for w in combo.cards.windows(2) {
                prop_assert!(w[0].power() < w[1].power());
            }
            for c in &cards {
                prop_assert!(combo.cards.contains(c));
            }
        }
    }

    /// Cardinalities other than 1, 2, 3, 5 are always invalid.
    #[test]
    fn prop_bad_cardinality_is_invalid(cards in test_gens::unique_cards(4)) {
        prop_assert!(evaluate(&cards).is_err());
    }

    /// Five-card hands that match no pattern are invalid; ones that do
    /// match always carry a five-card kind.
    #[test]
    fn prop_five_cards_classify_or_reject(cards in test_gens::unique_cards(5)) {
        match evaluate(&cards) {
            Ok(combo) => prop_assert!(matches!(
                combo.kind,
                PlayKind::Straight
                    | PlayKind::Flush
                    | PlayKind::FullHouse
                    | PlayKind::FourOfAKind
                    | PlayKind::StraightFlush
            )),
            Err(_) => {
                // A rejected five-card set can be neither a flush nor a
                // Two-free consecutive run.
                let flush = cards.iter().all(|c| c.suit == cards[0].suit);
                prop_assert!(!flush);
                let mut strengths: Vec<u16> =
                    cards.iter().map(|c| c.rank.strength()).collect();
                strengths.sort_unstable();
                let straight = strengths.windows(2).all(|w| w[1] == w[0] + 1)
                    && strengths[4] != 15;
                prop_assert!(!straight);
            }
        }
    }

    /// Singles are totally ordered by power: for two distinct cards one
    /// strictly beats the other.
    #[test]
    fn prop_singles_totally_ordered(cards in test_gens::unique_cards(2)) {
        let a = evaluate(&cards[..1]).unwrap();
        let b = evaluate(&cards[1..]).unwrap();
        prop_assert!(a.beats(&b).unwrap() ^ b.beats(&a).unwrap());
    }
}
