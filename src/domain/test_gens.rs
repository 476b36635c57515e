// Proptest generators for domain types.
// These generators ensure unique cards and valid table states for
// property-based testing.

use proptest::prelude::*;

use crate::domain::{full_deck, Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate a vector of exactly `count` unique cards, as a subsequence
/// of the full deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    assert!(count <= 52);
    proptest::sample::subsequence(full_deck(), count)
}

/// Generate between 1 and `max` unique cards.
pub fn unique_cards_up_to(max: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max).prop_flat_map(unique_cards)
}

/// Generate a sorted 13-card hand.
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards(13).prop_map(|mut cards| {
        cards.sort();
        cards
    })
}
