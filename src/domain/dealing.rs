//! Deck construction and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Rank, Suit, OPENING_CARD};
use super::rules::SEATS;
use super::state::Seat;

/// A fresh game: four sorted hands and the seat that leads first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Vec<Card>; SEATS],
    pub opening_seat: Seat,
}

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher-Yates shuffle; seedable for deterministic deals, entropy
/// otherwise.
fn shuffle(deck: &mut [Card], seed: Option<u64>) {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    deck.shuffle(&mut rng);
}

/// Seat holding the opening card (3 of clubs). With a full standard deck
/// exactly one hand holds it; the seat-0 fallback is defined behavior
/// for degenerate input, not a silent bug.
pub fn find_opening_seat(hands: &[Vec<Card>; SEATS]) -> Seat {
    hands
        .iter()
        .position(|hand| hand.contains(&OPENING_CARD))
        .unwrap_or(0) as Seat
}

/// Shuffle and deal a new game.
///
/// The deck is distributed round-robin so each of the four hands gets 13
/// cards; hands come back sorted ascending by power. The opening seat is
/// whichever hand received the 3 of clubs.
pub fn deal_new_game(seed: Option<u64>) -> Deal {
    let mut deck = full_deck();
    shuffle(&mut deck, seed);

    let mut hands: [Vec<Card>; SEATS] = Default::default();
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % SEATS].push(card);
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }

    let opening_seat = find_opening_seat(&hands);
    Deal {
        hands,
        opening_seat,
    }
}
