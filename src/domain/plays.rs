//! Legal-candidate enumeration: every combination a hand could put on
//! the table against the current requirement.
//!
//! Shared by the AI players and the tests; turn order and hand ownership
//! are enforced separately by [`super::table::apply_play`].

use super::cards_types::Card;
use super::combination::{evaluate, Combination};
use super::table::combination_is_playable;

/// All size-`k` subsets of `cards`, in input order.
pub fn k_subsets(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    let mut result = Vec::new();
    if k == 0 || k > cards.len() {
        return result;
    }
    let mut current = Vec::with_capacity(k);
    subsets_from(cards, k, 0, &mut current, &mut result);
    result
}

fn subsets_from(
    cards: &[Card],
    k: usize,
    start: usize,
    current: &mut Vec<Card>,
    result: &mut Vec<Vec<Card>>,
) {
    if current.len() == k {
        result.push(current.clone());
        return;
    }
    // Not enough cards left to complete the subset.
    if cards.len() - start < k - current.len() {
        return;
    }
    for i in start..cards.len() {
        current.push(cards[i]);
        subsets_from(cards, k, i + 1, current, result);
        current.pop();
    }
}

/// Enumerate the legal plays for a hand, weakest first.
///
/// Leading (no last play): single-card leads only, restricted to those
/// containing the 3 of clubs on the game's first turn. Following:
/// same-size subsets that evaluate to a valid combination and beat the
/// last play — symmetric across singles, pairs, triples, and every
/// five-card kind.
///
/// "Weakest first" orders five-card candidates by dominance tier before
/// strength, so index 0 is always the minimal overplay.
pub fn legal_plays(
    hand: &[Card],
    last_play: Option<&Combination>,
    first_turn: bool,
) -> Vec<Combination> {
    if hand.is_empty() {
        return Vec::new();
    }

    let required_size = match last_play {
        None => 1,
        Some(last) => last.kind.size(),
    };

    let mut candidates: Vec<Combination> = k_subsets(hand, required_size)
        .into_iter()
        .filter_map(|cards| evaluate(&cards).ok())
        .filter(|combo| combination_is_playable(combo, last_play, first_turn))
        .collect();

    candidates.sort_by_key(|c| (c.kind.five_card_tier().unwrap_or(0), c.strength));
    candidates
}
