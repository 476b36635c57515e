//! Combination evaluation: classifying a set of cards into a play kind
//! and a comparable strength.
//!
//! `evaluate` is a pure function of its input set: it sorts internally,
//! so permuting the input yields the same result. Rejections come back
//! as `DomainError` values, never panics.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

/// Recognized play kinds. Two plays are comparable only within the same
/// kind, except that the five-card kinds form a dominance ladder:
/// StraightFlush > FourOfAKind > FullHouse > Flush > Straight.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayKind {
    Single,
    Pair,
    Triple,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl PlayKind {
    /// Number of cards this kind is made of.
    pub fn size(self) -> usize {
        match self {
            PlayKind::Single => 1,
            PlayKind::Pair => 2,
            PlayKind::Triple => 3,
            _ => 5,
        }
    }

    /// Position on the five-card dominance ladder, or None for the
    /// small kinds.
    pub(crate) fn five_card_tier(self) -> Option<u8> {
        match self {
            PlayKind::Straight => Some(1),
            PlayKind::Flush => Some(2),
            PlayKind::FullHouse => Some(3),
            PlayKind::FourOfAKind => Some(4),
            PlayKind::StraightFlush => Some(5),
            _ => None,
        }
    }
}

/// A classified, comparable play: kind, numeric strength for ordering
/// within the kind, and the cards themselves (sorted ascending by
/// power).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub kind: PlayKind,
    pub strength: u16,
    pub cards: Vec<Card>,
}

impl Combination {
    /// Whether this combination beats `other` under table rules.
    ///
    /// Same kind: strictly greater strength wins. Two different
    /// five-card kinds: the higher dominance tier wins outright. Any
    /// other pairing is not comparable and is rejected rather than
    /// silently permitted.
    pub fn beats(&self, other: &Combination) -> Result<bool, DomainError> {
        if self.kind == other.kind {
            return Ok(self.strength > other.strength);
        }
        match (self.kind.five_card_tier(), other.kind.five_card_tier()) {
            (Some(mine), Some(theirs)) => Ok(mine > theirs),
            _ => Err(DomainError::validation(
                ValidationKind::MismatchedPlayType,
                format!("Cannot compare {:?} against {:?}", self.kind, other.kind),
            )),
        }
    }
}

/// Classify a non-empty set of cards into a combination.
///
/// Accepts singles, equal-rank pairs and triples, and the five five-card
/// kinds. Straights are five consecutive rank strengths drawn from
/// Three..Ace: the Two never joins a straight and sequences do not wrap.
pub fn evaluate(cards: &[Card]) -> Result<Combination, DomainError> {
    if cards.is_empty() {
        return Err(invalid("Empty play"));
    }

    let mut sorted = cards.to_vec();
    sorted.sort();
    sorted.dedup();
    if sorted.len() != cards.len() {
        return Err(invalid("Duplicate cards in play"));
    }

    match sorted.len() {
        1 => Ok(Combination {
            kind: PlayKind::Single,
            strength: sorted[0].power(),
            cards: sorted,
        }),
        2 if same_rank(&sorted) => Ok(Combination {
            kind: PlayKind::Pair,
            // Strength of the higher-suited card of the pair.
            strength: sorted[1].power(),
            cards: sorted,
        }),
        3 if same_rank(&sorted) => Ok(Combination {
            kind: PlayKind::Triple,
            strength: sorted[2].power(),
            cards: sorted,
        }),
        5 => evaluate_five(sorted),
        _ => Err(invalid("Unrecognized combination")),
    }
}

fn evaluate_five(sorted: Vec<Card>) -> Result<Combination, DomainError> {
    let straight = is_straight(&sorted);
    let flush = sorted.iter().all(|c| c.suit == sorted[0].suit);

    let kind = if straight && flush {
        PlayKind::StraightFlush
    } else if straight {
        PlayKind::Straight
    } else if flush {
        PlayKind::Flush
    } else if let Some(kind) = grouped_kind(&sorted) {
        kind
    } else {
        return Err(invalid("Five cards form no recognized combination"));
    };

    let strength = match kind {
        // Straights, flushes: decided by the highest card.
        PlayKind::Straight | PlayKind::Flush | PlayKind::StraightFlush => sorted[4].power(),
        // Full house / four of a kind: decided by the dominant group.
        PlayKind::FullHouse => group_strength(&sorted, 3),
        PlayKind::FourOfAKind => group_strength(&sorted, 4),
        _ => unreachable!("five-card classification produced a small kind"),
    };

    Ok(Combination {
        kind,
        strength,
        cards: sorted,
    })
}

fn same_rank(cards: &[Card]) -> bool {
    cards.iter().all(|c| c.rank == cards[0].rank)
}

/// Five consecutive rank strengths, Two excluded, no wrap-around.
fn is_straight(sorted: &[Card]) -> bool {
    if sorted[4].rank == Rank::Two {
        return false;
    }
    sorted
        .windows(2)
        .all(|w| w[1].rank.strength() == w[0].rank.strength() + 1)
}

/// Detect 3+2 and 4+1 rank groupings.
fn grouped_kind(sorted: &[Card]) -> Option<PlayKind> {
    let mut counts: Vec<(Rank, u8)> = Vec::with_capacity(2);
    for c in sorted {
        match counts.iter_mut().find(|(r, _)| *r == c.rank) {
            Some((_, n)) => *n += 1,
            None => counts.push((c.rank, 1)),
        }
    }
    if counts.len() != 2 {
        return None;
    }
    match (counts[0].1, counts[1].1) {
        (3, 2) | (2, 3) => Some(PlayKind::FullHouse),
        (4, 1) | (1, 4) => Some(PlayKind::FourOfAKind),
        _ => None,
    }
}

/// Highest power within the rank group of the given size.
fn group_strength(sorted: &[Card], group_size: usize) -> u16 {
    Rank::ALL
        .iter()
        .find_map(|&rank| {
            let group: Vec<&Card> = sorted.iter().filter(|c| c.rank == rank).collect();
            if group.len() == group_size {
                group.iter().map(|c| c.power()).max()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn invalid(detail: &str) -> DomainError {
    DomainError::validation(ValidationKind::InvalidCombination, detail)
}
