//! Core card types: Card, Rank, Suit, and the climbing power order.

/// Suit strength for tie-breaks only: Clubs < Diamonds < Hearts < Spades.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Tie-break strength, 1..=4.
    pub fn strength(self) -> u16 {
        match self {
            Suit::Clubs => 1,
            Suit::Diamonds => 2,
            Suit::Hearts => 3,
            Suit::Spades => 4,
        }
    }
}

/// Ranks in climbing order: Three is lowest, Two is highest and Ace is
/// second-highest. Variant order matches strength so the derived `Ord`
/// is the game order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Climbing strength, 3..=15 (Three=3 .. Ace=14, Two=15).
    pub fn strength(self) -> u16 {
        self as u16 + 3
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Total-order score of a card: rank strength times ten plus suit
    /// strength. Distinct for all 52 cards, so no ties are possible.
    pub fn power(self) -> u16 {
        self.rank.strength() * 10 + self.suit.strength()
    }
}

// Ord on Card is the game order: rank first (climbing), suit tie-break.
// Hands sorted with this are ascending by power.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.power().cmp(&other.power())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The opening card: the conventionally lowest card in the deck, which
/// must appear in the very first play of a game.
pub const OPENING_CARD: Card = Card {
    suit: Suit::Clubs,
    rank: Rank::Three,
};
