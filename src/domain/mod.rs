//! Domain layer: pure game rules, no I/O.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod combination;
pub mod dealing;
pub mod player_view;
pub mod plays;
pub mod rules;
pub mod seed_derivation;
pub mod state;
pub mod table;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_evaluator;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit, OPENING_CARD};
pub use combination::{evaluate, Combination, PlayKind};
pub use dealing::{deal_new_game, find_opening_seat, full_deck, Deal};
pub use plays::legal_plays;
pub use seed_derivation::derive_dealing_seed;
pub use state::{next_seat, seat_offset, Seat, TableState};
pub use table::{apply_pass, apply_play, PassOutcome, PlayOutcome};
