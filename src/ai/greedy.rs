//! Greedy AI player: the minimal-overplay policy.
//!
//! Deterministic, no RNG. Always plays the weakest combination that is
//! still legal, conserving strong cards:
//! - Leading: the lowest single in hand (restricted to the 3 of clubs
//!   on the game's first turn).
//! - Following: the weakest same-size candidate that beats the table,
//!   across every combination kind. Passes when nothing beats it.

use super::trait_def::{AiError, AiPlayer, SeatView};
use crate::domain::plays::legal_plays;
use crate::domain::Card;

/// Pure selection function behind [`GreedyPlayer`]: the weakest legal
/// move for this view, or `None` to pass.
///
/// `legal_plays` returns candidates weakest first, so the choice is the
/// head of the list.
pub fn select_move(view: &SeatView<'_>) -> Option<Vec<Card>> {
    legal_plays(view.hand, view.last_play, view.first_turn)
        .into_iter()
        .next()
        .map(|combo| combo.cards)
}

#[derive(Debug, Clone, Default)]
pub struct GreedyPlayer;

impl GreedyPlayer {
    pub const NAME: &'static str = "GreedyPlayer";

    pub fn new() -> Self {
        Self
    }
}

impl AiPlayer for GreedyPlayer {
    fn choose_move(&self, view: &SeatView<'_>) -> Result<Option<Vec<Card>>, AiError> {
        Ok(select_move(view))
    }
}
