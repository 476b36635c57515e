//! Random AI player: uniform choice among legal moves.
//!
//! Useful as a test opponent and as a behavioral baseline. Thread-safe
//! interior mutability via `Mutex<StdRng>` since the trait takes
//! `&self`; seedable for reproducible games.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer, SeatView};
use crate::domain::plays::legal_plays;
use crate::domain::Card;

pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    /// `Some(seed)` for reproducible behavior, `None` for entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_move(&self, view: &SeatView<'_>) -> Result<Option<Vec<Card>>, AiError> {
        let candidates = legal_plays(view.hand, view.last_play, view.first_turn);
        if candidates.is_empty() {
            // Leading with a non-empty hand always yields candidates, so
            // an empty set here means pass.
            return Ok(None);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let choice = candidates
            .choose(&mut *rng)
            .ok_or_else(|| AiError::Internal("Failed to choose a random play".into()))?;

        Ok(Some(choice.cards.clone()))
    }
}
