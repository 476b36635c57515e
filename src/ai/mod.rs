//! AI player module: automated move selection for AI-controlled seats.
//!
//! Provides the [`AiPlayer`] trait, the deterministic minimal-overplay
//! [`GreedyPlayer`], a seedable [`RandomPlayer`], and a factory to build
//! players from configuration.

mod greedy;
mod random;
mod trait_def;

pub use greedy::{select_move, GreedyPlayer};
pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer, SeatView};

/// Create an AI player from an ai_type string and optional config.
///
/// Supports:
/// - "greedy": deterministic minimal-overplay player
/// - "random": uniform legal player, optional `{"seed": u64}` config
///
/// Returns None if ai_type is unrecognized.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    match ai_type {
        "greedy" => Some(Box::new(GreedyPlayer::new())),
        "random" => {
            let seed = config.and_then(|c| c.get("seed")).and_then(|s| s.as_u64());
            Some(Box::new(RandomPlayer::new(seed)))
        }
        _ => None,
    }
}
