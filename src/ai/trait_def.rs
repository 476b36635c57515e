//! AI player trait definition.

use thiserror::Error;

use crate::domain::{Card, Combination};
use crate::errors::domain::DomainError;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI internal error: {0}")]
    Internal(String),
    #[error("AI produced an invalid move: {0}")]
    InvalidMove(String),
}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        DomainError::validation_other(format!("AI error: {err}"))
    }
}

/// What one seat can see when choosing a move: its own hand, the play to
/// beat (if any), and whether the game's opening-card constraint still
/// applies.
#[derive(Debug, Clone, Copy)]
pub struct SeatView<'a> {
    pub hand: &'a [Card],
    pub last_play: Option<&'a Combination>,
    pub first_turn: bool,
}

/// Trait for AI players.
///
/// Implementations receive a seat's view of the table and must produce a
/// legal move: `Ok(Some(cards))` to play, `Ok(None)` to pass. A returned
/// play must survive `apply_play` validation for the same state; the
/// engine treats anything else as an implementation bug, not a rule to
/// forgive.
pub trait AiPlayer: Send + Sync {
    fn choose_move(&self, view: &SeatView<'_>) -> Result<Option<Vec<Card>>, AiError>;
}
