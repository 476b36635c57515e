//! Domain-level error type used across the engine.
//!
//! This error type is transport-agnostic. The orchestrating collaborator
//! decides user-visible messaging; the engine only classifies what went
//! wrong. Every failure is recoverable and is reported without mutating
//! any game state.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation failure kinds for player actions and card input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Cards do not form any recognized combination.
    InvalidCombination,
    /// Combinations of these kinds cannot be compared.
    MismatchedPlayType,
    /// Acting seat is not the current turn holder.
    OutOfTurn,
    /// A played card is not in the acting seat's hand.
    CardNotInHand,
    /// Valid combination, but it does not beat the table's last play.
    CannotBeatLastPlay,
    /// The very first play of a game must contain the opening card.
    OpeningCardRequired,
    /// Pass attempted while holding the lead (no play to pass on).
    PassWhileLeading,
    /// Action attempted after a seat has already emptied its hand.
    GameFinished,
    /// Seat index outside 0..=3.
    InvalidSeat,
    /// Card token could not be parsed.
    ParseCard,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input/user validation or game rule violation.
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other("OTHER".into()), detail.into())
    }

    /// The validation kind, for callers that branch on the taxonomy.
    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
