//! daidee: rules engine for four-player Big Two (Dai Di).
//!
//! The crate is split into a pure rules core and a thin ownership layer:
//! - [`domain`]: cards, the combination evaluator, dealing, and the turn
//!   state machine. Pure functions over explicit state, no I/O.
//! - [`ai`]: automated move selection following the same rules, behind
//!   the [`ai::AiPlayer`] trait.
//! - [`session`]: per-room state ownership for a transport collaborator
//!   (seat control, AI turn loop). Sockets, broadcasting, think-time
//!   pacing, and persistence live outside this crate.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod errors;
pub mod session;

// Re-exports for the external interface
pub use ai::{create_ai, select_move, AiPlayer, SeatView};
pub use domain::{
    apply_pass, apply_play, deal_new_game, evaluate, Card, Combination, Deal, PassOutcome,
    PlayKind, PlayOutcome, Rank, Seat, Suit, TableState, OPENING_CARD,
};
pub use errors::{DomainError, ValidationKind};
pub use session::{GameRoom, RoomManager, SeatControl, TurnRecord};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
