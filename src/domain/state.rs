//! Table state container and seat rotation helpers.

use super::cards_types::Card;
use super::combination::Combination;
use super::dealing::Deal;
use super::rules::SEATS;
use crate::errors::domain::{DomainError, ValidationKind};

/// Seat index, 0..=3. Turn order rotates clockwise.
pub type Seat = u8;

/// Seat / turn math helpers (4 fixed seats: 0..=3). These live in
/// `domain` so every layer shares a single source of truth for rotation
/// and "who acts next".
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(SEATS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

pub fn require_seat(seat: Seat) -> Result<(), DomainError> {
    if (seat as usize) < SEATS {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Seat {seat} out of range"),
        ))
    }
}

/// Authoritative per-room game state, sufficient for all pure domain
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Players' hands, each sorted ascending by power.
    pub hands: [Vec<Card>; SEATS],
    /// Seat whose turn it is to act.
    pub turn: Seat,
    /// Play currently holding the table, if any. None means the turn
    /// holder leads a fresh trick.
    pub last_play: Option<Combination>,
    /// Seat of the most recent accepted play; the lead returns here
    /// after three consecutive passes.
    pub last_leader: Seat,
    /// True only until the very first accepted play of the game; that
    /// play must contain the opening card.
    pub first_turn: bool,
    /// Consecutive passes since the last accepted play, 0..=3.
    pub consecutive_passes: u8,
    /// Winner, once a hand empties. Terminal: no further actions.
    pub winner: Option<Seat>,
}

impl TableState {
    /// Initial state from a fresh deal: the opening seat holds the turn
    /// (and nominally the lead), no play on the table yet.
    pub fn new(deal: Deal) -> Self {
        Self {
            hands: deal.hands,
            turn: deal.opening_seat,
            last_play: None,
            last_leader: deal.opening_seat,
            first_turn: true,
            consecutive_passes: 0,
            winner: None,
        }
    }
}
