//! Redacted per-seat view of a table, for a transport collaborator to
//! send to clients. A seat sees its own cards but only the card counts
//! of the other hands.

use serde::Serialize;

use super::cards_types::Card;
use super::combination::Combination;
use super::rules::SEATS;
use super::state::{Seat, TableState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatSnapshot {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub hand_counts: [usize; SEATS],
    pub turn: Seat,
    pub last_play: Option<Combination>,
    pub last_leader: Seat,
    pub first_turn: bool,
    pub consecutive_passes: u8,
    pub winner: Option<Seat>,
}

impl SeatSnapshot {
    pub fn of(state: &TableState, seat: Seat) -> Self {
        let mut hand_counts = [0usize; SEATS];
        for (i, hand) in state.hands.iter().enumerate() {
            hand_counts[i] = hand.len();
        }
        Self {
            seat,
            hand: state.hands[seat as usize].clone(),
            hand_counts,
            turn: state.turn,
            last_play: state.last_play.clone(),
            last_leader: state.last_leader,
            first_turn: state.first_turn,
            consecutive_passes: state.consecutive_passes,
            winner: state.winner,
        }
    }
}
