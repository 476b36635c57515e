//! A single game room: one authoritative table, per-seat control flags,
//! and the loop that drives consecutive AI turns.
//!
//! All methods take `&mut self`; the [`RoomManager`](super::RoomManager)
//! wraps each room in its own mutex so no two transitions for the same
//! room can interleave. Rooms are independent of each other.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ai::{AiPlayer, GreedyPlayer, SeatView};
use crate::domain::player_view::SeatSnapshot;
use crate::domain::rules::SEATS;
use crate::domain::{
    apply_pass, apply_play, deal_new_game, derive_dealing_seed, Card, PassOutcome, PlayOutcome,
    Seat, TableState,
};
use crate::errors::domain::DomainError;

/// Who drives a seat. A disconnect hands the seat to the AI; a reconnect
/// hands it back.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SeatControl {
    Human,
    Ai,
}

/// One accepted action taken during an AI run, for the collaborator to
/// broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TurnRecord {
    Played {
        seat: Seat,
        cards: Vec<Card>,
        outcome: PlayOutcome,
    },
    Passed {
        seat: Seat,
        outcome: PassOutcome,
    },
}

/// Upper bound on actions in one AI run. A four-seat game is bounded by
/// 52 plays plus interleaved passes; anything past this means a policy
/// is cycling.
const MAX_AI_ACTIONS: usize = 256;

pub struct GameRoom {
    base_seed: u64,
    games_started: u32,
    control: [SeatControl; SEATS],
    ai: Box<dyn AiPlayer>,
    table: Option<TableState>,
}

impl GameRoom {
    /// New room with the default deterministic AI policy.
    pub fn new(base_seed: u64) -> Self {
        Self::with_ai(base_seed, Box::new(GreedyPlayer::new()))
    }

    pub fn with_ai(base_seed: u64, ai: Box<dyn AiPlayer>) -> Self {
        Self {
            base_seed,
            games_started: 0,
            control: [SeatControl::Human; SEATS],
            ai,
            table: None,
        }
    }

    /// Deal a fresh game and return the opening seat. The dealing seed
    /// is derived from the room's base seed and the game counter, so a
    /// room's whole session replays from one seed.
    pub fn start_game(&mut self) -> Seat {
        let seed = derive_dealing_seed(self.base_seed, self.games_started);
        self.games_started += 1;
        let deal = deal_new_game(Some(seed));
        let opening_seat = deal.opening_seat;
        info!(game_no = self.games_started, opening_seat, "game started");
        self.table = Some(TableState::new(deal));
        opening_seat
    }

    pub fn table(&self) -> Option<&TableState> {
        self.table.as_ref()
    }

    pub fn seat_control(&self, seat: Seat) -> SeatControl {
        self.control[seat as usize]
    }

    /// Seat lost its human driver (disconnect): AI takes over.
    pub fn mark_ai(&mut self, seat: Seat) {
        self.control[seat as usize] = SeatControl::Ai;
        debug!(seat, "seat handed to AI");
    }

    /// Human takes the seat back (reconnect).
    pub fn mark_human(&mut self, seat: Seat) {
        self.control[seat as usize] = SeatControl::Human;
        debug!(seat, "seat handed back to human");
    }

    /// Apply a human-submitted play.
    pub fn human_play(&mut self, seat: Seat, cards: &[Card]) -> Result<PlayOutcome, DomainError> {
        let table = self.require_table()?;
        let outcome = apply_play(table, seat, cards)?;
        info!(seat, n_cards = cards.len(), ?outcome, "play accepted");
        Ok(outcome)
    }

    /// Apply a human-submitted pass.
    pub fn human_pass(&mut self, seat: Seat) -> Result<PassOutcome, DomainError> {
        let table = self.require_table()?;
        let outcome = apply_pass(table, seat)?;
        info!(seat, ?outcome, "pass accepted");
        Ok(outcome)
    }

    /// Redacted view of the table for one seat.
    pub fn snapshot_for(&self, seat: Seat) -> Option<SeatSnapshot> {
        self.table.as_ref().map(|t| SeatSnapshot::of(t, seat))
    }

    /// Run consecutive AI-controlled turns until the turn reaches a
    /// human seat or the game ends. An explicit loop, not recursion: an
    /// all-AI table plays out without growing the stack.
    ///
    /// Think-time pacing between moves is the collaborator's concern;
    /// the engine behaves identically with or without delays.
    pub fn run_ai_turns(&mut self) -> Result<Vec<TurnRecord>, DomainError> {
        let mut records = Vec::new();

        for _ in 0..MAX_AI_ACTIONS {
            let Some(table) = self.table.as_ref() else {
                break;
            };
            if table.winner.is_some() {
                break;
            }
            let seat = table.turn;
            if self.control[seat as usize] != SeatControl::Ai {
                break;
            }

            let view = SeatView {
                hand: &table.hands[seat as usize],
                last_play: table.last_play.as_ref(),
                first_turn: table.first_turn,
            };
            let chosen = self.ai.choose_move(&view).map_err(DomainError::from)?;

            let table = self.require_table()?;
            let record = match chosen {
                Some(cards) => {
                    let outcome = apply_play(table, seat, &cards)?;
                    info!(seat, n_cards = cards.len(), ?outcome, "AI played");
                    TurnRecord::Played {
                        seat,
                        cards,
                        outcome,
                    }
                }
                None => {
                    let outcome = apply_pass(table, seat)?;
                    info!(seat, ?outcome, "AI passed");
                    TurnRecord::Passed { seat, outcome }
                }
            };
            records.push(record);
        }

        if records.len() == MAX_AI_ACTIONS {
            warn!("AI run hit the action bound; stopping");
            return Err(DomainError::validation_other(
                "AI run exceeded the action bound",
            ));
        }
        Ok(records)
    }

    fn require_table(&mut self) -> Result<&mut TableState, DomainError> {
        self.table
            .as_mut()
            .ok_or_else(|| DomainError::validation_other("Game has not started"))
    }
}
