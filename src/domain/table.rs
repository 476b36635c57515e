//! Turn state machine: applying plays and passes to a [`TableState`].
//!
//! Both entry points validate fully before touching state, so a rejected
//! action leaves the table exactly as it was.

use serde::Serialize;

use super::cards_types::{Card, OPENING_CARD};
use super::combination::{evaluate, Combination};
use super::rules::PASSES_TO_RESET;
use super::state::{next_seat, require_seat, Seat, TableState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of an accepted play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlayOutcome {
    /// Play accepted; turn advanced.
    Played { next_turn: Seat },
    /// Play accepted and it emptied the seat's hand. Terminal.
    Won { seat: Seat },
}

/// Result of an accepted pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PassOutcome {
    /// Pass accepted; turn advanced.
    Passed { next_turn: Seat },
    /// Third consecutive pass: table cleared, lead returned.
    LeadReset { leader: Seat },
}

/// Apply a play for `seat`, enforcing turn order, hand ownership,
/// combination validity, the opening-card rule, and the beat rule.
pub fn apply_play(
    state: &mut TableState,
    seat: Seat,
    cards: &[Card],
) -> Result<PlayOutcome, DomainError> {
    require_seat(seat)?;
    require_running(state)?;

    if state.turn != seat {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }

    let hand = &state.hands[seat as usize];
    if cards.iter().any(|c| !hand.contains(c)) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    }

    let combination = evaluate(cards)?;

    match &state.last_play {
        None => {
            // Opening a trick. The very first play of the game must
            // contain the 3 of clubs; any later lead is free.
            if state.first_turn && !combination.cards.contains(&OPENING_CARD) {
                return Err(DomainError::validation(
                    ValidationKind::OpeningCardRequired,
                    "First play must contain the 3 of clubs",
                ));
            }
        }
        Some(last) => {
            if !combination.beats(last)? {
                return Err(DomainError::validation(
                    ValidationKind::CannotBeatLastPlay,
                    "Play does not beat the table",
                ));
            }
        }
    }

    // All checks passed; mutate.
    remove_cards(&mut state.hands[seat as usize], &combination.cards);
    state.last_play = Some(combination);
    state.last_leader = seat;
    state.first_turn = false;
    state.consecutive_passes = 0;

    if state.hands[seat as usize].is_empty() {
        state.winner = Some(seat);
        return Ok(PlayOutcome::Won { seat });
    }

    state.turn = next_seat(seat);
    Ok(PlayOutcome::Played {
        next_turn: state.turn,
    })
}

/// Apply a pass for `seat`. Passing is only possible against an existing
/// play; the third consecutive pass clears the table and returns the
/// lead to the last successful player.
pub fn apply_pass(state: &mut TableState, seat: Seat) -> Result<PassOutcome, DomainError> {
    require_seat(seat)?;
    require_running(state)?;

    if state.turn != seat {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }

    if state.last_play.is_none() {
        return Err(DomainError::validation(
            ValidationKind::PassWhileLeading,
            "Cannot pass while holding the lead",
        ));
    }

    state.consecutive_passes += 1;
    if state.consecutive_passes >= PASSES_TO_RESET {
        state.last_play = None;
        state.consecutive_passes = 0;
        state.turn = state.last_leader;
        return Ok(PassOutcome::LeadReset {
            leader: state.last_leader,
        });
    }

    state.turn = next_seat(seat);
    Ok(PassOutcome::Passed {
        next_turn: state.turn,
    })
}

fn require_running(state: &TableState) -> Result<(), DomainError> {
    match state.winner {
        Some(seat) => Err(DomainError::validation(
            ValidationKind::GameFinished,
            format!("Game already won by seat {seat}"),
        )),
        None => Ok(()),
    }
}

/// Remove exactly these cards from a sorted hand. Callers have already
/// verified membership.
fn remove_cards(hand: &mut Vec<Card>, cards: &[Card]) {
    hand.retain(|c| !cards.contains(c));
}

/// Whether this exact combination would be accepted as a play for the
/// table's current requirement, ignoring turn and hand ownership.
/// Shared by the AI candidate filter and the state machine tests.
pub fn combination_is_playable(
    combination: &Combination,
    last_play: Option<&Combination>,
    first_turn: bool,
) -> bool {
    match last_play {
        None => !first_turn || combination.cards.contains(&OPENING_CARD),
        Some(last) => combination.beats(last).unwrap_or(false),
    }
}
