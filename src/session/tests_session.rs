//! Tests for room ownership and the AI turn loop.

use crate::domain::rules::SEATS;
use crate::domain::{try_parse_cards, Card, OPENING_CARD};
use crate::errors::domain::ValidationKind;
use crate::session::{GameRoom, RoomManager, SeatControl, TurnRecord};

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}

#[test]
fn start_game_deals_and_sets_opening_seat() {
    let mut room = GameRoom::new(7);
    let opening_seat = room.start_game();
    let table = room.table().expect("table exists");
    assert_eq!(table.turn, opening_seat);
    assert!(table.hands[opening_seat as usize].contains(&OPENING_CARD));
    assert!(table.first_turn);
}

#[test]
fn rooms_replay_from_the_base_seed() {
    let mut a = GameRoom::new(1234);
    let mut b = GameRoom::new(1234);
    a.start_game();
    b.start_game();
    assert_eq!(a.table(), b.table());

    // The second game of a room deals differently than the first.
    let first = a.table().unwrap().hands.clone();
    a.start_game();
    assert_ne!(&first, &a.table().unwrap().hands);
}

#[test]
fn actions_before_start_are_rejected() {
    let mut room = GameRoom::new(7);
    assert!(room.human_pass(0).is_err());
}

#[test]
fn human_play_enforces_rules() {
    let mut room = GameRoom::new(7);
    let opening_seat = room.start_game();
    let wrong_seat = (opening_seat + 1) % SEATS as u8;

    let err = room.human_play(wrong_seat, &cards(&["3C"])).unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::OutOfTurn);

    room.human_play(opening_seat, &cards(&["3C"])).unwrap();
    assert!(!room.table().unwrap().first_turn);
}

#[test]
fn all_ai_game_runs_to_completion_without_recursion() {
    let mut room = GameRoom::new(42);
    for seat in 0..SEATS as u8 {
        room.mark_ai(seat);
    }
    room.start_game();

    let records = room.run_ai_turns().expect("AI run succeeds");
    assert!(!records.is_empty());

    let table = room.table().unwrap();
    let winner = table.winner.expect("someone won");
    assert!(table.hands[winner as usize].is_empty());

    // The last record is the winning play.
    match records.last().unwrap() {
        TurnRecord::Played { outcome, .. } => {
            assert_eq!(
                outcome,
                &crate::domain::PlayOutcome::Won { seat: winner }
            );
        }
        TurnRecord::Passed { .. } => panic!("game cannot end on a pass"),
    }
}

#[test]
fn ai_run_stops_at_a_human_seat() {
    let mut room = GameRoom::new(42);
    room.start_game();
    let opening_seat = room.table().unwrap().turn;

    // Everyone but the opening seat is AI; nothing can happen until the
    // human opening seat acts.
    for seat in 0..SEATS as u8 {
        if seat != opening_seat {
            room.mark_ai(seat);
        }
    }
    assert!(room.run_ai_turns().unwrap().is_empty());

    room.human_play(opening_seat, &cards(&["3C"])).unwrap();
    let records = room.run_ai_turns().unwrap();
    // The three AI seats act, then the turn is back with the human.
    assert_eq!(records.len(), 3);
    assert_eq!(room.table().unwrap().turn, opening_seat);
}

#[test]
fn disconnect_takeover_and_reconnect_handback() {
    let mut room = GameRoom::new(9);
    room.start_game();
    let seat = room.table().unwrap().turn;

    assert_eq!(room.seat_control(seat), SeatControl::Human);
    room.mark_ai(seat);
    assert_eq!(room.seat_control(seat), SeatControl::Ai);

    // The AI plays for the disconnected seat.
    let records = room.run_ai_turns().unwrap();
    assert!(!records.is_empty());

    room.mark_human(seat);
    assert_eq!(room.seat_control(seat), SeatControl::Human);
}

#[test]
fn snapshots_redact_other_hands() {
    let mut room = GameRoom::new(7);
    room.start_game();
    let snap = room.snapshot_for(1).unwrap();
    assert_eq!(snap.seat, 1);
    assert_eq!(snap.hand.len(), 13);
    assert_eq!(snap.hand_counts, [13; SEATS]);
}

#[test]
fn manager_keeps_rooms_independent() {
    let manager = RoomManager::new();
    let a = manager.room_with_seed("alpha", 1);
    let b = manager.room_with_seed("beta", 2);
    assert_eq!(manager.len(), 2);

    a.lock().start_game();
    assert!(b.lock().table().is_none());

    // Same id resolves to the same room.
    let a_again = manager.room("alpha");
    assert!(a_again.lock().table().is_some());

    manager.remove("alpha");
    assert_eq!(manager.len(), 1);
}
