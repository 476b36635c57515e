//! Fixed table constants for four-player Big Two.

/// Four fixed seats, 0..=3.
pub const SEATS: usize = 4;

/// Cards per hand with a full 52-card deck dealt round-robin.
pub const HAND_SIZE: usize = 13;

/// Consecutive passes that clear the table and hand the lead back.
pub const PASSES_TO_RESET: u8 = 3;
