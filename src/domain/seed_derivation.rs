//! RNG seed derivation for deterministic dealing.
//!
//! A room keeps one base seed; each game started in that room deals from
//! a seed derived here, so a whole session replays identically from the
//! base seed alone.

/// Derive the dealing seed for the `game_no`-th game of a room.
pub fn derive_dealing_seed(base_seed: u64, game_no: u32) -> u64 {
    base_seed
        .wrapping_add((game_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(1)
}
