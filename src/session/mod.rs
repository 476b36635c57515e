//! Session layer: per-room ownership of game state.
//!
//! The engine itself is pure; this layer gives a transport collaborator
//! a handle per room. Each room sits behind its own mutex, so all
//! transitions for one room (human play, human pass, AI runs) are
//! serialized, while rooms stay fully independent.

mod room;

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

pub use room::{GameRoom, SeatControl, TurnRecord};

#[cfg(test)]
mod tests_session;

/// Registry of independent rooms keyed by room id.
#[derive(Default)]
pub struct RoomManager {
    rooms: DashMap<String, Arc<Mutex<GameRoom>>>,
}

impl RoomManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a room, creating it with an entropy-derived base seed if it
    /// does not exist yet.
    pub fn room(&self, room_id: &str) -> Arc<Mutex<GameRoom>> {
        self.rooms
            .entry(room_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(GameRoom::new(rand::random()))))
            .clone()
    }

    /// Fetch a room, creating it with an explicit base seed (used by
    /// tests and replays).
    pub fn room_with_seed(&self, room_id: &str, base_seed: u64) -> Arc<Mutex<GameRoom>> {
        self.rooms
            .entry(room_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(GameRoom::new(base_seed))))
            .clone()
    }

    pub fn remove(&self, room_id: &str) {
        self.rooms.remove(room_id);
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
