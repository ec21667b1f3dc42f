//! Per-room serialization for booking creation.
//!
//! Two requests for the same room must not both pass the availability check before
//! either inserts. `RoomLocks` hands out one async mutex per room id; the booking
//! service holds it from the availability check until its transaction commits.
//! Requests for different rooms never wait on each other.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-room mutexes shared through `AppState`.
#[derive(Clone, Default)]
pub struct RoomLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl RoomLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `room_id`.
    ///
    /// The returned guard releases the room when dropped. Entries no one holds or
    /// waits on are pruned on each call so the map does not grow with every room
    /// ever booked.
    pub async fn acquire(&self, room_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(room_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    #[cfg(test)]
    pub async fn tracked_rooms(&self) -> usize {
        self.locks.lock().await.len()
    }
}
