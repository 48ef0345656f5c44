//! The concurrent map of live rooms.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use parlor_game::GameRules;
use parlor_protocol::{RoomId, RoomSummary};
use parlor_store::ScoreStore;

use crate::{RegistryError, Room};

/// Creates, tracks, and sweeps rooms.
///
/// The map lock is independent of any room's own lock: callers clone the
/// `Arc<Room>` out and release the map before touching the room, so a move
/// in flight never blocks registry traffic. The sweep is the one exception
/// — it holds the map exclusively while it checks member counts, which is
/// safe because rooms never take the registry lock.
pub struct RoomRegistry<G: GameRules> {
    rooms: RwLock<HashMap<RoomId, Arc<Room<G>>>>,
    store: Arc<dyn ScoreStore>,
}

impl<G: GameRules> RoomRegistry<G> {
    /// An empty registry recording results against `store`.
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            store,
        }
    }

    /// Installs a fresh room under `id`, replacing any live room with the
    /// same id. The replaced room keeps serving members that still hold a
    /// reference to it, but id lookups resolve to the fresh room, so those
    /// members are unreachable through the registry until they disconnect;
    /// their mailboxes end once the last handle to the old room drops.
    ///
    /// Use [`create_if_absent`](Self::create_if_absent) when a collision
    /// should be rejected instead of reset, or
    /// [`get_or_create`](Self::get_or_create) for ordinary join flows.
    pub fn create(&self, id: impl Into<RoomId>) -> Arc<Room<G>> {
        let id = id.into();
        let room = Arc::new(Room::new(id.clone(), Arc::clone(&self.store)));
        let mut rooms = self.rooms.write().expect("registry lock poisoned");
        if rooms.insert(id.clone(), Arc::clone(&room)).is_some() {
            tracing::info!(room = %id, "existing room replaced by explicit create");
        } else {
            tracing::info!(room = %id, "room created");
        }
        room
    }

    /// Installs a fresh room under `id`, refusing a collision.
    pub fn create_if_absent(
        &self,
        id: impl Into<RoomId>,
    ) -> Result<Arc<Room<G>>, RegistryError> {
        let id = id.into();
        let mut rooms = self.rooms.write().expect("registry lock poisoned");
        if rooms.contains_key(&id) {
            return Err(RegistryError::RoomExists(id));
        }
        let room = Arc::new(Room::new(id.clone(), Arc::clone(&self.store)));
        rooms.insert(id.clone(), Arc::clone(&room));
        tracing::info!(room = %id, "room created");
        Ok(room)
    }

    /// Looks up a live room.
    pub fn get(&self, id: &RoomId) -> Option<Arc<Room<G>>> {
        self.rooms
            .read()
            .expect("registry lock poisoned")
            .get(id)
            .cloned()
    }

    /// Returns the room for `id`, creating and registering it if needed.
    pub fn get_or_create(&self, id: impl Into<RoomId>) -> Arc<Room<G>> {
        let id = id.into();
        let mut rooms = self.rooms.write().expect("registry lock poisoned");
        if let Some(room) = rooms.get(&id) {
            return Arc::clone(room);
        }
        let room = Arc::new(Room::new(id.clone(), Arc::clone(&self.store)));
        rooms.insert(id.clone(), Arc::clone(&room));
        tracing::info!(room = %id, "room created");
        room
    }

    /// A snapshot of every room's listing row. Order is unspecified.
    pub fn list(&self) -> Vec<RoomSummary> {
        // Clone the handles out first so summaries are taken without the
        // registry lock held.
        let rooms = self.rooms();
        rooms.iter().map(|room| room.summary()).collect()
    }

    /// Cloned handles to every live room.
    pub fn rooms(&self) -> Vec<Arc<Room<G>>> {
        self.rooms
            .read()
            .expect("registry lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    /// Number of live rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.read().expect("registry lock poisoned").len()
    }

    /// Evicts every room that is empty at this instant; returns how many
    /// were removed. A room that empties right after the sweep survives
    /// until the next one — eviction is eventually consistent by design.
    pub fn cleanup_empty(&self) -> usize {
        let mut rooms = self.rooms.write().expect("registry lock poisoned");
        let before = rooms.len();
        rooms.retain(|id, room| {
            let keep = room.member_count() > 0;
            if !keep {
                tracing::info!(room = %id, "empty room evicted");
            }
            keep
        });
        before - rooms.len()
    }
}
