//! The coordinator: composes the lobby and the room registry and routes
//! every session command between them.

use std::sync::Arc;

use parlor_game::GameRules;
use parlor_protocol::{Event, Role, RoomId, SessionId};
use parlor_room::{EventSink, RoomRegistry};
use parlor_store::ScoreStore;

use crate::Lobby;

/// Shared coordination state: one per process, shared as
/// `Arc<Coordinator<G>>` across every session task and the sweep.
///
/// Session lifecycle it enforces:
///
/// ```text
/// Disconnected → Lobby ⇄ InRoom(role) → Disconnected
/// ```
///
/// `connect`/`disconnect` come from the transport; `join_room`/
/// `leave_room` are explicit session commands.
pub struct Coordinator<G: GameRules> {
    lobby: Lobby,
    rooms: RoomRegistry<G>,
}

impl<G: GameRules> Coordinator<G> {
    /// A fresh coordinator recording results against `store`.
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self {
            lobby: Lobby::new(),
            rooms: RoomRegistry::new(store),
        }
    }

    /// The lobby, for transport layers that push their own broadcasts.
    pub fn lobby(&self) -> &Lobby {
        &self.lobby
    }

    /// The room registry.
    pub fn rooms(&self) -> &RoomRegistry<G> {
        &self.rooms
    }

    /// Registers a newly connected session in the lobby and shows it the
    /// current room list.
    pub fn connect(&self, session: SessionId, name: &str, sink: EventSink) {
        tracing::info!(%session, name, "session connected");
        sink.send(Event::RoomList {
            rooms: self.rooms.list(),
        });
        self.lobby.insert(session, name.to_string(), sink);
    }

    /// Tears a session down wherever it is.
    ///
    /// A session is only ever in one room, but the removal is defensive
    /// and checks all of them. Lobby members then see the refreshed list
    /// (the departure may have changed a room's occupancy).
    pub fn disconnect(&self, session: SessionId) {
        tracing::info!(%session, "session disconnected");
        self.lobby.remove(session);
        for room in self.rooms.rooms() {
            room.leave(session);
        }
        self.broadcast_room_list();
    }

    /// Moves a lobby session into a room (created on first use) and
    /// returns its seat. `None` if the session is not in the lobby —
    /// unknown sessions are ignored, not errors.
    pub fn join_room(&self, session: SessionId, room_id: impl Into<RoomId>) -> Option<Role> {
        let member = self.lobby.remove(session)?;
        let room = self.rooms.get_or_create(room_id);
        let role = room.join(session, &member.name, member.sink);
        self.broadcast_room_list();
        Some(role)
    }

    /// Returns a session from a room to the lobby.
    ///
    /// No-op (beyond a list refresh) if the session is not a member of
    /// that room or the room does not exist. In particular, a session
    /// whose room was replaced by an explicit [`RoomRegistry::create`] is
    /// unknown to the fresh room and is not restored to the lobby; its
    /// path out is `disconnect`.
    pub fn leave_room(&self, session: SessionId, room_id: &RoomId) {
        if let Some(room) = self.rooms.get(room_id) {
            if let Some(departed) = room.leave(session) {
                self.lobby.insert(session, departed.name, departed.sink);
            }
        }
        // The departed session is back in the lobby by now, so the
        // broadcast reaches it too.
        self.broadcast_room_list();
    }

    /// Routes a move to the session's room. `false` when the room does
    /// not exist or the room refuses the move.
    pub fn handle_move(&self, session: SessionId, room_id: &RoomId, cell: usize) -> bool {
        match self.rooms.get(room_id) {
            Some(room) => room.handle_move(session, cell),
            None => false,
        }
    }

    /// Routes a chat line to the session's room. Empty (after trimming)
    /// text is dropped here; the room resolves the sender's name.
    pub fn chat(&self, session: SessionId, room_id: &RoomId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.rooms.get(room_id) {
            Some(room) => room.chat_from(session, text),
            None => false,
        }
    }

    /// Pushes the current room list to everyone in the lobby.
    pub fn broadcast_room_list(&self) {
        self.lobby.broadcast(Event::RoomList {
            rooms: self.rooms.list(),
        });
    }
}
