//! The lobby: sessions that are connected but not in any room.

use std::collections::HashMap;
use std::sync::RwLock;

use parlor_protocol::{Event, SessionId};
use parlor_room::EventSink;

/// A session waiting in the lobby.
#[derive(Debug, Clone)]
pub(crate) struct LobbyMember {
    pub(crate) name: String,
    pub(crate) sink: EventSink,
}

/// The set of sessions awaiting a room, behind its own lock.
///
/// A session is in exactly one of {lobby, some room}; the coordinator
/// moves the entry (name and sink together) between the two so there is
/// no window where a connected session is registered nowhere.
#[derive(Debug, Default)]
pub struct Lobby {
    members: RwLock<HashMap<SessionId, LobbyMember>>,
}

impl Lobby {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&self, session: SessionId, name: String, sink: EventSink) {
        let mut members = self.members.write().expect("lobby lock poisoned");
        members.insert(session, LobbyMember { name, sink });
    }

    /// Removes and returns the session's entry, if present.
    pub(crate) fn remove(&self, session: SessionId) -> Option<LobbyMember> {
        let mut members = self.members.write().expect("lobby lock poisoned");
        members.remove(&session)
    }

    /// Pushes one event to every lobby member. Non-blocking per recipient.
    pub fn broadcast(&self, event: Event) {
        let members = self.members.read().expect("lobby lock poisoned");
        for member in members.values() {
            member.sink.send(event.clone());
        }
    }

    /// Number of sessions currently waiting.
    pub fn len(&self) -> usize {
        self.members.read().expect("lobby lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if the session is waiting in the lobby.
    pub fn contains(&self, session: SessionId) -> bool {
        self.members
            .read()
            .expect("lobby lock poisoned")
            .contains_key(&session)
    }
}
