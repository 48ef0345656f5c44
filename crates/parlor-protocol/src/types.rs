//! Identity and role types shared by every Parlor layer.
//!
//! These are the values that cross the boundary between the coordination
//! core and its collaborators (transport, UI, persistence), so they all
//! serialize cleanly with serde.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a connected session.
///
/// Newtype over `u64` so a session id can't be confused with any other
/// numeric value. Assigned by the transport layer, one per connection;
/// a reconnecting user gets a fresh id.
///
/// `#[serde(transparent)]` serializes `SessionId(42)` as plain `42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

/// A room identifier: a caller-chosen name, unique within the registry.
///
/// Unlike session ids these are human-visible ("kitchen-table",
/// "rematch-42"), so the inner type is a `String` rather than a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ---------------------------------------------------------------------------
// Marks and roles
// ---------------------------------------------------------------------------

/// A competitor's mark on the board. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A session's standing within a room.
///
/// Exactly one member may hold each player role at a time; any number may
/// spectate. Roles are seats, not fixed slots — when a player leaves, the
/// seat opens and the next joiner may claim it (see the role policy in
/// `parlor-room`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    PlayerX,
    PlayerO,
    Spectator,
}

impl Role {
    /// The board mark this role plays with. Spectators have none.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Role::PlayerX => Some(Mark::X),
            Role::PlayerO => Some(Mark::O),
            Role::Spectator => None,
        }
    }

    /// Returns `true` for either competitive seat.
    pub fn is_player(self) -> bool {
        self.mark().is_some()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::PlayerX => write!(f, "X"),
            Role::PlayerO => write!(f, "O"),
            Role::Spectator => write!(f, "Spectator"),
        }
    }
}

// ---------------------------------------------------------------------------
// Room summaries
// ---------------------------------------------------------------------------

/// Coarse lifecycle status of a room, derived from its game and membership.
///
/// `waiting` — second player hasn't arrived yet; `playing` — both seats
/// have been filled at least once; `finished` — the game reported a
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Waiting,
    Playing,
    Finished,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Waiting => write!(f, "waiting"),
            RoomStatus::Playing => write!(f, "playing"),
            RoomStatus::Finished => write!(f, "finished"),
        }
    }
}

/// One row of a room listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    /// The room's id.
    pub id: RoomId,
    /// Number of members currently in the room (players + spectators).
    pub member_count: usize,
    /// Current lifecycle status.
    pub status: RoomStatus,
}
