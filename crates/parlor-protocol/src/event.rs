//! Outbound events pushed from the core to session sinks.
//!
//! Events are immutable value types: the core fans them out and never
//! waits for delivery. The transport layer decides how they reach the
//! screen (terminal UI, websocket frame, test channel).

use serde::{Deserialize, Serialize};

use crate::{Mark, Role, RoomSummary};

/// A 3×3 board snapshot, row-major, `None` for empty cells.
pub type Board = [Option<Mark>; 9];

/// An asynchronous message delivered to a session's sink.
///
/// `#[serde(tag = "type")]` produces internally tagged JSON, e.g.
/// `{ "type": "Chat", "sender": "ann", "text": "gg" }` — the shape
/// client SDKs expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Snapshot of all rooms, pushed to lobby members whenever occupancy
    /// changes or the cleanup sweep runs. Order is unspecified.
    RoomList { rooms: Vec<RoomSummary> },

    /// A member entered the room (broadcast to everyone in it,
    /// the joiner included).
    MemberJoined { name: String, role: Role },

    /// A member left the room (broadcast to everyone remaining).
    MemberLeft { name: String },

    /// The room told this session which seat it got (unicast to the joiner).
    RoleAssigned { role: Role },

    /// A fresh game snapshot, broadcast after every accepted move and
    /// unicast to late joiners of a started game.
    GameUpdate {
        board: Board,
        current_turn: Mark,
        is_over: bool,
        winner: Option<Mark>,
    },

    /// A chat line relayed to every member of the room.
    Chat { sender: String, text: String },
}
