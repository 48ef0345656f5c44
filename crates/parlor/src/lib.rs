//! Parlor: lobby and room coordination for small turn-based game servers.
//!
//! Many concurrently connected sessions discover, create, and join
//! two-player rooms (with any number of spectators), play under
//! server-enforced turn rules, and receive live state pushes, while a
//! background sweep reclaims abandoned rooms.
//!
//! The transport (how sessions connect), the rendering of events, and
//! the game rules themselves all live behind narrow seams: a transport
//! drains one [`Mailbox`](parlor_room::Mailbox) per session, and any
//! [`GameRules`](parlor_game::GameRules) engine plugs into the rooms.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parlor::prelude::*;
//!
//! let store = Arc::new(MemoryStore::new());
//! let coordinator: Coordinator<TicTacToe> = Coordinator::new(store);
//!
//! let (sink, _mail) = mailbox(DEFAULT_MAILBOX_CAPACITY);
//! coordinator.connect(SessionId(1), "ann", sink);
//! let role = coordinator.join_room(SessionId(1), "den").unwrap();
//! assert_eq!(role, Role::PlayerX);
//! ```

mod coordinator;
mod lobby;
mod sweep;

pub use coordinator::Coordinator;
pub use lobby::Lobby;
pub use sweep::{spawn_sweep, SweepHandle};

/// One-stop imports for server binaries and tests.
pub mod prelude {
    pub use crate::{spawn_sweep, Coordinator, Lobby, SweepHandle};
    pub use parlor_game::{GameRules, TicTacToe};
    pub use parlor_protocol::{
        Board, Event, Mark, Role, RoomId, RoomStatus, RoomSummary, SessionId,
    };
    pub use parlor_room::{
        mailbox, EventSink, Mailbox, RoomRegistry, DEFAULT_MAILBOX_CAPACITY,
    };
    pub use parlor_store::{FileStore, MemoryStore, PlayerScore, ScoreStore};
}
