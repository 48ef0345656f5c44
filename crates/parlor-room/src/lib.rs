//! Room arbitration for Parlor.
//!
//! A [`Room`] owns one game instance and its member roster, and serializes
//! every mutating operation behind a single lock. The [`RoomRegistry`] is
//! the concurrent map of live rooms. Outbound delivery goes through
//! bounded per-session mailboxes ([`EventSink`] / [`Mailbox`]) so a slow
//! client can never stall a broadcast.
//!
//! # Key types
//!
//! - [`Room`] — join/leave/move arbitration and fan-out
//! - [`RoomRegistry`] — create, look up, enumerate, and sweep rooms
//! - [`EventSink`] — fire-and-forget delivery handle, one per session
//! - [`assign_role`] — the seating policy

mod error;
mod mailbox;
mod policy;
mod registry;
mod room;

pub use error::RegistryError;
pub use mailbox::{mailbox, EventSink, Mailbox, DEFAULT_MAILBOX_CAPACITY};
pub use policy::assign_role;
pub use registry::RoomRegistry;
pub use room::{Departed, Room};
