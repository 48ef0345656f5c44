//! Shared vocabulary for Parlor: who is who, and what the core pushes out.
//!
//! # Key types
//!
//! - [`SessionId`] / [`RoomId`] — identity newtypes
//! - [`Mark`] / [`Role`] — board marks and room seats
//! - [`RoomSummary`] / [`RoomStatus`] — listing rows
//! - [`Event`] — every outbound payload the core can emit

mod event;
mod types;

pub use event::{Board, Event};
pub use types::{Mark, Role, RoomId, RoomStatus, RoomSummary, SessionId};
