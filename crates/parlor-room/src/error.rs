//! Error types for the registry layer.

use parlor_protocol::RoomId;

/// Errors from explicit room creation.
///
/// Everyday room operations (join, leave, move) refuse with a plain value
/// instead of an error — only creation with collision checking has a real
/// failure mode.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A live room already holds this id.
    #[error("room \"{0}\" already exists")]
    RoomExists(RoomId),
}
