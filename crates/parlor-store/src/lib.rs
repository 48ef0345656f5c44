//! Win-count persistence for Parlor.
//!
//! The room layer records a win when a game ends decisively; the lobby UI
//! may show a league table. Both go through [`ScoreStore`]. Failures here
//! are never fatal to gameplay — callers log and move on.
//!
//! Two implementations ship with the workspace:
//!
//! - [`MemoryStore`] — process-local, used in tests and demos
//! - [`FileStore`] — a JSON file holding the whole league, rewritten on
//!   every recorded win

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    /// The player's user-visible name.
    pub name: String,
    /// Total recorded wins.
    pub wins: u32,
}

/// The persistence capability the core depends on.
///
/// Object-safe so rooms can hold an `Arc<dyn ScoreStore>` without caring
/// which backend is behind it.
pub trait ScoreStore: Send + Sync + 'static {
    /// Increments the win count for `name`, creating the entry if new.
    fn record_win(&self, name: &str) -> Result<(), StoreError>;

    /// The recorded win count for `name`, zero if unknown.
    fn score(&self, name: &str) -> Result<u32, StoreError>;

    /// The full league, sorted by wins descending.
    fn league(&self) -> Result<Vec<PlayerScore>, StoreError>;
}
