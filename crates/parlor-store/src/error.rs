//! Error type for the store layer.

/// Errors a store backend can surface.
///
/// The core treats every variant the same way — log and continue — but
/// the distinction matters for operators reading the logs.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file held data that does not parse as a league.
    #[error("store data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
