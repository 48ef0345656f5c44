//! In-memory score store for tests and single-run demos.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::{PlayerScore, ScoreStore, StoreError};

/// A process-local store backed by a hash map. Nothing survives restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    wins: RwLock<HashMap<String, u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut wins = self.wins.write().expect("score map poisoned");
        *wins.entry(name.to_string()).or_insert(0) += 1;
        Ok(())
    }

    fn score(&self, name: &str) -> Result<u32, StoreError> {
        let wins = self.wins.read().expect("score map poisoned");
        Ok(wins.get(name).copied().unwrap_or(0))
    }

    fn league(&self) -> Result<Vec<PlayerScore>, StoreError> {
        let wins = self.wins.read().expect("score map poisoned");
        let mut league: Vec<PlayerScore> = wins
            .iter()
            .map(|(name, &wins)| PlayerScore {
                name: name.clone(),
                wins,
            })
            .collect();
        league.sort_by(|a, b| b.wins.cmp(&a.wins));
        Ok(league)
    }
}
