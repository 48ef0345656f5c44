//! JSON-file score store.
//!
//! The whole league lives in one JSON array. It is read once at open and
//! kept in memory; every recorded win rewrites the file from scratch.
//! Fine for the league sizes this serves, and trivially inspectable.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{PlayerScore, ScoreStore, StoreError};

/// A score store persisted as a JSON file.
pub struct FileStore {
    path: PathBuf,
    league: Mutex<Vec<PlayerScore>>,
}

impl FileStore {
    /// Opens (or creates) the league file at `path`.
    ///
    /// A missing or empty file is initialised to an empty league.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let league = match fs::read(&path) {
            Ok(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)?,
            Ok(_) => Vec::new(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let store = Self {
            path,
            league: Mutex::new(league),
        };
        store.flush(&store.league.lock().expect("league poisoned"))?;
        Ok(store)
    }

    fn flush(&self, league: &[PlayerScore]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(league)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut league = self.league.lock().expect("league poisoned");
        match league.iter_mut().find(|p| p.name == name) {
            Some(player) => player.wins += 1,
            None => league.push(PlayerScore {
                name: name.to_string(),
                wins: 1,
            }),
        }
        self.flush(&league)
    }

    fn score(&self, name: &str) -> Result<u32, StoreError> {
        let league = self.league.lock().expect("league poisoned");
        Ok(league
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.wins)
            .unwrap_or(0))
    }

    fn league(&self) -> Result<Vec<PlayerScore>, StoreError> {
        let mut league = self.league.lock().expect("league poisoned").clone();
        league.sort_by(|a, b| b.wins.cmp(&a.wins));
        Ok(league)
    }
}
