//! Best-time record kept across runs as a small JSON file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use derive_more::{Display, Error, From};
use wordsearch_game::BestTime;

/// File name used when no path is configured.
pub const DEFAULT_BEST_TIME_FILE: &str = "wordsearch-best-time.json";

#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    #[display("cannot access best time file: {_0}")]
    Io(io::Error),
    #[display("malformed best time file: {_0}")]
    Json(serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestTimeStore {
    path: PathBuf,
}

impl BestTimeStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored record. A missing file means no record yet.
    pub fn load(&self) -> Result<Option<BestTime>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    pub fn save(&self, best: &BestTime) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(best)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
