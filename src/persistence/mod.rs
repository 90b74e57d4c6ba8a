//! Best score persistence
//!
//! Stores hold a single integer. A missing or malformed value reads as 0 and
//! never blocks startup; write failures are logged and dropped.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Key used by every backend
pub const BEST_SCORE_KEY: &str = "aim_best_score";

/// Failure inside a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("best score storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored best score is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("storage unavailable")]
    Unavailable,
}

/// Persistent best score
pub trait BestScoreStore {
    /// Stored best, 0 when missing or unreadable
    fn get(&self) -> u64;
    fn set(&mut self, score: u64);
}

/// Parse a stored value. Accepts a bare number (`"1234"`), as written by
/// every backend here.
pub fn parse_best(raw: &str) -> Result<u64, StoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    Ok(serde_json::from_str::<u64>(trimmed)?)
}

/// In-memory store (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u64,
}

impl MemoryStore {
    pub fn new(best: u64) -> Self {
        Self { best }
    }
}

impl BestScoreStore for MemoryStore {
    fn get(&self) -> u64 {
        self.best
    }

    fn set(&mut self, score: u64) {
        self.best = score;
    }
}

/// Best score kept in a small file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/aim_best_score.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{}.json", BEST_SCORE_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<u64, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => parse_best(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    pub fn write(&self, score: u64) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_string(&score)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl BestScoreStore for FileStore {
    fn get(&self) -> u64 {
        self.read().unwrap_or_else(|e| {
            log::warn!("Ignoring best score at {}: {}", self.path.display(), e);
            0
        })
    }

    fn set(&mut self, score: u64) {
        match self.write(score) {
            Ok(()) => log::info!("Best score {} saved to {}", score, self.path.display()),
            Err(e) => log::warn!("Could not save best score: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use super::{BEST_SCORE_KEY, BestScoreStore, StoreError, parse_best};

    /// Best score in the browser's LocalStorage
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        fn storage() -> Result<web_sys::Storage, StoreError> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
                .ok_or(StoreError::Unavailable)
        }

        pub fn read(&self) -> Result<u64, StoreError> {
            let storage = Self::storage()?;
            match storage.get_item(BEST_SCORE_KEY) {
                Ok(Some(raw)) => parse_best(&raw),
                Ok(None) => Ok(0),
                Err(_) => Err(StoreError::Unavailable),
            }
        }
    }

    impl BestScoreStore for LocalStorageStore {
        fn get(&self) -> u64 {
            self.read().unwrap_or_else(|e| {
                log::warn!("Ignoring stored best score: {}", e);
                0
            })
        }

        fn set(&mut self, score: u64) {
            match Self::storage() {
                Ok(storage) => {
                    let _ = storage.set_item(BEST_SCORE_KEY, &score.to_string());
                    log::info!("Best score {} saved", score);
                }
                Err(e) => log::warn!("Could not save best score: {}", e),
            }
        }
    }
}
