//! High-score persistence
//!
//! A single non-negative integer. Loading substitutes 0 on any failure and
//! never aborts a round; saving is best-effort and failures are only
//! logged.

use std::fs;
use std::path::PathBuf;

/// Storage for the single best-score value
pub trait HighScoreStore {
    /// The stored value, or 0 when absent or unreadable
    fn load(&mut self) -> u32;
    /// Best-effort write; failures are logged, never surfaced
    fn save(&mut self, value: u32);
}

/// File-backed store. The payload is a bare JSON integer, so a plain-text
/// score file remains readable.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str(text.trim()) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!(
                        "corrupt high score in {} ({}), using 0",
                        self.path.display(),
                        err
                    );
                    0
                }
            },
            // No prior value
            Err(_) => 0,
        }
    }

    fn save(&mut self, value: u32) {
        if let Ok(json) = serde_json::to_string(&value) {
            if let Err(err) = fs::write(&self.path, json) {
                log::warn!("failed to save high score to {}: {}", self.path.display(), err);
            }
        }
    }
}

/// In-memory store for tests and demos
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<u32>,
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, value: u32) {
        self.value = Some(value);
    }
}
