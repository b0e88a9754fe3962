//! Single best-score persistence
//!
//! One integer in a small JSON file, read once at startup and rewritten when
//! beaten. Writes are best effort with no retry: on failure the in-memory
//! value stays authoritative for the session and a warning is logged.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk envelope, kept versionable via serde defaults
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct BestScore {
    best: u32,
}

/// The persisted high score store
#[derive(Debug)]
pub struct HighScore {
    best: u32,
    path: Option<PathBuf>,
}

impl HighScore {
    /// Store without a backing file (tests, headless embedding)
    pub fn in_memory() -> Self {
        Self {
            best: 0,
            path: None,
        }
    }

    /// Load the best score from `path`, defaulting to 0 when the file is
    /// missing or unreadable
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<BestScore>(&json) {
                Ok(saved) => {
                    log::info!("loaded high score {} from {}", saved.best, path.display());
                    saved.best
                }
                Err(err) => {
                    log::warn!(
                        "high score file {} is corrupt ({err}), starting at 0",
                        path.display()
                    );
                    0
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, starting at 0", path.display());
                0
            }
        };
        Self {
            best,
            path: Some(path),
        }
    }

    /// Current best across all runs seen by this store
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished run's score, persisting when beaten.
    /// Returns the (possibly updated) best.
    pub fn record(&mut self, score: u32) -> u32 {
        if score > self.best {
            self.best = score;
            self.save();
        }
        self.best
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let json = match serde_json::to_string(&BestScore { best: self.best }) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not encode high score: {err}");
                return;
            }
        };
        match fs::write(path, json) {
            Ok(()) => log::info!("high score {} saved to {}", self.best, path.display()),
            Err(err) => log::warn!(
                "could not write high score to {}: {err}",
                path.display()
            ),
        }
    }
}
