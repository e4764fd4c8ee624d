//! High score persistence
//!
//! A single integer in a plain-text file, overwritten entirely on each
//! save. A missing or unreadable file simply counts as zero.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Default high score file, resolved against the working directory
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// The best score achieved so far, backed by a plain-text file
#[derive(Debug, Clone)]
pub struct HighScore {
    best: u32,
    path: PathBuf,
}

impl HighScore {
    /// Load from the default file
    pub fn load() -> Self {
        Self::load_from(HIGH_SCORE_FILE)
    }

    /// Load from the given path; missing or unparsable content counts as 0
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(text) => match text.trim().parse() {
                Ok(score) => score,
                Err(_) => {
                    log::warn!(
                        "Unreadable high score in {}, starting at 0",
                        path.display()
                    );
                    0
                }
            },
            Err(_) => 0,
        };
        Self { best, path }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished run. Saves and returns true when `score` beats
    /// the current best.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = self.save() {
            log::warn!("Failed to save high score: {err}");
        }
        true
    }

    fn save(&self) -> io::Result<()> {
        fs::write(&self.path, self.best.to_string())
    }
}
