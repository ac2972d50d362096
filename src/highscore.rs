//! High-score persistence: a single decimal integer in a text file.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

/// Overrides the default score file location.
pub const SCORE_FILE_ENV: &str = "INVADERS_SCORE_FILE";

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high score file could not be accessed")]
    Io(#[from] io::Error),
    #[error("high score file does not hold a number")]
    Parse(#[from] ParseIntError),
}

pub fn high_score_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SCORE_FILE_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".space_invaders_score")
}

/// Stored high score.  A missing or empty file counts as 0.
pub fn load_high_score(path: &Path) -> Result<u32, HighScoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    Ok(trimmed.parse()?)
}

pub fn save_high_score(path: &Path, score: u32) -> Result<(), HighScoreError> {
    fs::write(path, score.to_string())?;
    debug!("high score {} written to {}", score, path.display());
    Ok(())
}

/// Store `score` if it beats the stored value; returns the resulting high
/// score.
pub fn record_high_score(path: &Path, score: u32) -> Result<u32, HighScoreError> {
    let stored = match load_high_score(path) {
        Ok(stored) => stored,
        Err(HighScoreError::Parse(e)) => {
            warn!("discarding corrupt high score in {}: {}", path.display(), e);
            0
        }
        Err(e) => return Err(e),
    };
    let high_score = stored.max(score);
    save_high_score(path, high_score)?;
    Ok(high_score)
}
