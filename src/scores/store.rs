//! JSON score file

use super::Score;
use chrono::NaiveDate;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing the score file
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("could not access score file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("score file {} is not a valid list of scores", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A score file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored score
    ///
    /// A missing or blank file reads as an empty list.
    ///
    /// # Errors
    /// Returns `ScoreError::Io` if the file exists but cannot be read, and
    /// `ScoreError::Json` if it is not a JSON array of scores.
    pub fn load(&self) -> Result<Vec<Score>, ScoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ScoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| ScoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Append a score, creating the file and its parent directories as needed
    ///
    /// # Errors
    /// Returns an error if the existing file cannot be parsed or the new
    /// contents cannot be written.
    pub fn save(&self, score: &Score) -> Result<(), ScoreError> {
        let mut scores = self.load()?;
        scores.push(score.clone());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let json = serde_json::to_string_pretty(&scores).map_err(|source| ScoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;

        debug!(
            "saved score for {} ({} scores in {})",
            score.player,
            scores.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Check whether `player` already finished a game on `today`
    ///
    /// An unreadable score file counts as "not completed" so a broken file
    /// never locks a player out of the daily word.
    #[must_use]
    pub fn is_daily_completed(&self, player: &str, today: NaiveDate) -> bool {
        match self.load() {
            Ok(scores) => scores
                .iter()
                .rev()
                .any(|s| s.player == player && s.date.date_naive() == today),
            Err(e) => {
                warn!("treating daily word as not completed: {e}");
                false
            }
        }
    }

    fn io_error(&self, source: io::Error) -> ScoreError {
        ScoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
