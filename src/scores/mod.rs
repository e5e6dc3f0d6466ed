//! Score persistence
//!
//! Finished games are appended to a JSON file holding an array of scores.

mod ranking;
mod store;

pub use ranking::{ScoreSummary, summarize, top_scores};
pub use store::{ScoreError, ScoreStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default location of the score file, relative to the working directory
pub const DEFAULT_SCORES_PATH: &str = "scores.json";

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Player name or alias
    pub player: String,
    /// The secret word of the game
    pub word: String,
    /// Number of guesses used
    pub attempts: u32,
    /// Whether the player found the word
    pub won: bool,
    /// When the game finished, serialized as RFC 3339 UTC
    pub date: DateTime<Utc>,
}

impl Score {
    #[must_use]
    pub fn new(
        player: impl Into<String>,
        word: impl Into<String>,
        attempts: u32,
        won: bool,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            player: player.into(),
            word: word.into(),
            attempts,
            won,
            date,
        }
    }
}
