//! Session configuration

use crate::core::DEFAULT_WORD_LENGTH;
use crate::scores::DEFAULT_SCORES_PATH;
use std::path::PathBuf;

/// Default number of guesses per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Default player name for score tracking
pub const DEFAULT_PLAYER: &str = "anonymous";

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
    pub player: String,
    /// Where finished games are recorded; `None` disables persistence
    pub scores_path: Option<PathBuf>,
    /// Play the daily word instead of a random one
    pub daily: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            player: DEFAULT_PLAYER.to_string(),
            scores_path: Some(PathBuf::from(DEFAULT_SCORES_PATH)),
            daily: false,
        }
    }
}

impl GameConfig {
    /// Default configuration without score persistence
    #[must_use]
    pub fn without_scores() -> Self {
        Self {
            scores_path: None,
            ..Self::default()
        }
    }
}
