//! Errors produced by the game core and session

use super::WordError;
use thiserror::Error;

/// Errors that the evaluator, daily selector and game session can report
///
/// None of these are retried inside the crate. Recovery (re-prompting the
/// player, picking another list) belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess and the secret have different lengths.
    #[error("guess must be {expected} letters long, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A selection was attempted on a word list with no entries.
    #[error("word list cannot be empty")]
    EmptyWordList,

    /// The calendar date components do not form a real date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The guess text is not a valid word.
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),

    /// A guess was submitted before a secret word was chosen.
    #[error("game not started")]
    NotStarted,

    /// A guess was submitted after the game already ended.
    #[error("game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message() {
        let err = GameError::LengthMismatch {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "guess must be 5 letters long, got 3");
    }

    #[test]
    fn invalid_date_message_is_zero_padded() {
        let err = GameError::InvalidDate {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid calendar date 2023-02-30");
    }

    #[test]
    fn word_error_converts() {
        let err: GameError = WordError::InvalidCharacters.into();
        assert!(matches!(err, GameError::InvalidWord(WordError::InvalidCharacters)));
    }
}
