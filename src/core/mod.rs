//! Core domain types for the game
//!
//! This module holds the word type, the guess evaluator and the error taxonomy.
//! Everything here is pure: no I/O, no clock, no shared state.

mod error;
mod feedback;
mod word;

pub use error::GameError;
pub use feedback::{GuessResult, LetterVerdict, evaluate};
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
