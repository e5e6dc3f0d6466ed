//! Word Guru
//!
//! A Wordle-style word guessing game with a deterministic daily word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guru::core::{LetterVerdict, Word, evaluate};
//!
//! let secret = Word::new("chore").unwrap();
//! let guess = Word::new("house").unwrap();
//!
//! let result = evaluate(&secret, &guess).unwrap();
//! assert_eq!(result.to_emoji(), "🟨🟨⬜⬜🟩");
//! assert_eq!(result.count(LetterVerdict::Correct), 1);
//! ```

// Core domain types
pub mod core;

// Daily word selection
pub mod daily;

// Word lists
pub mod wordlists;

// Game sessions
pub mod game;

// Score persistence
pub mod scores;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
