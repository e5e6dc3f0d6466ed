//! Game sessions
//!
//! A session owns the secret word and the guesses made against it, decides
//! when the game ends, and records the final score.

mod config;
mod session;

pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PLAYER, GameConfig};
pub use session::{Game, ScoreSave, SecretSource};
