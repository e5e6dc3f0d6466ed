//! Command implementations

pub mod play;
pub mod stats;

pub use play::{PlayOutcome, daily_already_played, run_play};
pub use stats::{DEFAULT_STATS_LIMIT, collect_stats, show_stats};
