//! Terminal output formatting
//!
//! Display utilities for the game board, results and scores.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_daily_completed, print_guess, print_next_daily, print_outcome,
    print_score_save, print_stats,
};
