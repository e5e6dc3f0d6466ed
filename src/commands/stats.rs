//! Leaderboard and statistics

use crate::output::print_stats;
use crate::scores::{Score, ScoreError, ScoreStore, ScoreSummary, summarize, top_scores};
use log::info;

/// Default number of leaderboard rows
pub const DEFAULT_STATS_LIMIT: usize = 10;

/// Ranked scores and their summary, optionally for a single player
#[must_use]
pub fn collect_stats<'a>(
    scores: &'a [Score],
    limit: usize,
    player: Option<&str>,
) -> (Vec<&'a Score>, ScoreSummary) {
    let mut top = top_scores(scores, scores.len());
    if let Some(player) = player {
        top.retain(|s| s.player == player);
    }
    top.truncate(limit);
    (top, summarize(scores, player))
}

/// Load the score file and print the leaderboard
///
/// # Errors
///
/// Returns an error if the score file exists but cannot be read or parsed.
pub fn show_stats(
    store: &ScoreStore,
    limit: usize,
    player: Option<&str>,
) -> Result<(), ScoreError> {
    let scores = store.load()?;
    info!(
        "loaded {} scores from {}",
        scores.len(),
        store.path().display()
    );

    let (top, summary) = collect_stats(&scores, limit, player);
    print_stats(&top, &summary);
    Ok(())
}
