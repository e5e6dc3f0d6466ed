//! Leaderboard ordering

use super::Score;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Aggregate statistics over a set of scores
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    pub games: usize,
    pub wins: usize,
    /// Winning games keyed by the number of attempts they took
    pub distribution: BTreeMap<u32, usize>,
}

impl ScoreSummary {
    /// Share of games won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 * 100.0 / self.games as f64
        }
    }
}

/// Summarize scores, optionally restricted to one player
#[must_use]
pub fn summarize(scores: &[Score], player: Option<&str>) -> ScoreSummary {
    let mut summary = ScoreSummary::default();
    for score in scores
        .iter()
        .filter(|s| player.is_none_or(|p| s.player == p))
    {
        summary.games += 1;
        if score.won {
            summary.wins += 1;
            *summary.distribution.entry(score.attempts).or_insert(0) += 1;
        }
    }
    summary
}

/// Best scores first, at most `limit` of them
///
/// Ordering: won games first, then fewer attempts, then the most recent.
#[must_use]
pub fn top_scores(scores: &[Score], limit: usize) -> Vec<&Score> {
    let mut ranked: Vec<&Score> = scores.iter().collect();
    ranked.sort_by_key(|s| (!s.won, s.attempts, Reverse(s.date)));
    ranked.truncate(limit);
    ranked
}
