//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterVerdict};
use crate::scores::Score;
use colored::{ColoredString, Colorize};

/// A single letter tile: the letter padded by spaces on its verdict color
#[must_use]
pub fn letter_tile(letter: u8, verdict: LetterVerdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase() as char);
    match verdict {
        LetterVerdict::Correct => text.black().on_green(),
        LetterVerdict::Present => text.black().on_yellow(),
        LetterVerdict::Absent => text.black().on_white(),
    }
}

/// A full guess rendered as colored tiles
#[must_use]
pub fn guess_tiles(result: &GuessResult) -> String {
    result
        .entries()
        .iter()
        .map(|&(letter, verdict)| letter_tile(letter, verdict).to_string())
        .collect()
}

/// Emoji grid of a game, one row per guess, for sharing
#[must_use]
pub fn share_grid(attempts: &[GuessResult]) -> String {
    attempts
        .iter()
        .map(GuessResult::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Share header like "Word Guru 2024-06-15 3/6", or "X/6" for a loss
#[must_use]
pub fn share_header(label: &str, attempts: usize, won: bool, max_attempts: usize) -> String {
    let used = if won {
        attempts.to_string()
    } else {
        "X".to_string()
    };
    format!("Word Guru {label} {used}/{max_attempts}")
}

/// Header row of the leaderboard table
#[must_use]
pub fn score_table_header() -> String {
    format!(
        "{:<4} {:<15} {:<8} {:<8} {:<5} {:<12}",
        "Rank", "Player", "Word", "Attempts", "Won", "Date"
    )
}

/// One row of the leaderboard table
#[must_use]
pub fn score_table_row(rank: usize, score: &Score) -> String {
    let won = if score.won { "yes" } else { "no" };
    let date = score.date.format("%Y-%m-%d").to_string();
    format!(
        "{:<4} {:<15} {:<8} {:<8} {:<5} {:<12}",
        rank, score.player, score.word, score.attempts, won, date
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};
    use chrono::{TimeZone, Utc};

    fn result(secret: &str, guess: &str) -> GuessResult {
        evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap()).unwrap()
    }

    #[test]
    fn tile_contains_padded_letter() {
        let tile = letter_tile(b'a', LetterVerdict::Correct);
        assert!(tile.to_string().contains(" A "));
    }

    #[test]
    fn tiles_keep_letter_order() {
        let tiles = guess_tiles(&result("CHORE", "HOUSE"));
        let positions: Vec<usize> = [" H ", " O ", " U ", " S ", " E "]
            .iter()
            .map(|t| tiles.find(t).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn share_grid_rows() {
        let attempts = vec![result("CHORE", "HOUSE"), result("CHORE", "CHORE")];
        assert_eq!(share_grid(&attempts), "🟨🟨⬜⬜🟩\n🟩🟩🟩🟩🟩");
        assert_eq!(share_grid(&[]), "");
    }

    #[test]
    fn share_header_win_and_loss() {
        assert_eq!(share_header("2024-06-15", 3, true, 6), "Word Guru 2024-06-15 3/6");
        assert_eq!(share_header("random", 6, false, 6), "Word Guru random X/6");
    }

    #[test]
    fn score_row_layout() {
        let date = Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap();
        let score = Score::new("alice", "APPLE", 3, true, date);
        let row = score_table_row(1, &score);
        assert!(row.starts_with("1    alice           APPLE    3        yes   2024-06-15"));
        assert_eq!(score_table_header().len(), row.len());
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
