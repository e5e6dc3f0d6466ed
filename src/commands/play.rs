//! Interactive play loop
//!
//! Reads guesses line by line until the game ends, the player quits, or the
//! input runs out.

use crate::core::GameError;
use crate::daily::time_until_next_daily;
use crate::game::{Game, GameConfig};
use crate::output::{print_banner, print_guess, print_next_daily, print_outcome, print_score_save};
use crate::scores::ScoreStore;
use chrono::{NaiveDate, Utc};
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won,
    Lost,
    /// The player typed `quit` or the input ended before the game did
    Abandoned,
}

/// Play a started game, reading one guess per line from `input`
///
/// Invalid guesses are reported and re-prompted without using an attempt.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails, or if the game
/// was never started.
pub fn run_play<R: BufRead>(game: &mut Game<'_>, input: &mut R) -> io::Result<PlayOutcome> {
    if game.secret().is_none() {
        return Err(io::Error::other(GameError::NotStarted));
    }

    print_banner(game);

    let mut line = String::new();
    while !game.is_finished() {
        let turn = game.attempts().len() + 1;
        print!("Guess {turn}/{}: ", game.config().max_attempts);
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            debug!("input closed after {} guesses", turn - 1);
            return Ok(abandon(game));
        }

        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("exit") {
            return Ok(abandon(game));
        }

        match game.check_guess(entry) {
            Ok(result) => print_guess(&result),
            Err(e) => println!("{}", format!("❌ {e}").red()),
        }
    }

    print_outcome(game);
    if let Some(save) = game.score_save() {
        print_score_save(save);
    }
    if game.daily_date().is_some() {
        print_next_daily(&time_until_next_daily(Utc::now()));
    }

    Ok(if game.is_won() {
        PlayOutcome::Won
    } else {
        PlayOutcome::Lost
    })
}

/// Whether the player already finished today's daily word
///
/// Only today's word is guarded. Replaying the word of another date
/// (`requested`) is always allowed, and so is playing with scores disabled.
#[must_use]
pub fn daily_already_played(
    config: &GameConfig,
    requested: Option<NaiveDate>,
    today: NaiveDate,
) -> bool {
    if requested.is_some_and(|date| date != today) {
        return false;
    }
    config
        .scores_path
        .as_ref()
        .is_some_and(|path| ScoreStore::new(path).is_daily_completed(&config.player, today))
}

fn abandon(game: &Game<'_>) -> PlayOutcome {
    let secret = game.secret().map_or("?", |w| w.text());
    println!("👋 Goodbye! The word was '{secret}'.");
    PlayOutcome::Abandoned
}
