//! Word Guru - CLI
//!
//! Guess the secret word in a limited number of attempts, either a random one
//! or the daily word shared by every player.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use word_guru::{
    commands::{DEFAULT_STATS_LIMIT, daily_already_played, run_play, show_stats},
    core::{DEFAULT_WORD_LENGTH, Word},
    daily::time_until_next_daily,
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PLAYER, Game, GameConfig},
    logging,
    output::print_daily_completed,
    scores::{DEFAULT_SCORES_PATH, ScoreStore},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_guru",
    about = "Wordle-style word guessing game with a daily word",
    version,
    author
)]
struct Cli {
    /// Play the daily word instead of a random one
    #[arg(short, long)]
    daily: bool,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long)]
    words: Option<PathBuf>,

    /// Player name used for score tracking
    #[arg(short, long, default_value = DEFAULT_PLAYER)]
    player: String,

    /// Number of guesses allowed
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Length of the secret word
    #[arg(short = 'l', long, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Score file location
    #[arg(long, default_value = DEFAULT_SCORES_PATH)]
    scores_path: PathBuf,

    /// Do not read or write the score file
    #[arg(long)]
    no_scores: bool,

    /// Show the leaderboard instead of playing
    #[arg(long)]
    stats: bool,

    /// Number of leaderboard rows
    #[arg(long, default_value_t = DEFAULT_STATS_LIMIT)]
    limit: usize,

    /// Play the daily word of another date (YYYY-MM-DD)
    #[arg(long, requires = "daily")]
    date: Option<NaiveDate>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            word_length: self.word_length,
            max_attempts: self.max_attempts,
            player: self.player.clone(),
            scores_path: (!self.no_scores).then(|| self.scores_path.clone()),
            daily: self.daily,
        }
    }
}

/// Load the word list from `path`, or the built-in list
fn load_words(path: Option<&Path>, word_length: usize) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path, word_length)
            .with_context(|| format!("failed to load word list from {}", path.display()))?,
        None => words_from_slice(WORDS, word_length),
    };

    if words.is_empty() {
        bail!("the built-in word list has no {word_length}-letter words");
    }

    info!("loaded {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    if cli.max_attempts == 0 {
        bail!("--max-attempts must be at least 1");
    }
    if cli.word_length == 0 {
        bail!("--word-length must be at least 1");
    }

    if cli.stats {
        let store = ScoreStore::new(&cli.scores_path);
        return show_stats(&store, cli.limit, None)
            .with_context(|| format!("failed to read scores from {}", store.path().display()));
    }

    let config = cli.game_config();
    let words = load_words(cli.words.as_deref(), config.word_length)?;

    let now = Utc::now();
    let today = now.date_naive();

    if config.daily && daily_already_played(&config, cli.date, today) {
        print_daily_completed(&config.player, &time_until_next_daily(now));
        return Ok(());
    }

    let mut game = Game::new(&words, config);
    game.start(cli.date.unwrap_or(today), &mut rand::rng())?;
    run_play(&mut game, &mut io::stdin().lock())?;

    Ok(())
}
