//! Game session state machine

use super::GameConfig;
use crate::core::{GameError, GuessResult, Word, evaluate};
use crate::daily::select_daily_word;
use crate::scores::{Score, ScoreStore};
use chrono::{NaiveDate, Utc};
use log::{info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;

/// How the secret word of the current game was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// Derived from the calendar date, shared by every player
    Daily(NaiveDate),
    /// Drawn from a random source
    Random,
    /// Supplied directly by the caller
    Fixed,
}

/// Outcome of recording the final score
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreSave {
    /// Persistence is turned off for this session
    Disabled,
    /// The score was appended to the file at this path
    Saved(PathBuf),
    /// Writing failed; the message explains why
    Failed(String),
}

/// A single game against one secret word
pub struct Game<'a> {
    words: &'a [Word],
    config: GameConfig,
    store: Option<ScoreStore>,
    secret: Option<Word>,
    source: Option<SecretSource>,
    attempts: Vec<GuessResult>,
    won: bool,
    over: bool,
    score_save: Option<ScoreSave>,
}

impl<'a> Game<'a> {
    /// Create a session over a word list
    ///
    /// The game has no secret until one of the `start_*` methods is called.
    #[must_use]
    pub fn new(words: &'a [Word], config: GameConfig) -> Self {
        let store = config.scores_path.clone().map(ScoreStore::new);
        Self {
            words,
            config,
            store,
            secret: None,
            source: None,
            attempts: Vec::new(),
            won: false,
            over: false,
            score_save: None,
        }
    }

    /// Start a game the way the configuration asks for
    ///
    /// Daily games use the word for `date`; other games draw from `rng`.
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the word list is empty.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        date: NaiveDate,
        rng: &mut R,
    ) -> Result<(), GameError> {
        if self.config.daily {
            self.start_daily(date)
        } else {
            self.start_random(rng)
        }
    }

    /// Start a game whose secret is the daily word for `date`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the word list is empty.
    pub fn start_daily(&mut self, date: NaiveDate) -> Result<(), GameError> {
        let secret = select_daily_word(self.words, date)?.clone();
        info!("starting daily game for {date}");
        self.reset(secret, SecretSource::Daily(date));
        Ok(())
    }

    /// Start a game with a secret drawn from `rng`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the word list is empty.
    pub fn start_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let secret = self.words.choose(rng).ok_or(GameError::EmptyWordList)?.clone();
        info!("starting random game");
        self.reset(secret, SecretSource::Random);
        Ok(())
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the secret does not have the
    /// configured word length.
    pub fn start_with_secret(&mut self, secret: Word) -> Result<(), GameError> {
        if secret.len() != self.config.word_length {
            return Err(GameError::LengthMismatch {
                expected: self.config.word_length,
                actual: secret.len(),
            });
        }
        self.reset(secret, SecretSource::Fixed);
        Ok(())
    }

    fn reset(&mut self, secret: Word, source: SecretSource) {
        self.secret = Some(secret);
        self.source = Some(source);
        self.attempts.clear();
        self.won = false;
        self.over = false;
        self.score_save = None;
    }

    /// Evaluate a guess and advance the game
    ///
    /// The input is trimmed and uppercased. When this guess ends the game
    /// (a win, or the last allowed attempt) the score is recorded.
    ///
    /// # Errors
    /// - `GameError::NotStarted` before any `start_*` call
    /// - `GameError::GameOver` once the game has ended
    /// - `GameError::InvalidWord` for input that is not a word
    /// - `GameError::LengthMismatch` for a word of the wrong length
    ///
    /// Rejected guesses do not consume an attempt.
    pub fn check_guess(&mut self, input: &str) -> Result<GuessResult, GameError> {
        let secret = self.secret.as_ref().ok_or(GameError::NotStarted)?;
        if self.over {
            return Err(GameError::GameOver);
        }

        let guess = Word::new(input)?;
        let result = evaluate(secret, &guess)?;
        self.attempts.push(result.clone());

        if result.is_win() {
            self.won = true;
            self.over = true;
        } else if self.attempts.len() >= self.config.max_attempts {
            self.over = true;
        }

        if self.over {
            self.record_score();
        }

        Ok(result)
    }

    fn record_score(&mut self) {
        let (Some(store), Some(secret)) = (&self.store, &self.secret) else {
            self.score_save = Some(ScoreSave::Disabled);
            return;
        };

        let score = Score::new(
            self.config.player.clone(),
            secret.text(),
            u32::try_from(self.attempts.len()).unwrap_or(u32::MAX),
            self.won,
            Utc::now(),
        );

        self.score_save = Some(match store.save(&score) {
            Ok(()) => {
                info!("score saved for player '{}'", self.config.player);
                ScoreSave::Saved(store.path().to_path_buf())
            }
            Err(e) => {
                warn!("could not save score: {e}");
                ScoreSave::Failed(e.to_string())
            }
        });
    }

    /// The secret word, once a game has started
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    #[must_use]
    pub fn source(&self) -> Option<SecretSource> {
        self.source
    }

    /// The date of the daily word, if this is a daily game
    #[must_use]
    pub fn daily_date(&self) -> Option<NaiveDate> {
        match self.source {
            Some(SecretSource::Daily(date)) => Some(date),
            _ => None,
        }
    }

    /// Results of the guesses made so far, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[GuessResult] {
        &self.attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts.len())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.over
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// How the final score was handled, once the game is over
    #[must_use]
    pub fn score_save(&self) -> Option<&ScoreSave> {
        self.score_save.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn words() -> Vec<Word> {
        words_from_slice(&["APPLE", "GRAPE", "PEACH", "LEMON"], 5)
    }

    fn started<'a>(words: &'a [Word], secret: &str, max_attempts: usize) -> Game<'a> {
        let config = GameConfig {
            max_attempts,
            ..GameConfig::without_scores()
        };
        let mut game = Game::new(words, config);
        game.start_with_secret(Word::new(secret).unwrap()).unwrap();
        game
    }

    #[test]
    fn new_game_is_idle() {
        let list = words();
        let game = Game::new(&list, GameConfig::without_scores());
        assert!(game.secret().is_none());
        assert!(game.attempts().is_empty());
        assert!(!game.is_finished());
        assert!(!game.is_won());
        assert_eq!(game.attempts_remaining(), 6);
        assert_eq!(game.word_count(), 4);
    }

    #[test]
    fn guess_before_start_fails() {
        let list = words();
        let mut game = Game::new(&list, GameConfig::without_scores());
        assert_eq!(game.check_guess("APPLE"), Err(GameError::NotStarted));
    }

    #[test]
    fn random_start_picks_from_list() {
        let list = words();
        let mut game = Game::new(&list, GameConfig::without_scores());
        let mut rng = StdRng::seed_from_u64(7);
        game.start_random(&mut rng).unwrap();

        assert!(list.contains(game.secret().unwrap()));
        assert_eq!(game.source(), Some(SecretSource::Random));
        assert_eq!(game.daily_date(), None);
    }

    #[test]
    fn random_start_on_empty_list_fails() {
        let mut game = Game::new(&[], GameConfig::without_scores());
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(game.start_random(&mut rng), Err(GameError::EmptyWordList));
    }

    #[test]
    fn daily_start_uses_daily_word() {
        let list = words();
        let mut game = Game::new(&list, GameConfig::without_scores());
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        game.start_daily(date).unwrap();

        assert_eq!(game.secret().unwrap().text(), "APPLE");
        assert_eq!(game.daily_date(), Some(date));
    }

    #[test]
    fn start_follows_daily_flag() {
        let list = words();
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let daily = GameConfig {
            daily: true,
            ..GameConfig::without_scores()
        };
        let mut game = Game::new(&list, daily);
        game.start(date, &mut rng).unwrap();
        assert_eq!(game.source(), Some(SecretSource::Daily(date)));
        assert_eq!(game.secret().unwrap().text(), "APPLE");

        let mut game = Game::new(&list, GameConfig::without_scores());
        game.start(date, &mut rng).unwrap();
        assert_eq!(game.source(), Some(SecretSource::Random));
    }

    #[test]
    fn daily_start_on_empty_list_fails() {
        let mut game = Game::new(&[], GameConfig::without_scores());
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(game.start_daily(date), Err(GameError::EmptyWordList));
    }

    #[test]
    fn secret_of_wrong_length_rejected() {
        let list = words();
        let mut game = Game::new(&list, GameConfig::without_scores());
        assert_eq!(
            game.start_with_secret(Word::new("KIWI").unwrap()),
            Err(GameError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn winning_guess_ends_game() {
        let list = words();
        let mut game = started(&list, "GRAPE", 6);

        let first = game.check_guess("apple").unwrap();
        assert!(!first.is_win());
        assert!(!game.is_finished());

        let second = game.check_guess(" grape ").unwrap();
        assert!(second.is_win());
        assert!(game.is_finished());
        assert!(game.is_won());
        assert_eq!(game.attempts().len(), 2);
        assert_eq!(game.score_save(), Some(&ScoreSave::Disabled));
    }

    #[test]
    fn running_out_of_attempts_ends_game() {
        let list = words();
        let mut game = started(&list, "GRAPE", 2);

        game.check_guess("APPLE").unwrap();
        assert_eq!(game.attempts_remaining(), 1);
        game.check_guess("LEMON").unwrap();

        assert!(game.is_finished());
        assert!(!game.is_won());
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.check_guess("GRAPE"), Err(GameError::GameOver));
    }

    #[test]
    fn invalid_guesses_do_not_count() {
        let list = words();
        let mut game = started(&list, "GRAPE", 6);

        assert!(matches!(
            game.check_guess("GR4PE"),
            Err(GameError::InvalidWord(_))
        ));
        assert_eq!(
            game.check_guess("GRAPES"),
            Err(GameError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert!(game.attempts().is_empty());
    }

    #[test]
    fn guess_result_reports_duplicates() {
        let list = words();
        let mut game = started(&list, "APPLE", 6);
        let result = game.check_guess("PAPPY").unwrap();
        let verdicts: Vec<_> = result.verdicts().collect();
        assert_eq!(
            verdicts,
            vec![
                LetterVerdict::Present,
                LetterVerdict::Present,
                LetterVerdict::Correct,
                LetterVerdict::Absent,
                LetterVerdict::Absent,
            ]
        );
    }

    #[test]
    fn restart_clears_previous_game() {
        let list = words();
        let mut game = started(&list, "GRAPE", 6);
        game.check_guess("GRAPE").unwrap();
        assert!(game.is_finished());

        game.start_with_secret(Word::new("LEMON").unwrap()).unwrap();
        assert!(!game.is_finished());
        assert!(game.attempts().is_empty());
        assert_eq!(game.score_save(), None);
    }

    #[test]
    fn finished_game_records_one_score() {
        let path = std::env::temp_dir().join("word_guru_session_scores.json");
        let _ = fs::remove_file(&path);

        let list = words();
        let config = GameConfig {
            player: "tester".to_string(),
            scores_path: Some(path.clone()),
            ..GameConfig::default()
        };
        let mut game = Game::new(&list, config);
        game.start_with_secret(Word::new("PEACH").unwrap()).unwrap();
        game.check_guess("APPLE").unwrap();
        game.check_guess("PEACH").unwrap();

        assert_eq!(game.score_save(), Some(&ScoreSave::Saved(path.clone())));

        let scores = ScoreStore::new(&path).load().unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].player, "tester");
        assert_eq!(scores[0].word, "PEACH");
        assert_eq!(scores[0].attempts, 2);
        assert!(scores[0].won);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unwritable_score_file_is_reported() {
        let path = std::env::temp_dir().join("word_guru_session_bad_scores.json");
        fs::write(&path, "{ not a list").unwrap();

        let list = words();
        let config = GameConfig {
            scores_path: Some(path.clone()),
            ..GameConfig::default()
        };
        let mut game = Game::new(&list, config);
        game.start_with_secret(Word::new("PEACH").unwrap()).unwrap();
        let result = game.check_guess("PEACH").unwrap();

        assert!(result.is_win());
        assert!(matches!(game.score_save(), Some(ScoreSave::Failed(_))));

        let _ = fs::remove_file(&path);
    }
}
