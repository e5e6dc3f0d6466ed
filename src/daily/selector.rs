//! Deterministic date-to-index mapping
//!
//! The ISO date string `YYYY-MM-DD` is hashed with SHA-256 and the first four
//! digest bytes, read big-endian, form the seed. Every client must derive the
//! same seed for the same date.

use crate::core::{GameError, Word};
use chrono::NaiveDate;
use log::debug;
use sha2::{Digest, Sha256};

/// Build a calendar date from its components
///
/// # Errors
/// Returns `GameError::InvalidDate` when the components do not name a real day.
///
/// # Examples
/// ```
/// use word_guru::daily::calendar_date;
///
/// assert!(calendar_date(2024, 2, 29).is_ok());
/// assert!(calendar_date(2023, 2, 29).is_err());
/// ```
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, GameError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(GameError::InvalidDate { year, month, day })
}

/// Derive the daily seed for a date
#[must_use]
pub fn daily_seed(date: NaiveDate) -> u32 {
    let key = date.format("%Y-%m-%d").to_string();
    let digest = Sha256::digest(key.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Pick the daily index into a word list of `list_len` entries
///
/// # Errors
/// Returns `GameError::EmptyWordList` when `list_len` is zero.
///
/// # Examples
/// ```
/// use word_guru::daily::{calendar_date, select_daily_index};
///
/// let date = calendar_date(2024, 1, 15).unwrap();
/// assert_eq!(select_daily_index(10, date).unwrap(), 8);
/// ```
pub fn select_daily_index(list_len: usize, date: NaiveDate) -> Result<usize, GameError> {
    if list_len == 0 {
        return Err(GameError::EmptyWordList);
    }

    let seed = daily_seed(date);
    let index = (u64::from(seed) % list_len as u64) as usize;
    debug!("daily seed for {date} is {seed:#010x}, index {index} of {list_len}");

    Ok(index)
}

/// Pick the daily word from a word list
///
/// # Errors
/// Returns `GameError::EmptyWordList` when `words` is empty.
pub fn select_daily_word(words: &[Word], date: NaiveDate) -> Result<&Word, GameError> {
    let index = select_daily_index(words.len(), date)?;
    Ok(&words[index])
}
