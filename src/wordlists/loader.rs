//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use crate::core::Word;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no valid words found in {}", path.display())]
    Empty { path: PathBuf },
}

/// Parse word list text into validated words
///
/// Blank lines and lines starting with `#` are skipped. Entries are trimmed
/// and uppercased; entries that are not `word_length` letters are dropped
/// with a warning. Duplicates keep their first occurrence.
///
/// # Examples
/// ```
/// use word_guru::wordlists::loader::parse_words;
///
/// let words = parse_words("# fruit\napple\n\nGRAPE\napple\n", 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["APPLE", "GRAPE"]);
/// ```
#[must_use]
pub fn parse_words(content: &str, word_length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match Word::with_length(trimmed, word_length) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    words.push(word);
                } else {
                    debug!("skipping duplicate word {word} on line {}", line_no + 1);
                }
            }
            Err(e) => warn!("skipping '{trimmed}' on line {}: {e}", line_no + 1),
        }
    }

    words
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, and
/// `WordListError::Empty` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use word_guru::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content, word_length);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use word_guru::wordlists::loader::words_from_slice;
/// use word_guru::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, word_length).ok())
        .collect()
}
