//! Guess evaluation and per-letter feedback
//!
//! Each guess position receives one of three verdicts:
//! - Correct: the letter sits at this position in the secret
//! - Present: the letter occurs elsewhere in the secret, with an unmatched
//!   occurrence left over
//! - Absent: every occurrence of the letter is already accounted for (or
//!   there is none)

use super::{GameError, Word};
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    /// Letter matches the secret at the same position
    Correct,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter has no unmatched occurrence in the secret
    Absent,
}

impl LetterVerdict {
    /// Emoji tile used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Compact marker used in plain-text summaries
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Correct => '✓',
            Self::Present => '~',
            Self::Absent => '✗',
        }
    }

    /// Lowercase name, matching the labels shown to players
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for LetterVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The evaluated feedback for one guess
///
/// Holds one `(letter, verdict)` pair per guess position, in guess order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    entries: Vec<(u8, LetterVerdict)>,
}

impl GuessResult {
    /// The `(letter, verdict)` pairs in guess order
    #[must_use]
    pub fn entries(&self) -> &[(u8, LetterVerdict)] {
        &self.entries
    }

    /// Iterate over the verdicts alone
    pub fn verdicts(&self) -> impl Iterator<Item = LetterVerdict> + '_ {
        self.entries.iter().map(|&(_, verdict)| verdict)
    }

    /// The guessed word, reassembled from the entries
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.entries.iter().map(|&(letter, _)| letter as char).collect()
    }

    /// Number of evaluated positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a result with no positions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every verdict is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.verdicts().all(|v| v == LetterVerdict::Correct)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.verdicts().filter(|&v| v == verdict).count()
    }

    /// Convert the result to an emoji row such as "🟨🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts().map(LetterVerdict::emoji).collect()
    }

    /// Letters followed by their marker, e.g. "H~O~U✗S✗E✓"
    #[must_use]
    pub fn to_markers(&self) -> String {
        let mut out = String::with_capacity(self.entries.len() * 4);
        for &(letter, verdict) in &self.entries {
            out.push(letter as char);
            out.push(verdict.marker());
        }
        out
    }
}

/// Evaluate `guess` against `secret`
///
/// This implements the standard feedback rules, including proper handling of
/// duplicate letters.
///
/// # Algorithm
/// 1. First pass: mark exact matches as Correct and remove them from the
///    remaining pool (initialized from the secret's letter counts)
/// 2. Second pass: for every other position, mark Present while the pool
///    still holds that letter, Absent otherwise
///
/// # Errors
/// Returns `GameError::LengthMismatch` when the words differ in length.
///
/// # Examples
/// ```
/// use word_guru::core::{Word, evaluate};
///
/// let secret = Word::new("chore").unwrap();
/// let guess = Word::new("house").unwrap();
/// let result = evaluate(&secret, &guess).unwrap();
///
/// assert_eq!(result.to_emoji(), "🟨🟨⬜⬜🟩");
/// assert!(!result.is_win());
/// ```
pub fn evaluate(secret: &Word, guess: &Word) -> Result<GuessResult, GameError> {
    if secret.len() != guess.len() {
        return Err(GameError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut verdicts = vec![LetterVerdict::Absent; guess.len()];
    let mut remaining = secret.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            verdicts[i] = LetterVerdict::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: right letter, wrong position
    for (i, &g) in guess.letters().iter().enumerate() {
        if verdicts[i] == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            verdicts[i] = LetterVerdict::Present;
            *count -= 1;
        }
    }

    Ok(GuessResult {
        entries: guess.letters().iter().copied().zip(verdicts).collect(),
    })
}
