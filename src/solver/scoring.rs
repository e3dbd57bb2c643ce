//! Word scoring and result ordering
//!
//! Standard Boggle scoring: points depend only on word length. Output order
//! is deterministic: longest words first, ties broken alphabetically.

use rustc_hash::FxHashSet;
use std::cmp::Reverse;

/// A found word with its derived length and score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub length: usize,
    pub score: u32,
}

impl WordResult {
    #[must_use]
    pub fn new(word: String) -> Self {
        let length = word.len();
        let score = score_word(&word);
        Self {
            word,
            length,
            score,
        }
    }
}

/// Point value of a word under standard Boggle scoring
///
/// | length | points |
/// |--------|--------|
/// | 3–4    | 1      |
/// | 5      | 2      |
/// | 6      | 3      |
/// | 7      | 5      |
/// | 8+     | 11     |
///
/// Words below the configured minimum length are never returned by the
/// search, so they never reach scoring.
///
/// # Examples
/// ```
/// use boggle_solver::solver::score_word;
///
/// assert_eq!(score_word("cat"), 1);
/// assert_eq!(score_word("silent"), 3);
/// assert_eq!(score_word("waterfall"), 11);
/// ```
#[must_use]
pub fn score_word(word: &str) -> u32 {
    match word.len() {
        0..=4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Rank a found-word set into its final deterministic order
///
/// Primary key descending length, secondary key ascending lexicographic.
/// The input set already holds each distinct word exactly once.
#[must_use]
pub fn rank_words(found: FxHashSet<String>) -> Vec<WordResult> {
    let mut results: Vec<WordResult> = found.into_iter().map(WordResult::new).collect();
    results.sort_by(|a, b| {
        (Reverse(a.length), &a.word).cmp(&(Reverse(b.length), &b.word))
    });
    results
}

/// Sum of scores over a ranked result list
#[must_use]
pub fn total_score(results: &[WordResult]) -> u32 {
    results.iter().map(|r| r.score).sum()
}
