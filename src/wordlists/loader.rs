//! Word list loading utilities
//!
//! Produces the deduplicated, normalized word collection the trie is built
//! from: lowercase ASCII-alphabetic words of at least the minimum length.
//! Everything else is filtered out here, before insertion.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Is this a word the dictionary accepts?
fn valid_word(word: &str, min_len: usize) -> bool {
    word.len() >= min_len && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Load dictionary words from a file, one word per line
///
/// Lines are trimmed and lowercased; blank lines, words shorter than
/// `min_len`, and words with non-letter characters are skipped. Duplicates
/// collapse to one entry.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 3).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, min_len: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words: FxHashSet<String> = content
        .lines()
        .filter_map(|line| {
            let word = line.trim().to_lowercase();
            valid_word(&word, min_len).then_some(word)
        })
        .collect();

    Ok(words.into_iter().collect())
}

/// Filter an embedded string slice down to valid dictionary words
///
/// # Examples
/// ```
/// use boggle_solver::wordlists::WORDS;
/// use boggle_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS, 3);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], min_len: usize) -> Vec<String> {
    slice
        .iter()
        .filter(|word| valid_word(word, min_len))
        .map(ToString::to_string)
        .collect()
}
