//! Board solving command
//!
//! Normalizes raw board text, runs the search, and ranks the result.

use crate::core::Board;
use crate::solver::{Trie, rank_words, solve, total_score};
use crate::solver::scoring::WordResult;
use std::time::{Duration, Instant};

/// Configuration for solving a board
pub struct SolveConfig {
    pub raw_board: String,
    pub rows: usize,
    pub cols: usize,
    pub min_word_len: usize,
}

impl SolveConfig {
    /// Default configuration: 4x4 board, minimum word length 3
    #[must_use]
    pub const fn new(raw_board: String) -> Self {
        Self {
            raw_board,
            rows: 4,
            cols: 4,
            min_word_len: 3,
        }
    }
}

/// Result of solving one board
pub struct BoardReport {
    pub board: Board,
    pub words: Vec<WordResult>,
    pub total_score: u32,
    pub dictionary_size: usize,
    pub duration: Duration,
}

/// Strip whitespace and commas so row-per-line and comma-separated board
/// descriptions both reach the tokenizer as one contiguous string
#[must_use]
pub fn normalize_board_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<String>()
        .to_lowercase()
}

/// Solve a board against a dictionary
///
/// The dictionary is expected to be pre-filtered by the loader (lowercase
/// alphabetic, length at or above the configured minimum).
///
/// # Errors
///
/// Returns an error if:
/// - The board text is malformed (wrong tile count, non-letter characters)
/// - The dictionary is empty
pub fn solve_board(config: &SolveConfig, dictionary: &[String]) -> Result<BoardReport, String> {
    let normalized = normalize_board_text(&config.raw_board);
    let board = Board::parse(&normalized, config.rows, config.cols)
        .map_err(|e| format!("Invalid board: {e}"))?;

    let trie = Trie::from_words(dictionary);
    let dictionary_size = trie.len();

    let start = Instant::now();
    let found = solve(&board, &trie, config.min_word_len).map_err(|e| e.to_string())?;
    let duration = start.elapsed();

    let words = rank_words(found);
    let total_score = total_score(&words);

    Ok(BoardReport {
        board,
        words,
        total_score,
        dictionary_size,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn normalize_strips_whitespace_and_commas() {
        assert_eq!(normalize_board_text("c a\nt s"), "cats");
        assert_eq!(normalize_board_text("c,a,t,s"), "cats");
        assert_eq!(normalize_board_text("CATS"), "cats");
    }

    #[test]
    fn solve_small_board() {
        let config = SolveConfig {
            raw_board: "c a\nt s".to_string(),
            rows: 2,
            cols: 2,
            min_word_len: 3,
        };
        let report = solve_board(&config, &dictionary(&["cat", "cats", "at"])).unwrap();

        let found: Vec<&str> = report.words.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(found, ["cats", "cat"]);
        assert_eq!(report.total_score, 2);
        assert_eq!(report.dictionary_size, 3);
    }

    #[test]
    fn solve_report_is_ranked() {
        let config = SolveConfig {
            raw_board: "rates".to_string(),
            rows: 1,
            cols: 5,
            min_word_len: 3,
        };
        let report =
            solve_board(&config, &dictionary(&["rat", "rate", "rates", "ate", "star"])).unwrap();

        // Longest first, then alphabetical; "star" has no path on a 1x5 row
        let found: Vec<&str> = report.words.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(found, ["rates", "rate", "ate", "rat"]);
    }

    #[test]
    fn solve_rejects_wrong_shape() {
        let config = SolveConfig::new("abc".to_string()); // 3 tiles for 4x4
        let result = solve_board(&config, &dictionary(&["cat"]));
        assert!(result.is_err());
    }

    #[test]
    fn solve_rejects_empty_dictionary() {
        let config = SolveConfig {
            raw_board: "cats".to_string(),
            rows: 2,
            cols: 2,
            min_word_len: 3,
        };
        let result = solve_board(&config, &[]);
        assert!(result.is_err());
    }

    #[test]
    fn solve_with_embedded_dictionary() {
        use crate::wordlists::WORDS;
        use crate::wordlists::loader::words_from_slice;

        let config = SolveConfig {
            raw_board: "cats".to_string(),
            rows: 2,
            cols: 2,
            min_word_len: 3,
        };
        let words = words_from_slice(WORDS, 3);
        let report = solve_board(&config, &words).unwrap();

        assert!(report.words.iter().any(|r| r.word == "cat"));
        assert!(report.words.iter().any(|r| r.word == "cats"));
    }
}
