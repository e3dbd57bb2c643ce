//! Benchmark command
//!
//! Rolls and solves a batch of random boards to measure solver throughput
//! and typical board yield.

use super::random::{RandomConfig, roll_board};
use super::solve::{BoardReport, SolveConfig, solve_board};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub total_score: u32,
    pub average_words: f64,
    pub average_score: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Board text and word count of the richest board seen
    pub best_board: Option<(String, usize)>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Roll and solve `count` random boards
///
/// A fixed `seed` makes the whole run reproducible; board `i` is rolled
/// from `seed + i`.
///
/// # Errors
///
/// Returns an error if the dictionary is empty or a rolled board fails to
/// parse (which would indicate a bad die table).
pub fn run_benchmark(
    count: usize,
    seed: Option<u64>,
    min_word_len: usize,
    dictionary: &[String],
) -> Result<BenchmarkResult, String> {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut total_words = 0;
    let mut total_score = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut best_board: Option<(String, usize)> = None;

    let start = Instant::now();

    for i in 0..count {
        let roll_seed = seed.map(|s| s + i as u64);
        let raw = roll_board(&RandomConfig::new(roll_seed));

        let config = SolveConfig {
            raw_board: raw.clone(),
            rows: 4,
            cols: 4,
            min_word_len,
        };
        let report: BoardReport = solve_board(&config, dictionary)?;

        let words = report.words.len();
        total_words += words;
        total_score += report.total_score;
        min_words = min_words.min(words);
        max_words = max_words.max(words);
        if best_board.as_ref().is_none_or(|(_, best)| words > *best) {
            best_board = Some((raw, words));
        }

        pb.set_message(format!("{words} words"));
        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_boards: count,
        total_words,
        total_score,
        average_words: total_words as f64 / count as f64,
        average_score: f64::from(total_score) / count as f64,
        min_words: if count == 0 { 0 } else { min_words },
        max_words,
        best_board,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let dictionary = words_from_slice(WORDS, 3);
        let result = run_benchmark(5, Some(7), 3, &dictionary).unwrap();

        assert_eq!(result.total_boards, 5);
        assert!(result.max_words >= result.min_words);
        assert!(result.best_board.is_some());
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let dictionary = words_from_slice(WORDS, 3);
        let result = run_benchmark(4, Some(11), 3, &dictionary).unwrap();

        // Average should sit between min and max
        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);

        // Best board should carry the max word count
        let (_, best_words) = result.best_board.unwrap();
        assert_eq!(best_words, result.max_words);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let dictionary = words_from_slice(WORDS, 3);
        let first = run_benchmark(3, Some(5), 3, &dictionary).unwrap();
        let second = run_benchmark(3, Some(5), 3, &dictionary).unwrap();

        assert_eq!(first.total_words, second.total_words);
        assert_eq!(first.total_score, second.total_score);
    }

    #[test]
    fn benchmark_empty_dictionary_is_an_error() {
        let result = run_benchmark(2, Some(1), 3, &[]);
        assert!(result.is_err());
    }
}
