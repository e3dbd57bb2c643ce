//! Display functions for command results

use super::formatters::{format_grid, histogram_bar};
use crate::commands::{BenchmarkResult, BoardReport};
use colored::Colorize;

/// Print a solved board: the grid, the ranked word list, and the totals
pub fn print_board_report(report: &BoardReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    for line in format_grid(&report.board).lines() {
        println!("  {}", line.bright_yellow().bold());
    }
    println!("{}", "─".repeat(60).cyan());

    if report.words.is_empty() {
        println!("\n{}", "No words found.".red());
    } else {
        let mut current_length = 0;
        for result in &report.words {
            if result.length != current_length {
                current_length = result.length;
                println!("\n{}", format!("{current_length} letters").bright_cyan());
            }
            if verbose {
                println!(
                    "  {:<16} {}",
                    result.word,
                    format!("{} pts", result.score).green()
                );
            } else {
                println!("  {}", result.word);
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ {} words, {} points ({} dictionary words, {:.1?})",
            report.words.len(),
            report.total_score,
            report.dictionary_size,
            report.duration
        )
        .green()
        .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} boards solved:", result.total_boards);
    println!(
        "   Words/board: {} (min {}, max {})",
        format!("{:.1}", result.average_words).bright_yellow(),
        result.min_words,
        result.max_words
    );
    println!(
        "   Score/board: {}",
        format!("{:.1}", result.average_score).bright_yellow()
    );
    println!(
        "   Throughput:  {:.1} boards/sec ({:.1?} total)",
        result.boards_per_second, result.duration
    );

    let bar = histogram_bar(result.min_words, result.max_words, 30);
    println!("   Spread:      [{}]", bar.green());

    if let Some((raw, words)) = &result.best_board {
        println!(
            "\n🏆 Best board ({} words): {}",
            words,
            raw.to_uppercase().bright_yellow().bold()
        );
    }
}
