//! Boggle Solver - CLI
//!
//! Solves letter boards: every dictionary word traceable as a simple path of
//! 8-adjacent cells, ranked longest-first and scored with the standard table.

use anyhow::Result;
use boggle_solver::{
    commands::{RandomConfig, SolveConfig, roll_board, run_benchmark, solve_board},
    output::{print_benchmark_result, print_board_report},
    wordlists::{WORDS, loader},
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Boggle board solver using a trie-pruned depth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Minimum word length to count
    #[arg(short = 'm', long, global = true, default_value = "3")]
    min_len: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a given board
    Solve {
        /// Board letters, row by row ("abcd efgh ijkl mnop" or one string)
        board: String,

        /// Number of rows
        #[arg(short, long, default_value = "4")]
        rows: usize,

        /// Number of columns
        #[arg(short, long, default_value = "4")]
        cols: usize,

        /// Show per-word scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// Roll a random 4x4 board from the classic dice and solve it (default)
    Random {
        /// Fixed RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Show per-word scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// Roll and solve many random boards, reporting solver throughput
    Benchmark {
        /// Number of boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Fixed RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -w flag, pre-filtered to valid words
fn load_dictionary(wordlist_mode: &str, min_len: usize) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(loader::words_from_slice(WORDS, min_len)),
        path => Ok(loader::load_from_file(path, min_len)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist, cli.min_len)?;

    // Default to a random roll if no command given
    let command = cli.command.unwrap_or(Commands::Random {
        seed: None,
        verbose: false,
    });

    match command {
        Commands::Solve {
            board,
            rows,
            cols,
            verbose,
        } => {
            let config = SolveConfig {
                raw_board: board,
                rows,
                cols,
                min_word_len: cli.min_len,
            };
            let report = solve_board(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_board_report(&report, verbose);
            Ok(())
        }
        Commands::Random { seed, verbose } => {
            let raw = roll_board(&RandomConfig::new(seed));
            let mut config = SolveConfig::new(raw);
            config.min_word_len = cli.min_len;
            let report = solve_board(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_board_report(&report, verbose);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Rolling and solving {count} random boards...");
            let result = run_benchmark(count, seed, cli.min_len, &dictionary)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
