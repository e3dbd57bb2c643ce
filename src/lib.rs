//! Boggle Solver
//!
//! Finds every dictionary word that can be traced as a simple path of
//! 8-adjacent cells on a letter board, using a trie-pruned depth-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::core::Board;
//! use boggle_solver::solver::{Trie, solve};
//!
//! let board = Board::parse("cats", 2, 2).unwrap();
//! let trie = Trie::from_words(["cat", "cats", "act"]);
//!
//! let found = solve(&board, &trie, 3).unwrap();
//! assert!(found.contains("cats"));
//! ```

// Core domain types
pub mod core;

// Trie index and search engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
