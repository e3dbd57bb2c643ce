//! Trie dictionary index and board search engine

pub mod engine;
pub mod scoring;
pub mod trie;

pub use engine::{SolveError, solve};
pub use scoring::{WordResult, rank_words, score_word, total_score};
pub use trie::{Trie, TrieNode};
