//! Depth-first board search with trie pruning
//!
//! One search runs per starting cell. Each branch threads its own visited
//! state: a cell is marked on entry and unmarked only after every neighbor
//! recursion has returned, so sibling branches never see each other's marks.
//! Starting cells are mutually independent, so they fan out across rayon
//! workers with private found-word buffers merged at the end.

use crate::core::Board;
use crate::solver::trie::{Trie, TrieNode};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for a search that cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The trie has no words: a misconfiguration, not an empty answer
    EmptyDictionary,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Dictionary is empty, nothing to search for"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Find every dictionary word traceable as a simple path on the board
///
/// A word is found when a sequence of distinct, pairwise 8-adjacent cells
/// concatenates (tile by tile, so a `"qu"` cell contributes two letters) to a
/// trie entry of at least `min_word_len` characters. Each distinct word
/// appears once no matter how many paths spell it.
///
/// The result is a pure function of `(board, trie, min_word_len)`: identical
/// inputs always produce the identical set, regardless of worker scheduling.
///
/// # Errors
///
/// Returns [`SolveError::EmptyDictionary`] if the trie holds no words. A
/// search that finds nothing is an `Ok` empty set, never an error.
///
/// # Examples
/// ```
/// use boggle_solver::core::Board;
/// use boggle_solver::solver::{Trie, solve};
///
/// let board = Board::parse("cats", 2, 2).unwrap();
/// let trie = Trie::from_words(["cat", "cats", "dog"]);
///
/// let found = solve(&board, &trie, 3).unwrap();
/// assert!(found.contains("cat"));
/// assert!(found.contains("cats"));
/// assert!(!found.contains("dog"));
/// ```
pub fn solve(
    board: &Board,
    trie: &Trie,
    min_word_len: usize,
) -> Result<FxHashSet<String>, SolveError> {
    if trie.is_empty() {
        return Err(SolveError::EmptyDictionary);
    }

    let found = (0..board.cell_count())
        .into_par_iter()
        .map(|start| {
            let row = start / board.cols();
            let col = start % board.cols();

            let mut branch = Branch {
                board,
                min_word_len,
                path: String::new(),
                visited: vec![false; board.cell_count()],
                found: FxHashSet::default(),
            };
            branch.explore(trie.root(), row, col);
            branch.found
        })
        .reduce(FxHashSet::default, |mut acc, local| {
            acc.extend(local);
            acc
        });

    Ok(found)
}

/// Per-starting-cell search state
///
/// `path` and `visited` are mutated on descent and restored on backtrack;
/// `found` only ever grows.
struct Branch<'a> {
    board: &'a Board,
    min_word_len: usize,
    path: String,
    visited: Vec<bool>,
    found: FxHashSet<String>,
}

impl Branch<'_> {
    fn explore(&mut self, node: &TrieNode, row: usize, col: usize) {
        let tile = self.board.tile(row, col);

        // Consume the tile's letters; any failed step kills the branch
        let mut cursor = node;
        for &letter in tile.as_str().as_bytes() {
            match cursor.step(letter) {
                Some(next) => cursor = next,
                None => return,
            }
        }

        let depth = self.path.len();
        self.path.push_str(tile.as_str());

        if cursor.is_word() && self.path.len() >= self.min_word_len {
            self.found.insert(self.path.clone());
        }

        // Dead-end prune, independent of the word check above: a complete
        // word can still be extendable
        if cursor.has_children() {
            let here = self.board.index(row, col);
            self.visited[here] = true;
            for (nr, nc) in self.board.neighbors(row, col) {
                if !self.visited[self.board.index(nr, nc)] {
                    self.explore(cursor, nr, nc);
                }
            }
            self.visited[here] = false;
        }

        self.path.truncate(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found_sorted(set: &FxHashSet<String>) -> Vec<&str> {
        let mut v: Vec<&str> = set.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn scenario_two_by_two_min_three() {
        let board = Board::parse("cats", 2, 2).unwrap();
        let trie = Trie::from_words(["cat", "cats", "at", "ta"]);

        let found = solve(&board, &trie, 3).unwrap();
        assert_eq!(found_sorted(&found), ["cat", "cats"]);
    }

    #[test]
    fn scenario_two_by_two_min_two() {
        let board = Board::parse("cats", 2, 2).unwrap();
        let trie = Trie::from_words(["cat", "cats", "at", "ta"]);

        let found = solve(&board, &trie, 2).unwrap();
        assert_eq!(found_sorted(&found), ["at", "cat", "cats", "ta"]);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let board = Board::parse("cats", 2, 2).unwrap();
        let trie = Trie::new();
        assert_eq!(solve(&board, &trie, 3), Err(SolveError::EmptyDictionary));
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let board = Board::parse("cats", 2, 2).unwrap();
        let trie = Trie::from_words(["zebra"]);
        let found = solve(&board, &trie, 3).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn board_smaller_than_min_word_len_yields_empty() {
        let board = Board::parse("ca", 1, 2).unwrap();
        let trie = Trie::from_words(["cat"]);
        let found = solve(&board, &trie, 3).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn no_cell_reused_within_one_word() {
        // "aba" needs the 'a' twice but the board has only one
        let board = Board::parse("ab", 1, 2).unwrap();
        let trie = Trie::from_words(["aba", "ab"]);
        let found = solve(&board, &trie, 2).unwrap();
        assert_eq!(found_sorted(&found), ["ab"]);
    }

    #[test]
    fn same_cell_reused_across_branches() {
        // Both "bad" and "dab" share the 'a'; each word is a separate branch
        let board = Board::parse("bad", 1, 3).unwrap();
        let trie = Trie::from_words(["bad", "dab"]);
        let found = solve(&board, &trie, 3).unwrap();
        assert_eq!(found_sorted(&found), ["bad", "dab"]);
    }

    #[test]
    fn qu_tile_spells_two_letters() {
        // qu-e-s-t on one row
        let board = Board::parse("quest", 1, 4).unwrap();
        let trie = Trie::from_words(["quest", "que"]);
        let found = solve(&board, &trie, 3).unwrap();
        assert_eq!(found_sorted(&found), ["que", "quest"]);
    }

    #[test]
    fn qu_tile_never_spells_bare_q() {
        // "qat" cannot be traced because the tile is "qu", not "q"
        let board = Board::parse("quat", 1, 3).unwrap();
        let trie = Trie::from_words(["qat"]);
        let found = solve(&board, &trie, 3).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn word_found_only_via_adjacency() {
        // "cat" exists as letters but 'c' and 'a' sit on opposite corners of
        // a row with a gap too wide to bridge
        let board = Board::parse("cxxat", 1, 5).unwrap();
        let trie = Trie::from_words(["cat"]);
        let found = solve(&board, &trie, 3).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn diagonal_adjacency_counts() {
        // c a
        // x t   -> "cat" via (0,0) -> (0,1) -> (1,1)
        let board = Board::parse("caxt", 2, 2).unwrap();
        let trie = Trie::from_words(["cat"]);
        let found = solve(&board, &trie, 3).unwrap();
        assert_eq!(found_sorted(&found), ["cat"]);
    }

    #[test]
    fn min_length_filters_short_words() {
        let board = Board::parse("cats", 2, 2).unwrap();
        let trie = Trie::from_words(["at", "cat"]);
        let found = solve(&board, &trie, 3).unwrap();
        assert_eq!(found_sorted(&found), ["cat"]);
        assert!(found.iter().all(|w| w.len() >= 3));
    }

    #[test]
    fn every_found_word_is_in_dictionary() {
        let words = ["cat", "cats", "act", "cast", "scat", "sat", "tas"];
        let board = Board::parse("cats", 2, 2).unwrap();
        let trie = Trie::from_words(words);
        let found = solve(&board, &trie, 3).unwrap();
        for word in &found {
            assert!(trie.contains(word), "'{word}' not in dictionary");
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let words = ["cat", "cats", "act", "cast", "scat", "sat", "star", "arts", "rat"];
        let board = Board::parse("catsstar", 2, 4).unwrap();
        let trie = Trie::from_words(words);

        let first = solve(&board, &trie, 3).unwrap();
        let second = solve(&board, &trie, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn one_by_one_board() {
        let board = Board::parse("qu", 1, 1).unwrap();
        let trie = Trie::from_words(["qu", "quest"]);
        let found = solve(&board, &trie, 2).unwrap();
        assert_eq!(found_sorted(&found), ["qu"]);
    }
}
