//! Board model
//!
//! An immutable R x C grid of tiles with 8-directional adjacency.

use super::tile::{BoardError, Tile, tokenize};
use std::fmt;

/// An immutable letter board
///
/// Tiles are stored row-major. Every row has exactly `cols` tiles and both
/// dimensions are at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Build a board from an already-tokenized tile sequence
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyDimensions`] if either dimension is zero,
    /// or [`BoardError::Shape`] if the tile count is not `rows * cols`.
    pub fn from_tiles(tiles: Vec<Tile>, rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimensions);
        }
        if tiles.len() != rows * cols {
            return Err(BoardError::Shape {
                expected: rows * cols,
                actual: tiles.len(),
            });
        }
        Ok(Self { tiles, rows, cols })
    }

    /// Tokenize raw board text and build a board in one step
    ///
    /// # Errors
    ///
    /// Propagates tokenizer errors ([`BoardError::InvalidCharacter`],
    /// [`BoardError::Shape`]) and rejects zero dimensions.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    ///
    /// let board = Board::parse("catsdogefishwxyz", 4, 4).unwrap();
    /// assert_eq!(board.rows(), 4);
    /// assert_eq!(board.tile(0, 0).as_str(), "c");
    /// ```
    pub fn parse(raw: &str, rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimensions);
        }
        let tiles = tokenize(raw, rows * cols)?;
        Self::from_tiles(tiles, rows, cols)
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Tile at `(row, col)`
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> &Tile {
        &self.tiles[row * self.cols + col]
    }

    /// Flat row-major index of `(row, col)`
    #[inline]
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// In-bounds 8-directional neighbors of `(row, col)`
    ///
    /// Every combination of row and column delta in {-1, 0, 1} except (0, 0),
    /// filtered to the board bounds. Corner cells have 3 neighbors, edge
    /// cells 5, interior cells 8.
    #[must_use]
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(8);
        let row_range = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
        for nr in row_range {
            let col_range = col.saturating_sub(1)..=(col + 1).min(self.cols - 1);
            for nc in col_range {
                if (nr, nc) != (row, col) {
                    result.push((nr, nc));
                }
            }
        }
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                // Pad single letters so "qu" doesn't skew columns
                write!(f, "{:<2}", self.tile(row, col).as_str())?;
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
