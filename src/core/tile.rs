//! Board tiles and the tile tokenizer
//!
//! A Tile is one grid cell's letter face: a single lowercase letter, except
//! for the classic "Qu" die face which occupies one cell but contributes two
//! characters to a traced word.

use std::fmt;

/// One grid cell's letter face
///
/// Either a single lowercase ASCII letter or the reserved two-letter face
/// `"qu"`. No other multi-character faces exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    text: String,
}

/// Error type for malformed board input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Tile count does not match the requested grid shape
    Shape { expected: usize, actual: usize },
    /// Input contained a character that is not an ASCII letter
    InvalidCharacter(char),
    /// Grid dimensions must both be at least 1
    EmptyDimensions,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { expected, actual } => {
                write!(f, "Board must have exactly {expected} tiles, got {actual}")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "Board contains non-letter character '{c}'")
            }
            Self::EmptyDimensions => write!(f, "Board dimensions must be at least 1x1"),
        }
    }
}

impl std::error::Error for BoardError {}

impl Tile {
    /// The reserved multi-letter die face
    pub const QU: &'static str = "qu";

    fn single(c: char) -> Self {
        Self { text: c.to_string() }
    }

    fn qu() -> Self {
        Self {
            text: Self::QU.to_string(),
        }
    }

    /// Get the tile face as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters this tile contributes to a word (1, or 2 for "qu")
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false // a Tile always holds at least one letter
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Split raw board text into tiles, left to right
///
/// The input is expected to be pre-normalized (lowercase, no whitespace or
/// punctuation). At each position, `"qu"` is consumed as a single tile;
/// every other letter becomes its own tile.
///
/// # Errors
///
/// Returns [`BoardError::InvalidCharacter`] for any non-letter input and
/// [`BoardError::Shape`] if the tile count differs from `expected`.
///
/// # Examples
/// ```
/// use boggle_solver::core::tokenize;
///
/// let tiles = tokenize("quest", 4).unwrap();
/// let faces: Vec<&str> = tiles.iter().map(|t| t.as_str()).collect();
/// assert_eq!(faces, ["qu", "e", "s", "t"]);
/// ```
pub fn tokenize(raw: &str, expected: usize) -> Result<Vec<Tile>, BoardError> {
    let mut tiles = Vec::with_capacity(expected);
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_alphabetic() {
            return Err(BoardError::InvalidCharacter(c));
        }
        let c = c.to_ascii_lowercase();

        if c == 'q' && chars.peek().is_some_and(|&n| n.eq_ignore_ascii_case(&'u')) {
            chars.next();
            tiles.push(Tile::qu());
        } else {
            tiles.push(Tile::single(c));
        }
    }

    if tiles.len() != expected {
        return Err(BoardError::Shape {
            expected,
            actual: tiles.len(),
        });
    }

    Ok(tiles)
}
