//! Core domain types for the board solver
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod board;
mod tile;

pub use board::Board;
pub use tile::{BoardError, Tile, tokenize};
