//! Formatting utilities for terminal output

use crate::core::{Board, Tile};

/// Render a tile face for display: "Qu" or a single uppercase letter
#[must_use]
pub fn display_face(tile: &Tile) -> String {
    let mut chars = tile.as_str().chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(rest)) => format!("{}{rest}", first.to_ascii_uppercase()),
        (Some(first), None) => first.to_ascii_uppercase().to_string(),
        _ => String::new(),
    }
}

/// Render a board as an aligned uppercase grid, one row per line
#[must_use]
pub fn format_grid(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if col > 0 {
                out.push(' ');
            }
            let face = display_face(board.tile(row, col));
            out.push_str(&format!("{face:<2}"));
        }
        if row + 1 < board.rows() {
            out.push('\n');
        }
    }
    out
}

/// Create a histogram bar string
#[must_use]
pub fn histogram_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width).div_ceil(max).min(width)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
