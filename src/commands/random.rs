//! Random board command
//!
//! Rolls a 4x4 board from the sixteen classic Boggle dice and solves it.
//! The Q die carries the two-letter "qu" face.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The sixteen classic Boggle dice, six faces each
pub const DICE: [[&str; 6]; 16] = [
    ["a", "a", "e", "e", "g", "n"],
    ["a", "b", "b", "j", "o", "o"],
    ["a", "c", "h", "o", "p", "s"],
    ["a", "f", "f", "k", "p", "s"],
    ["a", "o", "o", "t", "t", "w"],
    ["c", "i", "m", "o", "t", "u"],
    ["d", "e", "i", "l", "r", "x"],
    ["d", "e", "l", "r", "v", "y"],
    ["d", "i", "s", "t", "t", "y"],
    ["e", "e", "g", "h", "n", "w"],
    ["e", "e", "i", "n", "s", "u"],
    ["e", "h", "r", "t", "v", "w"],
    ["e", "i", "o", "s", "s", "t"],
    ["e", "l", "r", "t", "t", "y"],
    ["h", "i", "m", "n", "qu", "u"],
    ["h", "l", "n", "n", "r", "z"],
];

/// Configuration for rolling a random board
pub struct RandomConfig {
    /// Fixed RNG seed for reproducible rolls
    pub seed: Option<u64>,
}

impl RandomConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

/// Roll a random 4x4 board
///
/// Shuffles the dice into the tray, then shows one random face per die.
/// Returns raw board text ready for the tokenizer; a rolled Q die
/// contributes `"qu"`.
#[must_use]
pub fn roll_board(config: &RandomConfig) -> String {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut tray = DICE;
    tray.shuffle(&mut rng);

    tray.iter()
        .map(|die| die[rng.random_range(0..die.len())])
        .collect()
}
