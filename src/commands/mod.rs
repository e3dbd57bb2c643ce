//! Command implementations

pub mod benchmark;
pub mod random;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use random::{RandomConfig, roll_board};
pub use solve::{BoardReport, SolveConfig, solve_board};
