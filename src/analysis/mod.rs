/// Puzzle statistics and solution coverage
pub mod statistics;

pub use statistics::{GridStats, solution_mask};
