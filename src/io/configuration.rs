//! Engine constants and runtime configuration defaults

use crate::words::Difficulty;

// Placement loop
/// Random placement attempts made for each word before it is dropped
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Fraction of the grid side a word may occupy at most
pub const WORD_LENGTH_RATIO: f64 = 0.8;

// Difficulty filter thresholds
/// Untagged or harder words up to this length are kept on easy grids
pub const EASY_LENGTH_LIMIT: usize = 6;
/// Hard-tagged words up to this length are kept on medium grids
pub const MEDIUM_LENGTH_LIMIT: usize = 8;

/// Letters drawn uniformly by the filler pass
pub const FILLER_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Safety limit to keep the grid allocation small
/// Largest accepted grid side
pub const MAX_GRID_SIZE: usize = 100;

// Word supply
/// Number of words drawn from the built-in dictionary per difficulty
pub const DICTIONARY_WORD_COUNT: usize = 50;
/// Shortest dictionary word worth hiding in a grid
pub const MIN_DICTIONARY_WORD_LENGTH: usize = 3;

// Default values for configurable parameters
/// Difficulty used when none is requested
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Medium;

/// Grid side preset for each difficulty level
pub const fn preset_grid_size(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 15,
        Difficulty::Hard => 20,
    }
}

// Output settings
/// Placeholder shown for filler cells in the solution view
pub const SOLUTION_FILLER_MARK: char = '.';

/// Name reported for the output stream in write errors
pub const OUTPUT_NAME: &str = "<stdout>";
