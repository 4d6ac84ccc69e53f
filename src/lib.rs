//! Randomised word-search puzzle generation
//!
//! Candidate words are filtered by length and difficulty, ordered longest
//! first, and each is given a bounded number of random placement attempts
//! along the enabled orientations. Remaining cells receive random filler.

#![forbid(unsafe_code)]

/// Placement engine: settings, geometry, placement loop and filler
pub mod algorithm;
/// Statistics and solution coverage for finished puzzles
pub mod analysis;
/// Command line, configuration, errors, logging and rendering
pub mod io;
/// Grid geometry: orientations and the letter grid
pub mod spatial;
/// Candidate words, filtering and word sources
pub mod words;

pub use algorithm::{GameSettings, PlacedWord, PuzzleGenerator, WordGrid};
pub use io::error::{GenerationError, Result};
pub use spatial::{Direction, DirectionFlags};
pub use words::{Difficulty, Word};
