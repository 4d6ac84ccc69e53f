//! Candidate vocabulary: the word model, eligibility filtering and word sources

/// Word-list caching keyed by difficulty
pub mod cache;
/// Offline categorised dictionary
pub mod dictionary;
/// Word and difficulty data model
pub mod entry;
/// Eligibility filter and placement ordering
pub mod filter;
/// Word sources feeding the generator
pub mod source;

pub use entry::{Difficulty, Word};
