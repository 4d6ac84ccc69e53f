//! Narrows the candidate pool to words that can plausibly fit and orders
//! them for placement

use crate::algorithm::settings::GameSettings;
use crate::io::configuration::{EASY_LENGTH_LIMIT, MEDIUM_LENGTH_LIMIT, WORD_LENGTH_RATIO};
use crate::words::{Difficulty, Word};

/// Longest word accepted on a grid of the given side
///
/// Keeps roughly a fifth of the longest line free as slack.
pub fn max_word_length(grid_size: usize) -> usize {
    (grid_size as f64 * WORD_LENGTH_RATIO).floor() as usize
}

/// Difficulty-dependent part of the eligibility rule
pub fn passes_difficulty(word: &Word, difficulty: Difficulty) -> bool {
    let length = word.len();
    match difficulty {
        Difficulty::Easy => word.difficulty() == Some(Difficulty::Easy) || length <= EASY_LENGTH_LIMIT,
        Difficulty::Medium => {
            word.difficulty() != Some(Difficulty::Hard) || length <= MEDIUM_LENGTH_LIMIT
        }
        Difficulty::Hard => true,
    }
}

/// Whether a word may be offered to the placement loop
pub fn is_eligible(word: &Word, settings: &GameSettings) -> bool {
    word.len() <= max_word_length(settings.grid_size)
        && passes_difficulty(word, settings.difficulty)
}

/// Subset of the pool eligible for placement, in input order
pub fn filter_words<'a>(pool: &'a [Word], settings: &GameSettings) -> Vec<&'a Word> {
    pool.iter()
        .filter(|word| is_eligible(word, settings))
        .collect()
}

/// Stable sort by descending length so that long words claim space first
pub fn order_by_length(words: &mut [&Word]) {
    words.sort_by_key(|word| std::cmp::Reverse(word.len()));
}

/// Filter then order: the exact sequence the placement loop consumes
pub fn placement_order<'a>(pool: &'a [Word], settings: &GameSettings) -> Vec<&'a Word> {
    let mut words = filter_words(pool, settings);
    order_by_length(&mut words);
    words
}
