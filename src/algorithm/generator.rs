//! Generation entry point and the bounded random placement loop

use crate::algorithm::filler::fill_empty_cells;
use crate::algorithm::placement::{PlacedWord, can_place_word, place_word};
use crate::algorithm::settings::GameSettings;
use crate::io::configuration::MAX_PLACEMENT_ATTEMPTS;
use crate::io::error::Result;
use crate::spatial::{DirectionSet, LetterGrid};
use crate::words::filter::placement_order;
use crate::words::source::WordSource;
use crate::words::{Difficulty, Word};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};

/// A finished puzzle
///
/// Every cell holds a letter and every placed word is spelled along its
/// line; words only share cells where their letters agree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordGrid {
    /// Fully populated letter grid
    pub grid: LetterGrid,
    /// Words hidden in the grid, in placement order
    pub placed_words: Vec<PlacedWord>,
    /// Side of the grid
    pub size: usize,
    /// Difficulty the puzzle was generated for
    pub difficulty: Difficulty,
    /// Wall-clock time from the call to the end of the filler pass
    #[serde(serialize_with = "serialize_millis")]
    pub generation_time: Duration,
}

fn serialize_millis<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

impl WordGrid {
    /// Letter at a cell as a `char`
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row, col).map(char::from)
    }

    /// Whether every placed word is spelled in bounds along its line
    pub fn is_consistent(&self) -> bool {
        self.grid.size() == self.size
            && self
                .placed_words
                .iter()
                .all(|placed| placed.matches(&self.grid))
    }

    /// Placed word with the given text, if any
    pub fn find(&self, text: &str) -> Option<&PlacedWord> {
        let text = text.trim().to_ascii_uppercase();
        self.placed_words
            .iter()
            .find(|placed| placed.word.text() == text)
    }
}

/// Randomised grid placement engine
///
/// Runs are independent: each call allocates a fresh grid. Only the random
/// number generator carries over between runs.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<R = StdRng> {
    rng: R,
}

impl PuzzleGenerator<StdRng> {
    /// Deterministic generator for reproducible puzzles
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    /// Generator drawing from an existing random number generator
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Random number generator driving placement and filler draws
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    /// Consume the generator, returning its random number generator
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Fetch candidates from `source` and build a puzzle
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for unusable settings, or the source's
    /// error if it cannot supply words. Words that fail to fit are not
    /// errors; they are left out of the result.
    pub fn generate<S>(&mut self, settings: &GameSettings, source: &mut S) -> Result<WordGrid>
    where
        S: WordSource + ?Sized,
    {
        let start = Instant::now();
        settings.validate()?;
        let pool = source.fetch_words(settings.difficulty)?;
        Ok(self.build(settings, &pool, start))
    }

    /// Build a puzzle from an already available candidate pool
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for unusable settings
    pub fn generate_from_words(&mut self, settings: &GameSettings, pool: &[Word]) -> Result<WordGrid> {
        let start = Instant::now();
        settings.validate()?;
        Ok(self.build(settings, pool, start))
    }

    fn build(&mut self, settings: &GameSettings, pool: &[Word], start: Instant) -> WordGrid {
        let size = settings.grid_size;
        let words = placement_order(pool, settings);
        let directions = settings.direction_set();
        log::debug!(
            "{} of {} candidates eligible, directions {:?}",
            words.len(),
            pool.len(),
            directions.as_slice()
        );

        let mut grid = LetterGrid::new(size);
        let placed_words = self.place_words(&mut grid, &words, &directions);
        let filled = fill_empty_cells(&mut grid, &mut self.rng);
        let generation_time = start.elapsed();

        log::info!(
            "Placed {}/{} words on a {size}x{size} grid ({filled} filler cells) in {generation_time:?}",
            placed_words.len(),
            words.len(),
        );

        WordGrid {
            grid,
            placed_words,
            size,
            difficulty: settings.difficulty,
            generation_time,
        }
    }

    /// Place words in the given order, skipping those that find no spot
    pub fn place_words(
        &mut self,
        grid: &mut LetterGrid,
        words: &[&Word],
        directions: &DirectionSet,
    ) -> Vec<PlacedWord> {
        let mut placed_words = Vec::with_capacity(words.len());
        for word in words {
            match self.try_place(grid, word, directions) {
                Some(placed) => placed_words.push(placed),
                None => log::debug!("Dropped '{word}' after {MAX_PLACEMENT_ATTEMPTS} attempts"),
            }
        }
        placed_words
    }

    /// Up to `MAX_PLACEMENT_ATTEMPTS` random anchor and direction draws,
    /// committing the first feasible one
    ///
    /// With no usable direction no attempt is made.
    pub fn try_place(
        &mut self,
        grid: &mut LetterGrid,
        word: &Word,
        directions: &DirectionSet,
    ) -> Option<PlacedWord> {
        let size = grid.size();
        if directions.is_empty() || word.is_empty() || size == 0 {
            return None;
        }

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = self.rng.random_range(0..size);
            let col = self.rng.random_range(0..size);
            let direction = directions.get(self.rng.random_range(0..directions.len()))?;

            if can_place_word(grid, word.letters(), row, col, direction) {
                place_word(grid, word.letters(), row, col, direction);
                return Some(PlacedWord::new(word.clone(), row, col, direction));
            }
        }
        None
    }
}
