//! Word lists cached per difficulty level

use crate::io::error::Result;
use crate::words::Difficulty;
use crate::words::Word;
use crate::words::source::WordSource;
use std::collections::HashMap;

/// Word lists fetched from a source, keyed by difficulty
///
/// Owned by whichever component pairs the generator with a word source.
/// Entries live until explicitly invalidated.
#[derive(Default, Debug)]
pub struct WordCache {
    entries: HashMap<Difficulty, Vec<Word>>,

    /// Cache usage statistics
    pub stats: CacheStats,
}

/// Usage counters for a word cache
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: usize,
    /// Lookups that went to the source
    pub misses: usize,
    /// Entries dropped by invalidation
    pub invalidations: usize,
}

impl WordCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached words for a difficulty, fetching them from `source` on a miss
    ///
    /// A failed fetch leaves the cache unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the source's error on a miss
    pub fn get_or_fetch<S>(&mut self, difficulty: Difficulty, source: &mut S) -> Result<&[Word]>
    where
        S: WordSource + ?Sized,
    {
        use std::collections::hash_map::Entry;

        match self.entries.entry(difficulty) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let words = source.fetch_words(difficulty)?;
                log::debug!("Cached {} words for {difficulty}", words.len());
                Ok(entry.insert(words).as_slice())
            }
        }
    }

    /// Whether words for this difficulty are cached
    pub fn contains(&self, difficulty: Difficulty) -> bool {
        self.entries.contains_key(&difficulty)
    }

    /// Drop the entry for one difficulty, returning whether one existed
    pub fn invalidate(&mut self, difficulty: Difficulty) -> bool {
        let removed = self.entries.remove(&difficulty).is_some();
        if removed {
            self.stats.invalidations += 1;
        }
        removed
    }

    /// Drop every entry
    pub fn invalidate_all(&mut self) {
        self.stats.invalidations += self.entries.len();
        self.entries.clear();
    }

    /// Number of cached difficulty levels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
