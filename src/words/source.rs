//! Word sources: everything that can hand the generator a candidate pool
//!
//! The generator only needs one fallible call per run. Sources range from
//! a fixed list to a word file to the built-in dictionary, and
//! [`WordSupply`] composes any of them with a cache and custom words.

use crate::io::error::{GenerationError, Result};
use crate::words::cache::WordCache;
use crate::words::{Difficulty, Word};
use std::path::{Path, PathBuf};

/// Supplier of candidate words for a generation run
pub trait WordSource {
    /// Produce the candidate pool for a difficulty level
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce words at all; the
    /// generation run fails with it
    fn fetch_words(&mut self, difficulty: Difficulty) -> Result<Vec<Word>>;
}

impl<F> WordSource for F
where
    F: FnMut(Difficulty) -> Result<Vec<Word>>,
{
    fn fetch_words(&mut self, difficulty: Difficulty) -> Result<Vec<Word>> {
        self(difficulty)
    }
}

/// A fixed word list returned for every difficulty
#[derive(Debug, Clone, Default)]
pub struct StaticWords {
    words: Vec<Word>,
}

impl StaticWords {
    /// Wrap already-built words
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build from plain texts
    ///
    /// # Errors
    ///
    /// Returns `InvalidWord` for the first text that is not a valid word
    pub fn from_texts(texts: &[&str]) -> Result<Self> {
        let words = texts
            .iter()
            .map(|text| Word::new(text))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(words))
    }

    /// The wrapped words
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl WordSource for StaticWords {
    fn fetch_words(&mut self, _difficulty: Difficulty) -> Result<Vec<Word>> {
        Ok(self.words.clone())
    }
}

/// Plain text word list, one word per line
///
/// Blank lines and lines starting with `#` are ignored.
#[derive(Debug, Clone)]
pub struct WordFile {
    path: PathBuf,
}

impl WordFile {
    /// Source reading from `path` on every fetch
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the word list
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, or `InvalidWord`
    /// for a line that is not a valid word
    pub fn read(&self) -> Result<Vec<Word>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| GenerationError::FileSystem {
                path: self.path.clone(),
                operation: "read word list",
                source,
            })?;
        parse_word_list(&content)
    }
}

impl WordSource for WordFile {
    fn fetch_words(&mut self, _difficulty: Difficulty) -> Result<Vec<Word>> {
        self.read()
    }
}

/// Parse one `TEXT[,difficulty[,category[,definition]]]` entry
///
/// Empty fields are skipped, so `owl,,birds` carries a category but no
/// difficulty. The definition may itself contain commas.
///
/// # Errors
///
/// Returns `InvalidWord` for unusable text, or `InvalidParameter` for an
/// unknown difficulty
pub fn parse_word_entry(entry: &str) -> Result<Word> {
    let mut fields = entry.splitn(4, ',').map(str::trim);
    let mut word = Word::new(fields.next().unwrap_or_default())?;

    if let Some(difficulty) = fields.next().filter(|field| !field.is_empty()) {
        word = word.with_difficulty(difficulty.parse()?);
    }
    if let Some(category) = fields.next().filter(|field| !field.is_empty()) {
        word = word.with_category(category);
    }
    if let Some(definition) = fields.next().filter(|field| !field.is_empty()) {
        word = word.with_definition(definition);
    }
    Ok(word)
}

/// Parse one entry per line, skipping blanks and `#` comments
///
/// # Errors
///
/// Returns the entry's error with the offending line number prepended
pub fn parse_word_list(content: &str) -> Result<Vec<Word>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            let line_number = index + 1;
            parse_word_entry(line).map_err(|error| match error {
                GenerationError::InvalidWord { text, reason } => GenerationError::InvalidWord {
                    text,
                    reason: format!("line {line_number}: {reason}"),
                },
                GenerationError::InvalidParameter {
                    parameter,
                    value,
                    reason,
                } => GenerationError::InvalidParameter {
                    parameter,
                    value,
                    reason: format!("line {line_number}: {reason}"),
                },
                other => other,
            })
        })
        .collect()
}

/// A word source paired with a cache and the user's own words
///
/// Fetching returns the source's words for the difficulty (from cache when
/// possible) followed by the custom words. With refresh enabled the cache
/// entry is dropped before each fetch, so every run sees fresh words.
#[derive(Debug)]
pub struct WordSupply<S> {
    source: S,
    cache: WordCache,
    custom_words: Vec<Word>,
    refresh: bool,
}

impl<S: WordSource> WordSupply<S> {
    /// Supply backed by `source`, caching between fetches
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: WordCache::new(),
            custom_words: Vec::new(),
            refresh: false,
        }
    }

    /// Append user-provided words to every fetch
    #[must_use]
    pub fn with_custom_words(mut self, words: Vec<Word>) -> Self {
        self.custom_words = words;
        self
    }

    /// Invalidate the cached entry before every fetch
    #[must_use]
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// The user-provided words
    pub fn custom_words(&self) -> &[Word] {
        &self.custom_words
    }

    /// Read access to the cache
    pub const fn cache(&self) -> &WordCache {
        &self.cache
    }

    /// Drop cached words for one difficulty so the next fetch reloads them
    pub fn invalidate(&mut self, difficulty: Difficulty) -> bool {
        self.cache.invalidate(difficulty)
    }
}

impl<S: WordSource> WordSource for WordSupply<S> {
    fn fetch_words(&mut self, difficulty: Difficulty) -> Result<Vec<Word>> {
        if self.refresh {
            self.cache.invalidate(difficulty);
        }

        let mut words = self
            .cache
            .get_or_fetch(difficulty, &mut self.source)?
            .to_vec();
        words.extend(self.custom_words.iter().cloned());
        Ok(words)
    }
}
