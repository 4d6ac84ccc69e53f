//! Candidate words and their difficulty tags

use crate::io::error::{GenerationError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Puzzle difficulty level, also used to tag individual words
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Small grids, short common words
    Easy,
    /// Default level
    Medium,
    /// Large grids, long words allowed
    Hard,
}

impl Difficulty {
    /// All levels from easiest to hardest
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase label used on the command line and in JSON
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(crate::io::error::invalid_parameter(
                "difficulty",
                &s,
                &"expected one of: easy, medium, hard",
            )),
        }
    }
}

/// A candidate word, normalised to uppercase A-Z
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Word {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl Word {
    /// Create an untagged word
    ///
    /// Surrounding whitespace is trimmed, accents are stripped and letters
    /// are uppercased, so `été` becomes `ETE`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWord` if the text is empty or anything other than
    /// ASCII letters remains after accent stripping
    pub fn new(text: &str) -> Result<Self> {
        let normalized = text
            .trim()
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_ascii_uppercase();

        if normalized.is_empty() {
            return Err(GenerationError::InvalidWord {
                text: text.to_string(),
                reason: "word is empty".to_string(),
            });
        }

        if let Some(bad) = normalized.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(GenerationError::InvalidWord {
                text: text.to_string(),
                reason: format!("'{bad}' is not a letter A-Z or an accented letter"),
            });
        }

        Ok(Self {
            text: normalized,
            difficulty: None,
            definition: None,
            category: None,
        })
    }

    /// Tag the word with a difficulty level
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Attach a short definition
    #[must_use]
    pub fn with_definition(mut self, definition: &str) -> Self {
        self.definition = Some(definition.to_string());
        self
    }

    /// Attach a category name
    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Uppercase text of the word
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, which is also the number of grid cells occupied
    pub fn len(&self) -> usize {
        // Text is ASCII only, so bytes and letters coincide
        self.text.len()
    }

    /// Always false for a constructed word
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Difficulty tag, if any
    pub const fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Definition, if any
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    /// Category, if any
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Letters of the word as bytes
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
