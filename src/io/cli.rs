//! Command-line interface: settings from flags, word supply, output

use crate::algorithm::{GameSettings, PuzzleGenerator, WordGrid};
use crate::io::configuration::{
    DEFAULT_DIFFICULTY, DICTIONARY_WORD_COUNT, OUTPUT_NAME, preset_grid_size,
};
use crate::io::error::{GenerationError, Result};
use crate::io::render::{render_grid, render_json, render_solution, render_stats, render_word_list};
use crate::spatial::DirectionFlags;
use crate::words::dictionary::BuiltinDictionary;
use crate::words::source::{StaticWords, WordFile, WordSupply, parse_word_entry};
use crate::words::{Difficulty, Word};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

/// Output representation of the puzzle
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Letter grid followed by the word list
    Text,
    /// JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "wordgrid")]
#[command(author, version, about = "Generate word-search puzzles")]
/// Command-line arguments for the puzzle generator
// Each orientation and output section is an independent switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Words to hide in the grid, optionally tagged as `WORD,difficulty`
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Grid side (defaults to the difficulty preset: 10, 15 or 20)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Difficulty: easy, medium or hard
    #[arg(short, long, default_value_t = DEFAULT_DIFFICULTY)]
    pub difficulty: Difficulty,

    /// Disallow left-to-right words
    #[arg(long)]
    pub no_horizontal: bool,

    /// Disallow top-to-bottom words
    #[arg(long)]
    pub no_vertical: bool,

    /// Disallow diagonal words
    #[arg(long)]
    pub no_diagonal: bool,

    /// Disallow words read backwards
    #[arg(long)]
    pub no_reverse: bool,

    /// Read additional words from a file, one
    /// `WORD[,difficulty[,category[,definition]]]` entry per line
    #[arg(short = 'f', long, value_name = "PATH")]
    pub words_file: Option<PathBuf>,

    /// Do not mix in words from the built-in dictionary
    #[arg(long)]
    pub no_dictionary: bool,

    /// Number of words drawn from the built-in dictionary
    #[arg(long, default_value_t = DICTIONARY_WORD_COUNT)]
    pub dictionary_count: usize,

    /// Random seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the solution view (text output only)
    #[arg(long)]
    pub solution: bool,

    /// Also print grid statistics (a `stats` object in JSON output)
    #[arg(long)]
    pub stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generation settings described by the flags
    pub const fn settings(&self) -> GameSettings {
        let grid_size = match self.size {
            Some(size) => size,
            None => preset_grid_size(self.difficulty),
        };

        GameSettings {
            grid_size,
            difficulty: self.difficulty,
            directions: DirectionFlags {
                horizontal: !self.no_horizontal,
                vertical: !self.no_vertical,
                diagonal: !self.no_diagonal,
                reverse: !self.no_reverse,
            },
        }
    }

    /// Positional words followed by the words file's words
    ///
    /// # Errors
    ///
    /// Returns `InvalidWord` for an unusable word, `InvalidParameter` for an
    /// unknown difficulty tag, or `FileSystem` if the words file cannot be
    /// read
    pub fn custom_words(&self) -> Result<Vec<Word>> {
        let mut words = self
            .words
            .iter()
            .map(|entry| parse_word_entry(entry))
            .collect::<Result<Vec<_>>>()?;

        if let Some(path) = &self.words_file {
            words.extend(WordFile::new(path).read()?);
        }

        Ok(words)
    }
}

/// Runs one generation from parsed arguments and writes the result
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate a puzzle and write it to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the words, settings or output fail
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let word_grid = self.generate()?;
        self.write(&word_grid, out)
    }

    /// Generate a puzzle from the configured word sources
    ///
    /// # Errors
    ///
    /// Returns an error for invalid words or settings, or an unreadable
    /// words file
    pub fn generate(&self) -> Result<WordGrid> {
        let settings = self.cli.settings();
        let custom_words = self.cli.custom_words()?;

        let mut generator = self
            .cli
            .seed
            .map_or_else(PuzzleGenerator::from_os_rng, PuzzleGenerator::new);

        let word_grid = if self.cli.no_dictionary {
            let mut source = StaticWords::new(custom_words);
            generator.generate(&settings, &mut source)?
        } else {
            let dictionary = self
                .cli
                .seed
                .map_or_else(BuiltinDictionary::from_os_rng, BuiltinDictionary::new)
                .with_count(self.cli.dictionary_count);
            let mut supply = WordSupply::new(dictionary)
                .with_custom_words(custom_words)
                .with_refresh(true);
            generator.generate(&settings, &mut supply)?
        };

        if word_grid.placed_words.is_empty() {
            log::warn!("No words could be placed; the grid is filler only");
        }

        Ok(word_grid)
    }

    /// Puzzle in the configured format
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if JSON output fails
    pub fn render(&self, word_grid: &WordGrid) -> Result<String> {
        if self.cli.format == OutputFormat::Json {
            let mut json = render_json(word_grid, self.cli.stats)?;
            json.push('\n');
            return Ok(json);
        }

        let mut out = render_grid(word_grid);
        out.push_str("\nWords:\n");
        out.push_str(&render_word_list(word_grid));

        if self.cli.solution {
            out.push_str("\nSolution:\n");
            out.push_str(&render_solution(word_grid));
        }

        if self.cli.stats {
            out.push('\n');
            out.push_str(&render_stats(word_grid));
        }
        Ok(out)
    }

    /// Write a puzzle in the configured format
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if JSON output fails, or `FileSystem` if the
    /// output cannot be written
    pub fn write(&self, word_grid: &WordGrid, out: &mut impl Write) -> Result<()> {
        let rendered = self.render(word_grid)?;
        out.write_all(rendered.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| GenerationError::FileSystem {
                path: PathBuf::from(OUTPUT_NAME),
                operation: "write puzzle",
                source,
            })
    }
}
