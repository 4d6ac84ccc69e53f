//! Text and JSON renderings of a generated puzzle

use crate::algorithm::WordGrid;
use crate::analysis::{GridStats, solution_mask};
use crate::io::configuration::SOLUTION_FILLER_MARK;
use crate::io::error::Result;
use serde::Serialize;
use std::fmt::Write;

/// Grid rows as space-separated letters, one row per line
pub fn render_grid(word_grid: &WordGrid) -> String {
    let mut out = String::new();
    for row in word_grid.grid.row_strings() {
        let spaced: Vec<String> = row.chars().map(String::from).collect();
        out.push_str(&spaced.join(" "));
        out.push('\n');
    }
    out
}

/// Numbered list of hidden words with 1-based start cell and orientation
pub fn render_word_list(word_grid: &WordGrid) -> String {
    let mut out = String::new();
    for (index, placed) in word_grid.placed_words.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} (row {}, col {}, {})",
            index + 1,
            placed.word,
            placed.start_row + 1,
            placed.start_col + 1,
            placed.direction
        );
    }
    out
}

/// Grid with filler cells masked out, leaving only the hidden words
pub fn render_solution(word_grid: &WordGrid) -> String {
    let mask = solution_mask(word_grid);
    let mut out = String::new();
    for (row, line) in word_grid.grid.row_strings().iter().enumerate() {
        let cells: Vec<String> = line
            .chars()
            .enumerate()
            .map(|(col, letter)| {
                let covered = mask
                    .get(row * word_grid.size + col)
                    .is_some_and(|bit| *bit);
                let shown = if covered { letter } else { SOLUTION_FILLER_MARK };
                shown.to_string()
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Human-readable statistics block
pub fn render_stats(word_grid: &WordGrid) -> String {
    let stats = GridStats::from_grid(word_grid);
    let mut out = String::new();
    let _ = writeln!(out, "Grid: {0}x{0} ({1})", word_grid.size, word_grid.difficulty);
    let _ = writeln!(out, "Words placed: {}", stats.placed_count);
    let _ = writeln!(
        out,
        "By difficulty: easy {}, medium {}, hard {}",
        stats.by_difficulty.easy, stats.by_difficulty.medium, stats.by_difficulty.hard
    );
    let _ = writeln!(
        out,
        "By direction: horizontal {}, vertical {}, diagonal {}, reverse {}",
        stats.by_direction.horizontal,
        stats.by_direction.vertical,
        stats.by_direction.diagonal,
        stats.by_direction.reverse
    );
    let _ = writeln!(
        out,
        "Coverage: {}/{} cells ({:.1}%)",
        stats.covered_cells,
        stats.total_cells,
        stats.coverage() * 100.0
    );
    let _ = writeln!(
        out,
        "Generated in {} ms",
        word_grid.generation_time.as_millis()
    );
    out
}

#[derive(Serialize)]
struct PuzzleDocument<'a> {
    #[serde(flatten)]
    puzzle: &'a WordGrid,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<GridStats>,
}

/// Pretty-printed JSON document for the puzzle
///
/// With `include_stats` a `stats` object is added next to the puzzle fields.
///
/// # Errors
///
/// Returns `Serialization` if the serializer fails
pub fn render_json(word_grid: &WordGrid, include_stats: bool) -> Result<String> {
    let document = PuzzleDocument {
        puzzle: word_grid,
        stats: include_stats.then(|| GridStats::from_grid(word_grid)),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
