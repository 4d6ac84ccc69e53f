//! Summary statistics and solution coverage for a finished puzzle

use crate::algorithm::WordGrid;
use crate::spatial::Direction;
use crate::words::Difficulty;
use bitvec::prelude::{BitVec, bitvec};
use serde::Serialize;

/// Row-major mask of the cells covered by at least one placed word
pub fn solution_mask(word_grid: &WordGrid) -> BitVec {
    let size = word_grid.size;
    let mut mask = bitvec![0; size * size];
    for placed in &word_grid.placed_words {
        for (row, col) in placed.cells() {
            if row < size && col < size {
                mask.set(row * size + col, true);
            }
        }
    }
    mask
}

/// Placed words per difficulty tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyCounts {
    /// Words tagged easy
    pub easy: usize,
    /// Words tagged medium, plus untagged words
    pub medium: usize,
    /// Words tagged hard
    pub hard: usize,
}

/// Placed words per orientation family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectionCounts {
    /// Left-to-right words
    pub horizontal: usize,
    /// Top-to-bottom words
    pub vertical: usize,
    /// Down-right diagonal words
    pub diagonal: usize,
    /// Words in any reverse orientation
    pub reverse: usize,
}

/// Overview of a generated puzzle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStats {
    /// Number of hidden words
    pub placed_count: usize,
    /// Breakdown by difficulty tag
    pub by_difficulty: DifficultyCounts,
    /// Breakdown by orientation
    pub by_direction: DirectionCounts,
    /// Cells belonging to at least one word
    pub covered_cells: usize,
    /// Cells in the grid
    pub total_cells: usize,
}

impl GridStats {
    /// Gather statistics for a puzzle
    pub fn from_grid(word_grid: &WordGrid) -> Self {
        let mut by_difficulty = DifficultyCounts::default();
        let mut by_direction = DirectionCounts::default();

        for placed in &word_grid.placed_words {
            match placed.word.difficulty().unwrap_or(Difficulty::Medium) {
                Difficulty::Easy => by_difficulty.easy += 1,
                Difficulty::Medium => by_difficulty.medium += 1,
                Difficulty::Hard => by_difficulty.hard += 1,
            }

            match placed.direction {
                d if d.is_reverse() => by_direction.reverse += 1,
                Direction::Horizontal => by_direction.horizontal += 1,
                Direction::Vertical => by_direction.vertical += 1,
                _ => by_direction.diagonal += 1,
            }
        }

        Self {
            placed_count: word_grid.placed_words.len(),
            by_difficulty,
            by_direction,
            covered_cells: solution_mask(word_grid).count_ones(),
            total_cells: word_grid.size * word_grid.size,
        }
    }

    /// Share of cells covered by words, between 0 and 1
    pub fn coverage(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.covered_cells as f64 / self.total_cells as f64
        }
    }

    /// Cells holding only filler
    pub const fn filler_cells(&self) -> usize {
        self.total_cells.saturating_sub(self.covered_cells)
    }
}
