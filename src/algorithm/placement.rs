//! Placement geometry: bounds and conflict checks, committing letters

use crate::spatial::{Direction, LetterGrid};
use crate::words::Word;
use serde::Serialize;

/// Cell `index` steps from `(row, col)` along `direction`
///
/// Returns `None` when the cell would have a negative coordinate.
pub fn cell_along(row: usize, col: usize, direction: Direction, index: usize) -> Option<(usize, usize)> {
    let (d_row, d_col) = direction.step();
    let index = isize::try_from(index).ok()?;
    Some((
        row.checked_add_signed(d_row.checked_mul(index)?)?,
        col.checked_add_signed(d_col.checked_mul(index)?)?,
    ))
}

/// Last cell of a line of `length` cells, if it lies on a grid of side `grid_size`
pub fn end_cell(
    grid_size: usize,
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
) -> Option<(usize, usize)> {
    let last = length.checked_sub(1)?;
    cell_along(row, col, direction, last).filter(|&(r, c)| r < grid_size && c < grid_size)
}

/// Feasibility check for one candidate placement
///
/// Rejects lines that leave the grid and lines crossing a cell that holds
/// a different letter. A cell already holding the same letter is shared.
pub fn can_place_word(
    grid: &LetterGrid,
    letters: &[u8],
    row: usize,
    col: usize,
    direction: Direction,
) -> bool {
    if !grid.contains(row, col) {
        return false;
    }
    if end_cell(grid.size(), row, col, direction, letters.len()).is_none() {
        return false;
    }

    letters.iter().enumerate().all(|(i, &letter)| {
        cell_along(row, col, direction, i)
            .is_some_and(|(r, c)| grid.get(r, c).is_none_or(|existing| existing == letter))
    })
}

/// Write a word's letters along its line
///
/// Callers check feasibility first; cells off the grid are skipped.
pub fn place_word(grid: &mut LetterGrid, letters: &[u8], row: usize, col: usize, direction: Direction) {
    for (i, &letter) in letters.iter().enumerate() {
        if let Some((r, c)) = cell_along(row, col, direction, i) {
            grid.set(r, c, letter);
        }
    }
}

/// A word committed to the grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    /// The word as placed, uppercase
    pub word: Word,
    /// Row of the first letter
    pub start_row: usize,
    /// Column of the first letter
    pub start_col: usize,
    /// Orientation of the line
    pub direction: Direction,
    /// Number of letters
    pub length: usize,
}

impl PlacedWord {
    /// Record a placement of `word` starting at `(start_row, start_col)`
    pub fn new(word: Word, start_row: usize, start_col: usize, direction: Direction) -> Self {
        let length = word.len();
        Self {
            word,
            start_row,
            start_col,
            direction,
            length,
        }
    }

    /// Cells covered by the word, first letter first
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.length)
            .filter_map(|i| cell_along(self.start_row, self.start_col, self.direction, i))
            .collect()
    }

    /// Cell of the last letter, if it lies on a grid of side `grid_size`
    pub fn end_cell(&self, grid_size: usize) -> Option<(usize, usize)> {
        end_cell(
            grid_size,
            self.start_row,
            self.start_col,
            self.direction,
            self.length,
        )
    }

    /// Whether the grid spells this word along its line
    pub fn matches(&self, grid: &LetterGrid) -> bool {
        self.end_cell(grid.size()).is_some()
            && self.cells().len() == self.length
            && self
                .cells()
                .into_iter()
                .zip(self.word.letters())
                .all(|((r, c), &letter)| grid.get(r, c) == Some(letter))
    }
}
