//! Square letter grid under construction
//!
//! Cells start empty and receive letters either from placed words or from
//! the filler pass. Coordinates are `(row, col)` with the origin top-left.

use ndarray::Array2;

/// Square grid of optional uppercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Array2<Option<u8>>,
}

impl LetterGrid {
    /// Create an empty grid with the given side
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
        }
    }

    /// Build a grid from row strings, `.` marking an empty cell
    ///
    /// Returns `None` unless every row has as many cells as there are rows.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != size {
                return None;
            }
            for (col, byte) in line.bytes().enumerate() {
                if byte != b'.' {
                    grid.set(row, col, byte.to_ascii_uppercase());
                }
            }
        }
        Some(grid)
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether `(row, col)` lies on the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size()
    }

    /// Letter at a cell, `None` when empty or off the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get([row, col]).copied().flatten()
    }

    /// Write a letter; off-grid writes are ignored
    pub fn set(&mut self, row: usize, col: usize, letter: u8) {
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = Some(letter);
        }
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Whether every cell holds a letter
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Fill every empty cell with the letter produced by `letter`
    pub fn fill_empty_with(&mut self, mut letter: impl FnMut() -> u8) {
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(letter());
            }
        }
    }

    /// Rows rendered as strings, `.` for empty cells
    pub fn row_strings(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', char::from))
                    .collect()
            })
            .collect()
    }
}

// Serialized as an array of row strings
impl serde::Serialize for LetterGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.row_strings())
    }
}
