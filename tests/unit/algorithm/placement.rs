//! Tests for placement feasibility and committing letters

#[cfg(test)]
mod tests {
    use wordgrid::algorithm::placement::{
        PlacedWord, can_place_word, cell_along, end_cell, place_word,
    };
    use wordgrid::spatial::{Direction, LetterGrid};
    use wordgrid::Word;

    #[test]
    fn test_cell_along() {
        assert_eq!(cell_along(2, 2, Direction::Diagonal, 2), Some((4, 4)));
        assert_eq!(cell_along(2, 2, Direction::DiagonalReverse, 2), Some((0, 0)));
        assert_eq!(cell_along(2, 2, Direction::DiagonalReverse, 3), None);
        assert_eq!(cell_along(0, 5, Direction::HorizontalReverse, 5), Some((0, 0)));
    }

    // Tests the end cell is checked on both axes
    // Verified by only checking the row axis
    #[test]
    fn test_end_cell_bounds() {
        assert_eq!(end_cell(5, 0, 0, Direction::Horizontal, 5), Some((0, 4)));
        assert_eq!(end_cell(5, 0, 1, Direction::Horizontal, 5), None);
        assert_eq!(end_cell(5, 4, 0, Direction::Vertical, 2), None);
        assert_eq!(end_cell(5, 4, 4, Direction::VerticalReverse, 5), Some((0, 4)));
        assert_eq!(end_cell(5, 0, 0, Direction::Horizontal, 0), None);
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let grid = LetterGrid::new(4);
        assert!(can_place_word(&grid, b"CAT", 0, 1, Direction::Horizontal));
        assert!(!can_place_word(&grid, b"CAT", 0, 2, Direction::Horizontal));
        assert!(!can_place_word(&grid, b"CAT", 1, 1, Direction::DiagonalReverse));
        assert!(can_place_word(&grid, b"CAT", 2, 2, Direction::DiagonalReverse));
        assert!(!can_place_word(&grid, b"CAT", 4, 0, Direction::Horizontal));
    }

    // Tests a different letter blocks placement but the same letter is shared
    // Verified by rejecting any occupied cell
    #[test]
    fn test_conflicts_and_crossings() {
        let mut grid = LetterGrid::new(5);
        place_word(&mut grid, b"CAT", 0, 0, Direction::Horizontal);

        // Shares the A of CAT
        assert!(can_place_word(&grid, b"ANT", 0, 1, Direction::Vertical));
        // Would overwrite the A of CAT
        assert!(!can_place_word(&grid, b"BAD", 0, 1, Direction::Vertical));
        assert!(!can_place_word(&grid, b"OWL", 0, 1, Direction::Vertical));
        assert!(!can_place_word(&grid, b"COT", 0, 0, Direction::Horizontal));
        assert!(can_place_word(&grid, b"CAT", 0, 0, Direction::Horizontal));
    }

    #[test]
    fn test_place_word_writes_line() {
        let mut grid = LetterGrid::new(4);
        place_word(&mut grid, b"WORD", 3, 3, Direction::DiagonalReverse);
        assert_eq!(grid.row_strings(), ["D...", ".R..", "..O.", "...W"]);
    }

    #[test]
    fn test_placed_word_geometry() {
        let word = Word::new("dog").expect("valid word");
        let placed = PlacedWord::new(word, 2, 4, Direction::HorizontalReverse);
        assert_eq!(placed.length, 3);
        assert_eq!(placed.cells(), [(2, 4), (2, 3), (2, 2)]);
        assert_eq!(placed.end_cell(5), Some((2, 2)));

        let mut grid = LetterGrid::new(5);
        assert!(!placed.matches(&grid));
        place_word(&mut grid, placed.word.letters(), 2, 4, placed.direction);
        assert!(placed.matches(&grid));
    }

    #[test]
    fn test_placed_word_serializes_camel_case() {
        let word = Word::new("cat").expect("valid word");
        let placed = PlacedWord::new(word, 1, 2, Direction::VerticalReverse);
        let json = serde_json::to_value(&placed).expect("serializes");
        assert_eq!(json["startRow"], 1);
        assert_eq!(json["startCol"], 2);
        assert_eq!(json["direction"], "vertical-reverse");
        assert_eq!(json["length"], 3);
        assert_eq!(json["word"]["text"], "CAT");
    }
}
