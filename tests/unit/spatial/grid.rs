//! Tests for letter grid storage

#[cfg(test)]
mod tests {
    use wordgrid::spatial::LetterGrid;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = LetterGrid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.empty_count(), 16);
        assert!(!grid.is_complete());
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = LetterGrid::new(3);
        grid.set(1, 2, b'Q');
        assert_eq!(grid.get(1, 2), Some(b'Q'));
        assert_eq!(grid.empty_count(), 8);

        // Off-grid writes are ignored
        grid.set(3, 0, b'Z');
        assert_eq!(grid.get(3, 0), None);
        assert!(!grid.contains(3, 0));
        assert!(grid.contains(2, 2));
    }

    #[test]
    fn test_fill_empty_keeps_letters() {
        let mut grid = LetterGrid::from_rows(&["C..", ".A.", "..T"]).expect("square rows");
        grid.fill_empty_with(|| b'X');
        assert!(grid.is_complete());
        assert_eq!(grid.row_strings(), ["CXX", "XAX", "XXT"]);
    }

    #[test]
    fn test_from_rows_requires_square() {
        assert!(LetterGrid::from_rows(&["AB", "C"]).is_none());
        assert!(LetterGrid::from_rows(&["ABC", "DEF"]).is_none());
        let grid = LetterGrid::from_rows(&["ab", "c."]).expect("square rows");
        assert_eq!(grid.row_strings(), ["AB", "C."]);
    }

    #[test]
    fn test_serializes_as_rows() {
        let grid = LetterGrid::from_rows(&["HI", "YO"]).expect("square rows");
        let json = serde_json::to_value(&grid).expect("serializes");
        assert_eq!(json, serde_json::json!(["HI", "YO"]));
    }
}
