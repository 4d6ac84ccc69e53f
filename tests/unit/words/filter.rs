//! Tests for the eligibility filter and length ordering

#[cfg(test)]
mod tests {
    use wordgrid::words::filter::{
        filter_words, is_eligible, max_word_length, order_by_length, passes_difficulty,
        placement_order,
    };
    use wordgrid::{Difficulty, GameSettings, Word};

    fn word(text: &str, difficulty: Option<Difficulty>) -> Word {
        let word = Word::new(text).expect("valid word");
        match difficulty {
            Some(level) => word.with_difficulty(level),
            None => word,
        }
    }

    #[test]
    fn test_max_word_length_floors() {
        assert_eq!(max_word_length(10), 8);
        assert_eq!(max_word_length(15), 12);
        assert_eq!(max_word_length(1), 0);
        assert_eq!(max_word_length(4), 3);
    }

    // Tests the length cap applies at every difficulty
    // Verified by using < instead of <=
    #[test]
    fn test_length_cap() {
        let settings = GameSettings::for_difficulty(Difficulty::Hard).with_grid_size(10);
        assert!(is_eligible(&word("ABCDEFGH", None), &settings));
        assert!(!is_eligible(&word("ABCDEFGHI", None), &settings));
    }

    #[test]
    fn test_easy_predicate() {
        let easy = Difficulty::Easy;
        assert!(passes_difficulty(&word("ELEPHANT", Some(Difficulty::Easy)), easy));
        assert!(passes_difficulty(&word("TIGERS", Some(Difficulty::Hard)), easy));
        assert!(passes_difficulty(&word("ZEBRAS", None), easy));
        assert!(!passes_difficulty(&word("ELEPHANT", None), easy));
        assert!(!passes_difficulty(&word("ELEPHANT", Some(Difficulty::Medium)), easy));
    }

    #[test]
    fn test_medium_predicate() {
        let medium = Difficulty::Medium;
        assert!(passes_difficulty(&word("CONSTITUTION", None), medium));
        assert!(passes_difficulty(&word("CONSTITUTION", Some(Difficulty::Easy)), medium));
        assert!(passes_difficulty(&word("SOLDIERS", Some(Difficulty::Hard)), medium));
        assert!(!passes_difficulty(&word("BATTALION", Some(Difficulty::Hard)), medium));
    }

    #[test]
    fn test_hard_predicate_keeps_everything() {
        for tag in [None, Some(Difficulty::Easy), Some(Difficulty::Hard)] {
            assert!(passes_difficulty(&word("CONSTITUTION", tag), Difficulty::Hard));
        }
    }

    // Tests the filter is exactly the conjunction of cap and predicate
    // Verified by skipping the difficulty predicate
    #[test]
    fn test_filter_matches_definition() {
        let pool = vec![
            word("CAT", None),
            word("ELEPHANT", Some(Difficulty::Easy)),
            word("ELEPHANT", None),
            word("HIPPOPOTAMUS", Some(Difficulty::Easy)),
            word("DOG", Some(Difficulty::Hard)),
        ];

        for difficulty in Difficulty::ALL {
            for grid_size in [3, 5, 10, 12, 20] {
                let settings = GameSettings::for_difficulty(difficulty).with_grid_size(grid_size);
                let kept = filter_words(&pool, &settings);
                let expected: Vec<&Word> = pool
                    .iter()
                    .filter(|w| {
                        w.len() <= max_word_length(grid_size) && passes_difficulty(w, difficulty)
                    })
                    .collect();
                assert_eq!(kept, expected);
            }
        }
    }

    // Tests equal-length words keep their input order
    // Verified by switching to an unstable sort
    #[test]
    fn test_order_is_stable_and_descending() {
        let pool = vec![
            word("CAT", None),
            word("HORSE", None),
            word("DOG", None),
            word("MOUSE", None),
            word("OWL", None),
            word("RABBIT", None),
        ];
        let mut ordered: Vec<&Word> = pool.iter().collect();
        order_by_length(&mut ordered);

        let texts: Vec<&str> = ordered.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["RABBIT", "HORSE", "MOUSE", "CAT", "DOG", "OWL"]);
    }

    #[test]
    fn test_placement_order_filters_then_sorts() {
        let pool = vec![
            word("CAT", None),
            word("ANTELOPES", None),
            word("HORSE", None),
        ];
        let settings = GameSettings::for_difficulty(Difficulty::Hard).with_grid_size(10);
        let texts: Vec<&str> = placement_order(&pool, &settings)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, ["HORSE", "CAT"]);
    }
}
