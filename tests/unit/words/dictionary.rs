//! Tests for the built-in categorised dictionary

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use wordgrid::Difficulty;
    use wordgrid::io::configuration::DICTIONARY_WORD_COUNT;
    use wordgrid::words::dictionary::{
        BuiltinDictionary, CATEGORIES, category, category_names, is_dictionary_word,
    };

    #[test]
    fn test_every_category_name_resolves() {
        for difficulty in Difficulty::ALL {
            for name in category_names(difficulty) {
                assert!(category(name).is_some(), "unknown category {name}");
            }
        }
        assert!(category("Astronomy").is_none());
    }

    #[test]
    fn test_builtin_words_are_valid() {
        for category in CATEGORIES {
            for text in category.words {
                assert!(is_dictionary_word(text), "{text} in {}", category.name);
            }
        }
    }

    #[test]
    fn test_is_dictionary_word() {
        assert!(is_dictionary_word("CAT"));
        assert!(!is_dictionary_word("OX"));
        assert!(!is_dictionary_word("ICE-CREAM"));
        assert!(!is_dictionary_word("cat"));
    }

    // Tests draws respect the requested count and tag every word
    // Verified by skipping the final truncation
    #[test]
    fn test_draw_count_and_tags() {
        let mut dictionary = BuiltinDictionary::new(7);
        for difficulty in Difficulty::ALL {
            let words = dictionary.draw(difficulty);
            assert_eq!(words.len(), DICTIONARY_WORD_COUNT);
            for word in &words {
                assert_eq!(word.difficulty(), Some(difficulty));
                let name = word.category().expect("category attached");
                assert!(category_names(difficulty).contains(&name));
            }
        }
    }

    #[test]
    fn test_draw_small_count() {
        let mut dictionary = BuiltinDictionary::new(3).with_count(5);
        assert_eq!(dictionary.draw(Difficulty::Easy).len(), 5);

        let mut empty = BuiltinDictionary::new(3).with_count(0);
        assert!(empty.draw(Difficulty::Hard).is_empty());
    }

    #[test]
    fn test_same_seed_same_words() {
        let first = BuiltinDictionary::new(11).draw(Difficulty::Medium);
        let second = BuiltinDictionary::new(11).draw(Difficulty::Medium);
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_has_no_duplicates_within_category() {
        let words = BuiltinDictionary::new(5).draw(Difficulty::Easy);
        let unique: HashSet<(&str, Option<&str>)> =
            words.iter().map(|w| (w.text(), w.category())).collect();
        assert_eq!(unique.len(), words.len());
    }
}
