//! Offline categorised dictionary standing in for a remote word service
//!
//! Each difficulty draws from its own set of categories. A fetch shuffles
//! those categories, takes a handful of random words from each until
//! enough are collected, then shuffles and truncates the result.

use crate::io::configuration::{DICTIONARY_WORD_COUNT, MIN_DICTIONARY_WORD_LENGTH};
use crate::io::error::Result;
use crate::words::source::WordSource;
use crate::words::{Difficulty, Word};
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

// Never draw more than this many words from one category per fetch
const MAX_WORDS_PER_CATEGORY: usize = 20;

/// A named group of related words
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Display name
    pub name: &'static str,
    /// Words in the category, uppercase
    pub words: &'static [&'static str],
}

/// Every built-in category
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "School",
        words: &[
            "BOOK", "DESK", "PENCIL", "TEACHER", "LESSON", "CLASS", "RULER", "ERASER", "CHALK",
            "HOMEWORK", "LIBRARY", "STUDENT", "EXAM", "NOTEBOOK", "SCHOOL",
        ],
    },
    Category {
        name: "Landscapes",
        words: &[
            "VALLEY", "HILL", "MOUNTAIN", "CANYON", "DESERT", "MEADOW", "PLAIN", "CLIFF",
            "GLACIER", "DUNE", "PLATEAU", "ISLAND", "COAST", "TUNDRA",
        ],
    },
    Category {
        name: "Qualities",
        words: &[
            "BRAVE", "HONEST", "KIND", "PATIENT", "LOYAL", "GENTLE", "CLEVER", "HUMBLE", "GENEROUS",
            "CALM", "CURIOUS", "CHEERFUL", "DILIGENT", "SINCERE",
        ],
    },
    Category {
        name: "Arithmetic",
        words: &[
            "SUM", "PLUS", "MINUS", "TOTAL", "DIVIDE", "NUMBER", "DIGIT", "FRACTION", "PRODUCT",
            "EQUAL", "ZERO", "DOZEN", "HALF", "QUOTIENT",
        ],
    },
    Category {
        name: "Food",
        words: &[
            "BREAD", "APPLE", "CHEESE", "RICE", "SOUP", "PASTA", "HONEY", "CARROT", "BUTTER",
            "MELON", "PEAR", "CAKE", "GRAPE", "LEMON", "TOMATO",
        ],
    },
    Category {
        name: "Human body",
        words: &[
            "HAND", "FOOT", "NOSE", "EAR", "ARM", "KNEE", "HEART", "SHOULDER", "ELBOW", "THUMB",
            "ANKLE", "WRIST", "CHIN", "TOOTH",
        ],
    },
    Category {
        name: "Senses",
        words: &[
            "SIGHT", "SMELL", "TASTE", "TOUCH", "HEARING", "SOUND", "COLOR", "SWEET", "BITTER",
            "SOFT", "LOUD", "BRIGHT", "SALTY",
        ],
    },
    Category {
        name: "Indoors",
        words: &[
            "CHAIR", "TABLE", "LAMP", "SOFA", "SHELF", "CARPET", "CURTAIN", "MIRROR", "PILLOW",
            "BLANKET", "DRAWER", "CLOSET", "STOOL",
        ],
    },
    Category {
        name: "Industry",
        words: &[
            "FACTORY", "MACHINE", "STEEL", "FURNACE", "ENGINE", "WORKSHOP", "WELDING", "TURBINE",
            "CONVEYOR", "ASSEMBLY", "FOUNDRY", "LATHE", "REFINERY",
        ],
    },
    Category {
        name: "Arts",
        words: &[
            "PAINTING", "SCULPTURE", "THEATER", "MUSIC", "POETRY", "CANVAS", "BALLET", "OPERA",
            "CONCERT", "GALLERY", "SKETCH", "MOSAIC", "PORTRAIT",
        ],
    },
    Category {
        name: "Agriculture",
        words: &[
            "FARM", "TRACTOR", "HARVEST", "WHEAT", "BARN", "PLOUGH", "ORCHARD", "CATTLE", "SEED",
            "FIELD", "IRRIGATION", "VINEYARD", "PASTURE",
        ],
    },
    Category {
        name: "Nature",
        words: &[
            "TREE", "FLOWER", "LEAF", "GRASS", "FOREST", "STONE", "MOSS", "BRANCH", "ROOT",
            "BUSH", "PETAL", "ACORN", "FERN",
        ],
    },
    Category {
        name: "Movement",
        words: &[
            "RUN", "JUMP", "WALK", "CLIMB", "CRAWL", "DANCE", "SWIM", "SLIDE", "SPIN", "LEAP",
            "STRETCH", "WANDER", "GALLOP",
        ],
    },
    Category {
        name: "Time",
        words: &[
            "HOUR", "MINUTE", "SECOND", "MORNING", "EVENING", "WEEK", "MONTH", "YEAR", "CENTURY",
            "DECADE", "SEASON", "CALENDAR", "MIDNIGHT",
        ],
    },
    Category {
        name: "Clothing",
        words: &[
            "SHIRT", "DRESS", "SCARF", "GLOVE", "COAT", "BOOT", "SOCK", "HAT", "JACKET", "SKIRT",
            "BELT", "SWEATER", "SANDAL",
        ],
    },
    Category {
        name: "Sports",
        words: &[
            "SOCCER", "TENNIS", "RUGBY", "GOLF", "HOCKEY", "BOXING", "ROWING", "CYCLING", "SKIING",
            "JUDO", "FENCING", "ARCHERY", "CRICKET",
        ],
    },
    Category {
        name: "House",
        words: &[
            "ROOF", "DOOR", "WINDOW", "KITCHEN", "GARDEN", "WALL", "STAIRS", "ATTIC", "CELLAR",
            "GARAGE", "CHIMNEY", "PORCH", "HALLWAY",
        ],
    },
    Category {
        name: "Travel",
        words: &[
            "TICKET", "PASSPORT", "SUITCASE", "AIRPORT", "TRAIN", "HOTEL", "JOURNEY", "MAP",
            "CRUISE", "LUGGAGE", "BORDER", "VOYAGE", "TOURIST",
        ],
    },
    Category {
        name: "Animals",
        words: &[
            "CAT", "DOG", "LION", "TIGER", "HORSE", "RABBIT", "MOUSE", "BEAR", "WOLF", "FOX",
            "ZEBRA", "EAGLE", "OWL", "FROG", "SHEEP", "GOAT", "DUCK",
        ],
    },
    Category {
        name: "City",
        words: &[
            "STREET", "BRIDGE", "PARK", "MARKET", "TOWER", "SQUARE", "AVENUE", "MUSEUM", "STATION",
            "BAKERY", "SUBWAY", "HARBOR", "PLAZA",
        ],
    },
    Category {
        name: "Water",
        words: &[
            "RIVER", "LAKE", "OCEAN", "RAIN", "WAVE", "POND", "STREAM", "TIDE", "BROOK", "SEA",
            "FOUNTAIN", "WELL", "SPRING",
        ],
    },
    Category {
        name: "Commerce",
        words: &[
            "SHOP", "PRICE", "MONEY", "CUSTOMER", "INVOICE", "RECEIPT", "DISCOUNT", "BARGAIN",
            "MERCHANT", "WALLET", "PROFIT", "COUNTER", "RETAIL",
        ],
    },
    Category {
        name: "Communication",
        words: &[
            "LETTER", "PHONE", "MESSAGE", "RADIO", "SIGNAL", "EMAIL", "SPEECH", "DIALOGUE",
            "TELEGRAM", "ANTENNA", "BROADCAST", "POSTCARD", "REPLY",
        ],
    },
    Category {
        name: "Emotions",
        words: &[
            "JOY", "FEAR", "ANGER", "SADNESS", "HOPE", "PRIDE", "SURPRISE", "ENVY", "RELIEF",
            "GRATITUDE", "NOSTALGIA", "DELIGHT", "SORROW",
        ],
    },
    Category {
        name: "Government",
        words: &[
            "PARLIAMENT", "MINISTER", "SENATE", "ELECTION", "DEMOCRACY", "CONSTITUTION",
            "TREASURY", "EMBASSY", "DECREE", "CABINET", "REFERENDUM", "MAYOR", "CITIZEN",
        ],
    },
    Category {
        name: "Military",
        words: &[
            "SOLDIER", "GENERAL", "BATTALION", "FORTRESS", "ARMOR", "REGIMENT", "SENTRY",
            "CAVALRY", "ARTILLERY", "CAPTAIN", "BARRACKS", "TRENCH", "ADMIRAL",
        ],
    },
    Category {
        name: "Health",
        words: &[
            "DOCTOR", "NURSE", "HOSPITAL", "VACCINE", "SURGEON", "PHARMACY", "DIAGNOSIS",
            "THERAPY", "STETHOSCOPE", "BANDAGE", "ANTIBIOTIC", "CLINIC", "REMEDY",
        ],
    },
];

/// Category names drawn from for a difficulty level
pub const fn category_names(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => &[
            "Animals",
            "Water",
            "Landscapes",
            "Food",
            "Human body",
            "Senses",
            "Indoors",
            "Nature",
            "Clothing",
            "Sports",
            "House",
            "City",
        ],
        Difficulty::Medium => &[
            "School",
            "Qualities",
            "Arithmetic",
            "Industry",
            "Arts",
            "Agriculture",
            "Movement",
            "Time",
            "Travel",
            "Commerce",
            "Communication",
            "Emotions",
        ],
        Difficulty::Hard => &[
            "Government",
            "Military",
            "Health",
            "School",
            "Qualities",
            "Arithmetic",
            "Senses",
            "Industry",
            "Arts",
            "Agriculture",
            "Movement",
            "Time",
            "Travel",
            "Commerce",
            "Communication",
            "Emotions",
        ],
    }
}

/// Look up a category by name
pub fn category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.name == name)
}

/// Whether a dictionary entry is usable in a grid: letters A-Z only, not too short
pub fn is_dictionary_word(text: &str) -> bool {
    text.len() >= MIN_DICTIONARY_WORD_LENGTH && text.bytes().all(|b| b.is_ascii_uppercase())
}

/// Built-in word source drawing random words by difficulty
#[derive(Debug, Clone)]
pub struct BuiltinDictionary {
    rng: StdRng,
    count: usize,
}

impl BuiltinDictionary {
    /// Deterministic dictionary for reproducible runs
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            count: DICTIONARY_WORD_COUNT,
        }
    }

    /// Dictionary seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            count: DICTIONARY_WORD_COUNT,
        }
    }

    /// Number of words returned per fetch
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Up to `count` random words from the difficulty's categories
    pub fn draw(&mut self, difficulty: Difficulty) -> Vec<Word> {
        let mut names = category_names(difficulty).to_vec();
        names.shuffle(&mut self.rng);

        let per_category = self.count.div_ceil(names.len()).max(1);
        let take = (per_category * 2).min(MAX_WORDS_PER_CATEGORY);

        let mut words = Vec::with_capacity(self.count);
        for name in names {
            if words.len() >= self.count {
                break;
            }
            let Some(group) = category(name) else {
                continue;
            };

            let mut texts = group.words.to_vec();
            texts.shuffle(&mut self.rng);
            words.extend(
                texts
                    .into_iter()
                    .filter(|text| is_dictionary_word(text))
                    .take(take)
                    .filter_map(|text| Word::new(text).ok())
                    .map(|word| word.with_difficulty(difficulty).with_category(group.name)),
            );
        }

        words.shuffle(&mut self.rng);
        words.truncate(self.count);
        words
    }
}

impl WordSource for BuiltinDictionary {
    fn fetch_words(&mut self, difficulty: Difficulty) -> Result<Vec<Word>> {
        Ok(self.draw(difficulty))
    }
}
