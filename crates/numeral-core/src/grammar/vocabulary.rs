//! Per-language vocabulary tables, parsed from TOML.
//!
//! ```toml
//! zero = ["zero"]
//! [ones]
//! 1 = ["one"]
//! [tens]
//! 10 = ["ten"]
//! [hundreds]
//! 100 = ["one hundred", "a hundred", "hundred"]
//! [groups]
//! 1000 = ["thousand"]
//! ```
//!
//! The first word of each list is the canonical rendering; the others are
//! accepted when decoding and may carry language-specific forms. A word made
//! of several parts ("two hundred") is decoded from a single token whose parts
//! are joined with `_`.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;

use super::entry::{Category, GrammarEntry};

#[derive(Deserialize)]
struct RawVocabulary {
    #[serde(default)]
    zero: Vec<String>,
    #[serde(default)]
    ones: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    tens: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    hundreds: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    groups: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(Category),
    #[error("invalid key '{key}' in [{category}]: expected an integer")]
    InvalidKey { category: Category, key: String },
    #[error("{value} does not belong in [{category}]")]
    CategoryMismatch { category: Category, value: u64 },
    #[error("{value} is defined twice in [{category}]")]
    DuplicateValue { category: Category, value: u64 },
    #[error("empty word list for {value} in [{category}]")]
    EmptyWords { category: Category, value: u64 },
    #[error("invalid word '{0}': must be non-empty, trimmed and lower-case")]
    InvalidWord(String),
    #[error("word '{0}' is defined more than once")]
    Collision(String),
    #[error("[{category}] has no word for {value}")]
    Missing { category: Category, value: u64 },
    #[error("no zero word defined")]
    MissingZero,
}

/// Immutable word tables of one language, in both directions.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    zero: Vec<String>,
    /// Indexed by `Category::slot()`.
    words: [BTreeMap<u64, Vec<String>>; 4],
    /// Token key → value, indexed by `Category::slot()`.
    index: [HashMap<String, u64>; 4],
}

/// Decode token for a vocabulary word: whitespace-separated parts joined by `_`.
pub fn token_key(word: &str) -> String {
    word.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Parse and validate a vocabulary TOML document.
pub fn parse_vocabulary_toml(toml_str: &str) -> Result<Vocabulary, VocabularyError> {
    let raw: RawVocabulary =
        toml::from_str(toml_str).map_err(|e| VocabularyError::Parse(e.to_string()))?;

    Vocabulary::from_tables(
        raw.zero,
        [
            (Category::Ones, raw.ones),
            (Category::Tens, raw.tens),
            (Category::Hundreds, raw.hundreds),
            (Category::Group, raw.groups),
        ],
    )
}

impl Vocabulary {
    fn from_tables(
        zero: Vec<String>,
        tables: [(Category, BTreeMap<String, Vec<String>>); 4],
    ) -> Result<Self, VocabularyError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut words: [BTreeMap<u64, Vec<String>>; 4] = Default::default();
        let mut index: [HashMap<String, u64>; 4] = Default::default();

        for word in &zero {
            check_word(word)?;
            if !seen.insert(token_key(word)) {
                return Err(VocabularyError::Collision(word.clone()));
            }
        }

        for (category, table) in tables {
            if table.is_empty() {
                return Err(VocabularyError::Empty(category));
            }
            let slot = category.slot();
            for (key, list) in table {
                let value: u64 = key
                    .trim()
                    .parse()
                    .map_err(|_| VocabularyError::InvalidKey {
                        category,
                        key: key.clone(),
                    })?;
                if !category.accepts(value) {
                    return Err(VocabularyError::CategoryMismatch { category, value });
                }
                if words[slot].contains_key(&value) {
                    return Err(VocabularyError::DuplicateValue { category, value });
                }
                if list.is_empty() {
                    return Err(VocabularyError::EmptyWords { category, value });
                }
                for word in &list {
                    check_word(word)?;
                    let key = token_key(word);
                    if !seen.insert(key.clone()) {
                        return Err(VocabularyError::Collision(word.clone()));
                    }
                    index[slot].insert(key, value);
                }
                words[slot].insert(value, list);
            }
        }

        let vocab = Vocabulary { zero, words, index };
        vocab.check_complete()?;
        Ok(vocab)
    }

    /// Every value a renderer may ask for must have a word.
    fn check_complete(&self) -> Result<(), VocabularyError> {
        if self.zero.is_empty() {
            return Err(VocabularyError::MissingZero);
        }
        let tens = (10..=19).chain((2..=9).map(|d| d * 10));
        let required = (1..=9)
            .map(|v| (Category::Ones, v))
            .chain(tens.map(|v| (Category::Tens, v)))
            .chain((1..=9).map(|d| (Category::Hundreds, d * 100)))
            .chain(
                group_ladder(self.largest_group())
                    .into_iter()
                    .map(|m| (Category::Group, m)),
            );

        for (category, value) in required {
            if !self.words[category.slot()].contains_key(&value) {
                return Err(VocabularyError::Missing { category, value });
            }
        }
        Ok(())
    }

    /// Find a token, trying ones, tens, hundreds and groups in that order.
    pub fn lookup(&self, token: &str) -> Option<GrammarEntry> {
        Category::LOOKUP_ORDER.iter().find_map(|&category| {
            self.index[category.slot()]
                .get(token)
                .map(|&value| GrammarEntry::new(category, value))
        })
    }

    pub fn is_zero(&self, token: &str) -> bool {
        self.zero.iter().any(|w| token_key(w) == token)
    }

    /// Canonical zero word; parsing guarantees there is one.
    pub fn zero_word(&self) -> &str {
        self.zero.first().map(String::as_str).unwrap_or("")
    }

    /// All words for `value`, canonical first. Empty when undefined.
    pub fn words(&self, category: Category, value: u64) -> &[String] {
        self.words[category.slot()]
            .get(&value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Canonical word for `value`. Tables are complete once parsed, so this is
    /// only empty for values outside the category.
    pub fn canonical(&self, category: Category, value: u64) -> &str {
        self.words(category, value)
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn largest_group(&self) -> u64 {
        self.words[Category::Group.slot()]
            .keys()
            .next_back()
            .copied()
            .unwrap_or(1)
    }

    /// Largest value that can be spelled with these groups.
    pub fn max_value(&self) -> u64 {
        self.largest_group() * 1000 - 1
    }

    /// Every individual word of every entry, for word-list language detection.
    pub fn all_words(&self) -> impl Iterator<Item = &str> {
        self.zero
            .iter()
            .chain(self.words.iter().flat_map(|t| t.values().flatten()))
            .flat_map(|w| w.split_whitespace())
    }

    /// Number of distinct decode tokens, zero words included.
    pub fn token_count(&self) -> usize {
        self.zero.len() + self.index.iter().map(HashMap::len).sum::<usize>()
    }
}

fn check_word(word: &str) -> Result<(), VocabularyError> {
    if word.is_empty() || word.trim() != word || word.to_lowercase() != word {
        return Err(VocabularyError::InvalidWord(word.to_string()));
    }
    Ok(())
}

/// 10^3, 10^6, .. up to and including `largest`.
fn group_ladder(largest: u64) -> Vec<u64> {
    let mut ladder = Vec::new();
    let mut m = 1_000u64;
    while m <= largest {
        ladder.push(m);
        m *= 1_000;
    }
    ladder
}
