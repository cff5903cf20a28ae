//! Guessing the language of free text from word-list overlap.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, debug_span};

use crate::registry::Registry;

/// Default cap on the number of words examined per call.
pub const DEFAULT_MAX_WORDS: usize = 1024;

/// Collaborator that names the language a text is written in.
pub trait LanguageIdentifier: Send + Sync {
    /// Best-guess language code, or `None` when nothing matches.
    fn identify(&self, text: &str) -> Option<String>;
}

/// Scores each language by the share of its dictionary found in the text.
///
/// The text is split on every non-alphanumeric character and lower-cased;
/// at most `max_words` words are examined. A language's score is the number
/// of words (with repetition) present in its dictionary, divided by the
/// dictionary size. Languages scoring zero are dropped.
#[derive(Debug, Clone)]
pub struct WordListIdentifier {
    /// Sorted by code so ties rank deterministically.
    dictionaries: BTreeMap<String, HashSet<String>>,
    max_words: usize,
}

impl WordListIdentifier {
    pub fn from_word_lists<I, W, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (S, W)>,
        W: IntoIterator,
        W::Item: AsRef<str>,
        S: AsRef<str>,
    {
        let dictionaries = lists
            .into_iter()
            .map(|(code, words)| {
                let words: HashSet<String> = words
                    .into_iter()
                    .map(|w| w.as_ref().trim().to_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect();
                (code.as_ref().to_lowercase(), words)
            })
            .filter(|(_, words)| !words.is_empty())
            .collect();
        Self {
            dictionaries,
            max_words: DEFAULT_MAX_WORDS,
        }
    }

    /// Dictionaries made of every word of every registered vocabulary.
    pub fn from_registry(registry: &Registry) -> Self {
        let lists: Vec<(String, Vec<String>)> = registry
            .iter()
            .map(|(code, grammar)| {
                let words = grammar
                    .vocabulary()
                    .all_words()
                    .map(str::to_string)
                    .collect();
                (code.to_string(), words)
            })
            .collect();
        Self::from_word_lists(lists)
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words.max(1);
        self
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    /// Every language with a non-zero score, best first.
    pub fn ranked(&self, text: &str) -> Vec<(String, f64)> {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .take(self.max_words)
            .collect();
        let _span = debug_span!("identify", word_count = words.len()).entered();

        let mut scores: Vec<(String, f64)> = self
            .dictionaries
            .iter()
            .filter_map(|(code, dict)| {
                let hits = words.iter().filter(|w| dict.contains(**w)).count();
                (hits > 0).then(|| (code.clone(), hits as f64 / dict.len() as f64))
            })
            .collect();
        // stable sort keeps code order among equal scores
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        debug!(?scores, "language scores");
        scores
    }
}

impl LanguageIdentifier for WordListIdentifier {
    fn identify(&self, text: &str) -> Option<String> {
        self.ranked(text).into_iter().next().map(|(code, _)| code)
    }
}
