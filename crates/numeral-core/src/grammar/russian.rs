use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::normalize::{collapse_whitespace, fold_separators};
use super::vocabulary::{parse_vocabulary_toml, Vocabulary, VocabularyError};
use super::{Category, Grammar, GroupChunk};
use crate::options::ConversionOptions;
use crate::plural::plural_form;

pub const DEFAULT_TOML: &str = include_str!("ru.toml");

/// Magnitude whose noun is feminine ("тысяча"): a final 1 or 2 in front of it
/// takes the feminine form.
const FEMININE_GROUP: u64 = 1_000;

/// Russian cardinals with gender and plural agreement.
///
/// "пять тысяч двести семьдесят четыре", "двадцать одна тысяча",
/// "два миллиона". No rendering options.
#[derive(Debug, Clone)]
pub struct Russian {
    vocab: Arc<Vocabulary>,
}

impl Russian {
    pub fn new() -> Self {
        Self::with_vocabulary(builtin_vocabulary())
    }

    pub fn with_vocabulary(vocab: Arc<Vocabulary>) -> Self {
        Self { vocab }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, VocabularyError> {
        Ok(Self::with_vocabulary(Arc::new(parse_vocabulary_toml(
            toml_str,
        )?)))
    }

    /// Ones word agreeing with the group noun that follows.
    fn ones_word(&self, digit: u16, magnitude: u64) -> &str {
        let forms = self.vocab.words(Category::Ones, u64::from(digit));
        if magnitude == FEMININE_GROUP && matches!(digit, 1 | 2) {
            if let Some(feminine) = forms.get(1) {
                return feminine;
            }
        }
        forms.first().map(String::as_str).unwrap_or("")
    }
}

impl Default for Russian {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_vocabulary() -> Arc<Vocabulary> {
    static INSTANCE: OnceLock<Arc<Vocabulary>> = OnceLock::new();
    INSTANCE
        .get_or_init(|| {
            Arc::new(
                parse_vocabulary_toml(DEFAULT_TOML)
                    .expect("embedded Russian vocabulary must be valid"),
            )
        })
        .clone()
}

impl Grammar for Russian {
    fn code(&self) -> &str {
        "ru"
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    fn normalize(&self, text: &str) -> String {
        let folded = fold_separators(text).replace('ё', "е");
        collapse_whitespace(&folded)
    }

    fn render_group(&self, chunk: &GroupChunk) -> String {
        let mut words: Vec<&str> = Vec::with_capacity(3);
        let hundreds = chunk.hundreds_digit();
        let rest = chunk.remainder();

        if hundreds > 0 {
            words.push(
                self.vocab
                    .canonical(Category::Hundreds, u64::from(hundreds) * 100),
            );
        }
        match rest {
            0 => {}
            10..=19 => words.push(self.vocab.canonical(Category::Tens, u64::from(rest))),
            _ => {
                if rest >= 20 {
                    words.push(self.vocab.canonical(Category::Tens, u64::from(rest / 10 * 10)));
                }
                if rest % 10 > 0 {
                    words.push(self.ones_word(rest % 10, chunk.magnitude));
                }
            }
        }

        words.join(" ")
    }

    fn group_name(&self, chunk: &GroupChunk) -> Option<String> {
        if chunk.is_units() {
            return None;
        }
        let forms = self.vocab.words(Category::Group, chunk.magnitude);
        plural_form(u64::from(chunk.value))
            .select(forms)
            .map(str::to_string)
    }

    fn configure(&mut self, key: &str, value: &str) {
        debug!(key, value, "russian grammar has no options");
    }

    fn options(&self) -> ConversionOptions {
        ConversionOptions::new()
    }

    fn box_clone(&self) -> Box<dyn Grammar> {
        Box::new(self.clone())
    }
}
