use std::sync::{Arc, OnceLock};

use regex::Captures;
use tracing::debug;

use super::normalize::{collapse_whitespace, fold_separators, static_regex};
use super::vocabulary::{parse_vocabulary_toml, Vocabulary, VocabularyError};
use super::{Category, Grammar, GroupChunk};
use crate::options::ConversionOptions;

pub const DEFAULT_TOML: &str = include_str!("en.toml");

const OPT_ONE_PREFIX: &str = "oneprefix";
const OPT_USE_HYPHEN: &str = "usehyphen";

/// Word placed before "hundred" for 100..=199.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnePrefix {
    One,
    A,
}

impl OnePrefix {
    fn as_str(self) -> &'static str {
        match self {
            OnePrefix::One => "one",
            OnePrefix::A => "a",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("one") {
            Some(OnePrefix::One)
        } else if value.eq_ignore_ascii_case("a") {
            Some(OnePrefix::A)
        } else {
            None
        }
    }
}

/// English cardinals: "three hundred fourteen trillion forty-two billion ...".
///
/// Options:
/// - `onePrefix` = `one` | `a`: "one hundred" or "a hundred" (default `one`)
/// - `useHyphen` = `true` | `false`: "forty-two" or "forty two" (default `true`)
///
/// "and" is placed before a final 1..=9 remainder of the units group whenever
/// any word precedes it: "one hundred and seven", "two thousand and eight",
/// but "seven" and "one hundred eighteen".
#[derive(Debug, Clone)]
pub struct English {
    vocab: Arc<Vocabulary>,
    one_prefix: OnePrefix,
    use_hyphen: bool,
}

impl English {
    pub fn new() -> Self {
        Self::with_vocabulary(builtin_vocabulary())
    }

    pub fn with_vocabulary(vocab: Arc<Vocabulary>) -> Self {
        Self {
            vocab,
            one_prefix: OnePrefix::One,
            use_hyphen: true,
        }
    }

    /// Build from a custom vocabulary TOML in the same format as the default.
    pub fn from_toml(toml_str: &str) -> Result<Self, VocabularyError> {
        Ok(Self::with_vocabulary(Arc::new(parse_vocabulary_toml(
            toml_str,
        )?)))
    }

    /// Word for `digit` hundreds; 100 follows the `onePrefix` option.
    fn hundreds_word(&self, digit: u16) -> &str {
        let value = u64::from(digit) * 100;
        if digit == 1 {
            let prefix = self.one_prefix.as_str();
            let chosen = self
                .vocab
                .words(Category::Hundreds, value)
                .iter()
                .find(|w| w.split_whitespace().next() == Some(prefix));
            if let Some(word) = chosen {
                return word;
            }
        }
        self.vocab.canonical(Category::Hundreds, value)
    }
}

impl Default for English {
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
                    .expect("embedded English vocabulary must be valid"),
            )
        })
        .clone()
}

impl Grammar for English {
    fn code(&self) -> &str {
        "en"
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    fn normalize(&self, text: &str) -> String {
        let s = fold_separators(text);
        // "five hundred and seven" -> "five hundred seven"
        let s = static_regex!(r"\band\b").replace_all(&s, " ");
        // "a million" -> "one million"
        let s = static_regex!(r"\ba\s+(thousand|million|billion|trillion)\b")
            .replace_all(&s, "one $1");
        // "five hundred" -> "five_hundred", only where the joined token exists
        let s = static_regex!(r"\b(\w+)\s+hundred\b").replace_all(&s, |caps: &Captures| {
            let joined = format!("{}_hundred", &caps[1]);
            if self.vocab.lookup(&joined).is_some() {
                joined
            } else {
                caps[0].to_string()
            }
        });
        collapse_whitespace(&s)
    }

    fn render_group(&self, chunk: &GroupChunk) -> String {
        let mut words: Vec<&str> = Vec::with_capacity(4);
        let hundreds = chunk.hundreds_digit();
        let rest = chunk.remainder();

        if hundreds > 0 {
            words.push(self.hundreds_word(hundreds));
        }

        let compound;
        match rest {
            0 => {}
            1..=9 => {
                if chunk.is_units() && (hundreds > 0 || chunk.has_preceding) {
                    words.push("and");
                }
                words.push(self.vocab.canonical(Category::Ones, u64::from(rest)));
            }
            10..=19 => words.push(self.vocab.canonical(Category::Tens, u64::from(rest))),
            _ => {
                let tens = self.vocab.canonical(Category::Tens, u64::from(rest / 10 * 10));
                let ones = rest % 10;
                if ones == 0 {
                    words.push(tens);
                } else {
                    let sep = if self.use_hyphen { "-" } else { " " };
                    let ones = self.vocab.canonical(Category::Ones, u64::from(ones));
                    compound = format!("{tens}{sep}{ones}");
                    words.push(&compound);
                }
            }
        }

        words.join(" ")
    }

    fn group_name(&self, chunk: &GroupChunk) -> Option<String> {
        if chunk.is_units() {
            return None;
        }
        Some(
            self.vocab
                .canonical(Category::Group, chunk.magnitude)
                .to_string(),
        )
    }

    fn configure(&mut self, key: &str, value: &str) {
        match key.to_lowercase().as_str() {
            OPT_ONE_PREFIX => match OnePrefix::parse(value) {
                Some(prefix) => self.one_prefix = prefix,
                None => debug!(key, value, "ignoring unsupported onePrefix value"),
            },
            OPT_USE_HYPHEN => {
                if value.eq_ignore_ascii_case("true") {
                    self.use_hyphen = true;
                } else if value.eq_ignore_ascii_case("false") {
                    self.use_hyphen = false;
                } else {
                    debug!(key, value, "ignoring unsupported useHyphen value");
                }
            }
            _ => debug!(key, "ignoring unknown option"),
        }
    }

    fn options(&self) -> ConversionOptions {
        ConversionOptions::new()
            .with("onePrefix", self.one_prefix.as_str())
            .with("useHyphen", if self.use_hyphen { "true" } else { "false" })
    }

    fn box_clone(&self) -> Box<dyn Grammar> {
        Box::new(self.clone())
    }
}
