//! Per-language grammar modules.
//!
//! A [`Grammar`] owns a [`Vocabulary`] (built once, shared by `Arc` between
//! clones) plus the rules that are specific to its language: how raw text is
//! normalized before tokenization, how one three-digit group is spelled, and
//! which form of a group noun ("thousand", "тысячи") follows it.

mod english;
mod entry;
pub mod normalize;
mod russian;
#[cfg(test)]
mod tests;
mod vocabulary;

pub use english::English;
pub use entry::{Category, GrammarEntry};
pub use russian::Russian;
pub use vocabulary::{parse_vocabulary_toml, token_key, Vocabulary, VocabularyError};

use crate::options::ConversionOptions;

/// Embedded vocabulary TOML of a built-in language.
pub fn builtin_toml(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some(english::DEFAULT_TOML),
        "ru" => Some(russian::DEFAULT_TOML),
        _ => None,
    }
}

/// One non-zero base-1000 group of a number being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupChunk {
    /// 1..=999
    pub value: u16,
    /// 1 for the units group, 1000 for thousands, and so on.
    pub magnitude: u64,
    /// Whether any word of the number comes before this group.
    pub has_preceding: bool,
}

impl GroupChunk {
    pub fn is_units(&self) -> bool {
        self.magnitude == 1
    }

    pub fn hundreds_digit(&self) -> u16 {
        self.value / 100
    }

    /// The last two digits, 0..=99.
    pub fn remainder(&self) -> u16 {
        self.value % 100
    }
}

/// Language-specific half of the conversion engine.
///
/// Implementations must be cheap to clone through [`Grammar::box_clone`]:
/// the vocabulary is shared and only the rendering options are copied.
pub trait Grammar: Send + Sync {
    /// Language code this grammar is registered under by default ("en").
    fn code(&self) -> &str;

    fn vocabulary(&self) -> &Vocabulary;

    /// Rewrite raw input into whitespace-separated vocabulary tokens.
    fn normalize(&self, text: &str) -> String;

    /// Spell the three-digit value of one group, without its group noun.
    fn render_group(&self, chunk: &GroupChunk) -> String;

    /// Group noun following `chunk`; `None` for the units group.
    fn group_name(&self, chunk: &GroupChunk) -> Option<String>;

    /// Set one rendering option. Unknown keys and unusable values are ignored.
    fn configure(&mut self, key: &str, value: &str);

    /// Current rendering options, as they would be passed to `configure`.
    fn options(&self) -> ConversionOptions;

    fn box_clone(&self) -> Box<dyn Grammar>;

    fn configure_all(&mut self, options: &ConversionOptions) {
        for (key, value) in options.iter() {
            self.configure(key, value);
        }
    }
}

impl Clone for Box<dyn Grammar> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
