//! Text clean-up shared by the language modules before tokenization.

/// Compile a regex once per process.
macro_rules! static_regex {
    ($re:literal) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).expect("static regex must compile"))
    }};
}
pub(crate) use static_regex;

/// Lower-case `text` and turn hyphens, dashes and punctuation into spaces.
///
/// "Forty-Two," becomes "forty two ".
pub fn fold_separators(text: &str) -> String {
    let lower = text.to_lowercase();
    static_regex!(r"[\-\x{2010}-\x{2015},;:.!?]+")
        .replace_all(&lower, " ")
        .into_owned()
}

/// Collapse runs of whitespace into single spaces and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
