use std::fs;

use numeral_core::grammar::{builtin_toml, parse_vocabulary_toml, Category};
use numeral_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let langs: Vec<&str> = s.option_languages().collect();
    println!(
        "OK: engine.default_language={}, identification.max_words={}, options=[{}]",
        s.engine.default_language,
        s.identification.max_words,
        langs.join(", ")
    );
}

/// Install a custom settings file for the rest of the process.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}

pub fn vocab_export(lang: &str) {
    match builtin_toml(&lang.to_lowercase()) {
        Some(toml) => print!("{toml}"),
        None => {
            eprintln!("Error: no built-in vocabulary for '{lang}'");
            std::process::exit(1);
        }
    }
}

pub fn vocab_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let vocab = die!(parse_vocabulary_toml(&content), "Error: {}");
    println!(
        "OK: {} tokens, largest group {} ({}), max value {}",
        vocab.token_count(),
        vocab.largest_group(),
        vocab.canonical(Category::Group, vocab.largest_group()),
        vocab.max_value()
    );
}
