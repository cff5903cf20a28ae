use std::path::Path;

use serde::Serialize;

use numeral_core::{Registry, WordListIdentifier};

use crate::dict_source::load_word_lists;

#[derive(Debug, Serialize)]
struct Score {
    language: String,
    score: f64,
}

pub fn identify_cmd(text: &str, dict_dir: Option<&str>, json: bool) {
    let max_words = numeral_core::settings::settings().identification.max_words;
    let identifier = match dict_dir {
        Some(dir) => die!(
            load_word_lists(Path::new(dir)),
            "Error loading dictionaries from {dir}: {}"
        ),
        None => WordListIdentifier::from_registry(&Registry::with_builtin()),
    }
    .with_max_words(max_words);

    let ranked: Vec<Score> = identifier
        .ranked(text)
        .into_iter()
        .map(|(language, score)| Score { language, score })
        .collect();

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&ranked), "Error: {}")
        );
        return;
    }
    if ranked.is_empty() {
        println!("und");
        return;
    }
    for (i, s) in ranked.iter().enumerate() {
        println!("#{:>2}: {} {:.4}", i + 1, s.language, s.score);
    }
}
