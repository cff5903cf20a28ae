use numeral_core::{ConversionOptions, Grammar};

use super::{engine, parse_options, CliError};

pub fn encode_cmd(value: u64, lang: Option<&str>, opts: &[String]) {
    let options = die!(parse_options(opts), "Error: {}");
    let settings = numeral_core::settings::settings();
    let lang = lang.unwrap_or(&settings.engine.default_language);
    let text = die!(engine().encode(value, lang, &options), "Error: {}");
    println!("{text}");
}

pub fn decode_cmd(text: &str, lang: Option<&str>, fallback: Option<&str>, opts: &[String]) {
    let options = die!(parse_options(opts), "Error: {}");
    let engine = engine();
    let value = match lang {
        Some(lang) => engine.decode(text, lang, &options),
        None => engine.decode_auto(text, fallback, &options),
    };
    println!("{}", die!(value, "Error: {}"));
}

/// Check decode(encode(n)) == n for every n in `from..=to`.
pub fn roundtrip_cmd(lang: Option<&str>, from: u64, to: u64, opts: &[String]) {
    if from > to {
        eprintln!("Error: {}", CliError::InvalidRange { from, to });
        std::process::exit(1);
    }
    let options = die!(parse_options(opts), "Error: {}");
    let settings = numeral_core::settings::settings();
    let lang = lang.unwrap_or(&settings.engine.default_language);
    let grammar = die!(configured_grammar(lang, &options), "Error: {}");

    let mut failures = 0u64;
    for n in from..=to {
        if let Some(problem) = check_roundtrip(grammar.as_ref(), n) {
            failures += 1;
            if failures <= 20 {
                eprintln!("FAIL {n}: {problem}");
            }
        }
    }

    let total = to - from + 1;
    if failures > 0 {
        eprintln!("{failures}/{total} values failed ({lang})");
        std::process::exit(1);
    }
    println!("OK: {total} values round-trip ({lang})");
}

fn configured_grammar(
    lang: &str,
    options: &ConversionOptions,
) -> numeral_core::ConvertResult<Box<dyn Grammar>> {
    let engine = engine();
    let mut grammar = engine.registry().resolve(lang)?.box_clone();
    grammar.configure_all(options);
    Ok(grammar)
}

/// Description of the mismatch for `n`, if any.
pub fn check_roundtrip(grammar: &dyn Grammar, n: u64) -> Option<String> {
    let text = match numeral_core::encode(grammar, n) {
        Ok(text) => text,
        Err(e) => return Some(format!("encode failed: {e}")),
    };
    match numeral_core::decode(grammar, &text) {
        Ok(back) if back == n => None,
        Ok(back) => Some(format!("{text:?} decoded as {back}")),
        Err(e) => Some(format!("{text:?} failed to decode: {e}")),
    }
}
