//! Spelled-out cardinal numbers in English and Russian, in both directions.
//!
//! ```
//! use numeral_engine::{ConversionOptions, Engine};
//!
//! let engine = Engine::with_builtin();
//! let none = ConversionOptions::new();
//! assert_eq!(engine.decode("forty-two", "en", &none), Ok(42));
//! assert_eq!(engine.encode(2_000, "ru", &none).unwrap(), "две тысячи");
//! ```
//!
//! Everything lives in `numeral_core`; this crate re-exports it and adds
//! JSONL tracing output behind the `trace` feature.

pub mod trace_init;

pub use numeral_core::*;
pub use trace_init::init_tracing;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::settings::{default_toml, parse_settings_toml};

    fn none() -> ConversionOptions {
        ConversionOptions::new()
    }

    #[test]
    fn english_large_value() {
        let engine = Engine::with_builtin();
        assert_eq!(
            engine.encode(314_042_517_234_583, "en", &none()).unwrap(),
            "three hundred fourteen trillion forty-two billion five hundred seventeen million \
             two hundred thirty-four thousand five hundred eighty-three"
        );
    }

    #[test]
    fn english_options_per_call() {
        let engine = Engine::with_builtin();
        let a = ConversionOptions::new().with("onePrefix", "a");
        assert_eq!(engine.encode(100, "en", &a).unwrap(), "a hundred");
        assert_eq!(engine.decode("a hundred and seven", "en", &none()), Ok(107));
        assert_eq!(engine.decode("forty-two", "en", &none()), Ok(42));
    }

    #[test]
    fn russian_agreement() {
        let engine = Engine::with_builtin();
        assert_eq!(
            engine.encode(5_274, "ru", &none()).unwrap(),
            "пять тысяч двести семьдесят четыре"
        );
        assert!(engine.encode(1_000, "ru", &none()).unwrap().ends_with("тысяча"));
        assert!(engine.encode(2_000, "ru", &none()).unwrap().ends_with("тысячи"));
        assert!(engine.encode(5_000, "ru", &none()).unwrap().ends_with("тысяч"));
        assert_eq!(
            engine.decode(
                "сто пятьдесят два миллиарда триста восемьдесят пять миллионов сто двенадцать тысяч восемь",
                "ru",
                &none()
            ),
            Ok(152_385_112_008)
        );
    }

    #[test]
    fn same_value_in_both_languages() {
        let engine = Engine::with_builtin();
        for n in [0, 1, 19, 101, 2_022, 1_000_000, 999_999_999_999_999] {
            let en = engine.encode(n, "en", &none()).unwrap();
            let ru = engine.encode(n, "ru", &none()).unwrap();
            assert_eq!(engine.decode_auto(&en, None, &none()), Ok(n), "{en}");
            assert_eq!(engine.decode_auto(&ru, None, &none()), Ok(n), "{ru}");
        }
    }

    #[test]
    fn errors_are_reported() {
        let engine = Engine::with_builtin();
        assert_eq!(
            engine.decode("five zaza", "en", &none()),
            Err(ConvertError::UnrecognizedToken {
                token: "zaza".to_string(),
                position: 1
            })
        );
        assert_eq!(
            engine.encode(7, "xx", &none()),
            Err(ConvertError::LanguageNotFound("xx".to_string()))
        );
        assert!(matches!(
            engine.encode(1_000_000_000_000_000, "en", &none()),
            Err(ConvertError::OutOfRange { .. })
        ));
    }

    #[test]
    fn custom_identifier_and_grammar() {
        struct AlwaysBritish;
        impl LanguageIdentifier for AlwaysBritish {
            fn identify(&self, _text: &str) -> Option<String> {
                Some("en-gb".to_string())
            }
        }

        let mut registry = Registry::new();
        registry.register("en-gb", Box::new(English::new()));
        let engine = Engine::new(registry).with_identifier(Arc::new(AlwaysBritish));
        assert_eq!(engine.decode_auto("ninety nine", None, &none()), Ok(99));
    }

    #[test]
    fn engine_from_settings() {
        let settings = parse_settings_toml(
            r#"
    [engine]
    default_language = "ru"

    [identification]
    max_words = 64

    [options.en]
    useHyphen = "false"
    "#,
        )
        .unwrap();
        let engine = Engine::from_settings(&settings);
        assert_eq!(engine.encode(42, "en", &none()).unwrap(), "forty two");
        assert_eq!(engine.decode("forty two", "en", &none()), Ok(42));
    }

    #[test]
    fn default_settings_do_not_reroute_explicit_codes() {
        let engine = Engine::from_settings(&parse_settings_toml(default_toml()).unwrap());
        assert_eq!(
            engine.encode(5, "it", &none()),
            Err(ConvertError::LanguageNotFound("it".to_string()))
        );
        assert_eq!(
            engine.decode("five", "it", &none()),
            Err(ConvertError::LanguageNotFound("it".to_string()))
        );
    }
}
