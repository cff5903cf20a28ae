//! Language-dispatching front end over the registry.

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::convert;
use crate::error::{ConvertError, ConvertResult};
use crate::grammar::Grammar;
use crate::identify::{LanguageIdentifier, WordListIdentifier};
use crate::options::ConversionOptions;
use crate::registry::Registry;
use crate::settings::Settings;

/// Code reported when auto-detection has nothing to go on.
pub const UNDETERMINED: &str = "und";

/// Owns the registry and the optional language identifier.
///
/// Per-call options are applied to a private copy of the registered grammar,
/// so an `Engine` can be shared between threads and calls never see each
/// other's options.
#[derive(Clone)]
pub struct Engine {
    registry: Registry,
    identifier: Option<Arc<dyn LanguageIdentifier>>,
    fallback: Option<String>,
}

impl Engine {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            identifier: None,
            fallback: None,
        }
    }

    /// English and Russian, with a word-list identifier built from them.
    pub fn with_builtin() -> Self {
        let registry = Registry::with_builtin();
        let identifier = WordListIdentifier::from_registry(&registry);
        Self::new(registry).with_identifier(Arc::new(identifier))
    }

    /// Built-in grammars configured from `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut registry = Registry::with_builtin();
        for code in settings.option_languages() {
            for (key, value) in settings.options_for(code).iter() {
                // languages without a registered grammar are skipped
                if registry.configure(code, key, value).is_err() {
                    debug!(code, "options for unregistered language");
                    break;
                }
            }
        }
        let identifier = WordListIdentifier::from_registry(&registry)
            .with_max_words(settings.identification.max_words);

        let mut engine = Self::new(registry).with_identifier(Arc::new(identifier));
        engine.fallback = settings.engine.fallback_language.clone();
        engine
    }

    pub fn with_identifier(mut self, identifier: Arc<dyn LanguageIdentifier>) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Language `decode_auto` uses when identification fails or names an
    /// unregistered language. Explicit `decode`/`encode` never fall back.
    pub fn with_fallback(mut self, code: &str) -> Self {
        self.fallback = Some(code.to_lowercase());
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn register_grammar(&mut self, code: &str, grammar: Box<dyn Grammar>) {
        self.registry.register(code, grammar);
    }

    /// Set an option on the registered grammar itself; affects later calls.
    pub fn configure(&mut self, code: &str, key: &str, value: &str) -> ConvertResult<()> {
        self.registry.configure(code, key, value)
    }

    /// Decode `text` written in `language`.
    pub fn decode(
        &self,
        text: &str,
        language: &str,
        options: &ConversionOptions,
    ) -> ConvertResult<u64> {
        let grammar = self.grammar_for(language, options)?;
        convert::decode(grammar.as_ref(), text)
    }

    /// Decode `text` in whatever language the identifier recognizes.
    ///
    /// The identified language is used when registered; otherwise `fallback`
    /// (or the engine's own fallback). With no identification and no fallback
    /// the call fails with `LanguageNotFound("und")`.
    pub fn decode_auto(
        &self,
        text: &str,
        fallback: Option<&str>,
        options: &ConversionOptions,
    ) -> ConvertResult<u64> {
        let _span = debug_span!("decode_auto").entered();
        let fallback = fallback.or(self.fallback.as_deref());
        let identified = self.identifier.as_ref().and_then(|id| id.identify(text));
        debug!(?identified, ?fallback, "identified language");

        let registered = match (identified, fallback) {
            (Some(code), fallback) => self.registry.resolve_or(&code, fallback)?,
            (None, Some(fallback)) => self.registry.resolve(fallback)?,
            (None, None) => return Err(ConvertError::LanguageNotFound(UNDETERMINED.to_string())),
        };
        let grammar = with_options(registered, options);
        convert::decode(grammar.as_ref(), text)
    }

    /// Spell `value` in `language`.
    pub fn encode(
        &self,
        value: u64,
        language: &str,
        options: &ConversionOptions,
    ) -> ConvertResult<String> {
        let grammar = self.grammar_for(language, options)?;
        convert::encode(grammar.as_ref(), value)
    }

    /// Copy of the grammar registered for `language` with `options` applied.
    fn grammar_for(
        &self,
        language: &str,
        options: &ConversionOptions,
    ) -> ConvertResult<Box<dyn Grammar>> {
        Ok(with_options(self.registry.resolve(language)?, options))
    }
}

fn with_options(grammar: &dyn Grammar, options: &ConversionOptions) -> Box<dyn Grammar> {
    let mut grammar = grammar.box_clone();
    grammar.configure_all(options);
    grammar
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("has_identifier", &self.identifier.is_some())
            .field("fallback", &self.fallback)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::English;
    use crate::settings::{default_toml, parse_settings_toml};

    fn none() -> ConversionOptions {
        ConversionOptions::new()
    }

    struct Fixed(Option<&'static str>);

    impl LanguageIdentifier for Fixed {
        fn identify(&self, _text: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn encode_and_decode_by_code() {
        let engine = Engine::with_builtin();
        assert_eq!(engine.decode("forty-two", "en", &none()), Ok(42));
        assert_eq!(
            engine.encode(5_274, "ru", &none()).unwrap(),
            "пять тысяч двести семьдесят четыре"
        );
        assert_eq!(
            engine.encode(1, "it", &none()),
            Err(ConvertError::LanguageNotFound("it".to_string()))
        );
        assert_eq!(
            engine.decode("uno", "it", &none()),
            Err(ConvertError::LanguageNotFound("it".to_string()))
        );
    }

    #[test]
    fn per_call_options_are_isolated() {
        let engine = Engine::with_builtin();
        let a = ConversionOptions::new().with("onePrefix", "a");
        assert_eq!(engine.encode(100, "en", &a).unwrap(), "a hundred");
        // the registered grammar is untouched
        assert_eq!(engine.encode(100, "en", &none()).unwrap(), "one hundred");
    }

    #[test]
    fn configure_changes_later_calls() {
        let mut engine = Engine::with_builtin();
        engine.configure("en", "useHyphen", "false").unwrap();
        assert_eq!(engine.encode(42, "en", &none()).unwrap(), "forty two");
        // per-call options still win
        let hyphen = ConversionOptions::new().with("useHyphen", "true");
        assert_eq!(engine.encode(42, "en", &hyphen).unwrap(), "forty-two");
    }

    #[test]
    fn decode_auto_identifies_language() {
        let engine = Engine::with_builtin();
        assert_eq!(
            engine.decode_auto("сто пятьдесят два", None, &none()),
            Ok(152)
        );
        assert_eq!(
            engine.decode_auto("a hundred and seven", None, &none()),
            Ok(107)
        );
    }

    #[test]
    fn decode_auto_falls_back() {
        let engine = Engine::new(Registry::with_builtin())
            .with_identifier(Arc::new(Fixed(None)));
        assert_eq!(engine.decode_auto("seven", Some("en"), &none()), Ok(7));
        assert_eq!(
            engine.decode_auto("seven", None, &none()),
            Err(ConvertError::LanguageNotFound(UNDETERMINED.to_string()))
        );

        // identified language without a grammar
        let engine = Engine::new(Registry::with_builtin())
            .with_identifier(Arc::new(Fixed(Some("fr"))));
        assert_eq!(engine.decode_auto("семь", Some("ru"), &none()), Ok(7));
        assert_eq!(
            engine.decode_auto("sept", None, &none()),
            Err(ConvertError::LanguageNotFound("fr".to_string()))
        );
    }

    #[test]
    fn decode_auto_without_identifier() {
        let engine = Engine::new(Registry::with_builtin()).with_fallback("ru");
        assert_eq!(engine.decode_auto("две тысячи", None, &none()), Ok(2_000));
    }

    #[test]
    fn register_custom_grammar() {
        let mut engine = Engine::with_builtin();
        let mut british = English::new();
        british.configure("onePrefix", "a");
        engine.register_grammar("en-GB", Box::new(british));
        assert_eq!(engine.encode(100, "en-gb", &none()).unwrap(), "a hundred");
        assert_eq!(engine.encode(100, "en", &none()).unwrap(), "one hundred");
    }

    #[test]
    fn from_settings_applies_options() {
        let toml = r#"
[engine]
default_language = "en"
fallback_language = "ru"

[identification]
max_words = 8

[options.en]
onePrefix = "a"
useHyphen = "false"

[options.de]
foo = "bar"
"#;
        let settings = parse_settings_toml(toml).unwrap();
        let engine = Engine::from_settings(&settings);
        assert_eq!(engine.encode(142, "en", &none()).unwrap(), "a hundred forty two");
        // the configured fallback only applies to auto-detection
        assert_eq!(
            engine.encode(2, "it", &none()),
            Err(ConvertError::LanguageNotFound("it".to_string()))
        );
        // nothing identified, so the "ru" fallback reports the bad token
        assert_eq!(
            engine.decode_auto("zaza", None, &none()),
            Err(ConvertError::UnrecognizedToken {
                token: "zaza".to_string(),
                position: 0
            })
        );
    }

    #[test]
    fn default_settings_keep_explicit_codes_strict() {
        let settings = parse_settings_toml(default_toml()).unwrap();
        assert!(settings.engine.fallback_language.is_some());
        let engine = Engine::from_settings(&settings);
        assert_eq!(
            engine.encode(5, "it", &none()),
            Err(ConvertError::LanguageNotFound("it".to_string()))
        );
        assert_eq!(
            engine.decode("five", "it", &none()),
            Err(ConvertError::LanguageNotFound("it".to_string()))
        );
        assert_eq!(engine.encode(5, "en", &none()).unwrap(), "five");
    }

    #[test]
    fn shared_between_threads() {
        let engine = Engine::with_builtin();
        std::thread::scope(|s| {
            let a = s.spawn(|| {
                let opts = ConversionOptions::new().with("onePrefix", "a");
                (0..200)
                    .map(|_| engine.encode(100, "en", &opts).unwrap())
                    .collect::<Vec<_>>()
            });
            let b = s.spawn(|| {
                (0..200)
                    .map(|_| engine.encode(100, "en", &none()).unwrap())
                    .collect::<Vec<_>>()
            });
            assert!(a.join().unwrap().iter().all(|t| t == "a hundred"));
            assert!(b.join().unwrap().iter().all(|t| t == "one hundred"));
        });
    }
}
