use std::collections::HashMap;

use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::grammar::{English, Grammar, Russian};

/// Language code → grammar module.
///
/// Codes are stored lower-cased and matched exactly otherwise; there is no
/// region or script fallback ("en-GB" is not "en").
#[derive(Clone, Default)]
pub struct Registry {
    grammars: HashMap<String, Box<dyn Grammar>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the bundled English and Russian grammars.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("en", Box::new(English::new()));
        registry.register("ru", Box::new(Russian::new()));
        registry
    }

    /// Register `grammar` under `code`, replacing any previous entry.
    pub fn register(&mut self, code: &str, grammar: Box<dyn Grammar>) {
        let code = code.to_lowercase();
        debug!(code = %code, grammar = grammar.code(), "register grammar");
        self.grammars.insert(code, grammar);
    }

    pub fn resolve(&self, code: &str) -> ConvertResult<&dyn Grammar> {
        self.grammars
            .get(&code.to_lowercase())
            .map(|g| g.as_ref())
            .ok_or_else(|| ConvertError::LanguageNotFound(code.to_string()))
    }

    /// Resolve `code`, trying `fallback` on a miss. The error names `code`.
    pub fn resolve_or(&self, code: &str, fallback: Option<&str>) -> ConvertResult<&dyn Grammar> {
        match (self.resolve(code), fallback) {
            (Ok(grammar), _) => Ok(grammar),
            (Err(err), Some(fallback)) => {
                debug!(code, fallback, "language not registered, trying fallback");
                self.resolve(fallback).map_err(|_| err)
            }
            (Err(err), None) => Err(err),
        }
    }

    /// Set one option on the registered module for `code`.
    pub fn configure(&mut self, code: &str, key: &str, value: &str) -> ConvertResult<()> {
        let grammar = self
            .grammars
            .get_mut(&code.to_lowercase())
            .ok_or_else(|| ConvertError::LanguageNotFound(code.to_string()))?;
        grammar.configure(key, value);
        Ok(())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.grammars.contains_key(&code.to_lowercase())
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.grammars.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &dyn Grammar)> {
        self.grammars.iter().map(|(k, g)| (k.as_str(), g.as_ref()))
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("codes", &self.codes())
            .finish()
    }
}
