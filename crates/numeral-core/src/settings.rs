//! Global settings loaded from TOML, using a OnceLock singleton.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::options::ConversionOptions;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub engine: EngineSettings,
    pub identification: IdentificationSettings,
    #[serde(default)]
    options: BTreeMap<String, BTreeMap<String, toml::Value>>,
    /// Parsed options: language code → rendering options.
    #[serde(skip)]
    options_parsed: BTreeMap<String, ConversionOptions>,
}

impl Settings {
    /// Rendering options configured for `code`; empty when none are.
    pub fn options_for(&self, code: &str) -> ConversionOptions {
        self.options_parsed
            .get(&code.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Languages with an `[options.<code>]` table.
    pub fn option_languages(&self) -> impl Iterator<Item = &str> {
        self.options_parsed.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    pub default_language: String,
    #[serde(default)]
    pub fallback_language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentificationSettings {
    pub max_words: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.options_parsed = parse_options(&s.options)?;
    Ok(s)
}

fn parse_options(
    raw: &BTreeMap<String, BTreeMap<String, toml::Value>>,
) -> Result<BTreeMap<String, ConversionOptions>, SettingsError> {
    let mut result = BTreeMap::new();
    for (code, table) in raw {
        check_language_code(&format!("options.{code}"), code)?;
        let mut options = ConversionOptions::new();
        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Integer(i) => i.to_string(),
                _ => {
                    return Err(SettingsError::InvalidValue {
                        field: format!("options.{code}.{key}"),
                        reason: "must be a string, boolean or integer".to_string(),
                    })
                }
            };
            options.insert(key, &value);
        }
        result.insert(code.to_lowercase(), options);
    }
    Ok(result)
}

fn check_language_code(field: &str, code: &str) -> Result<(), SettingsError> {
    if !(2..=3).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(SettingsError::InvalidValue {
            field: field.to_string(),
            reason: format!("'{code}' is not a 2-3 letter language code"),
        });
    }
    Ok(())
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    check_language_code("engine.default_language", &s.engine.default_language)?;
    if let Some(fallback) = &s.engine.fallback_language {
        check_language_code("engine.fallback_language", fallback)?;
    }
    if s.identification.max_words == 0 {
        return Err(SettingsError::InvalidValue {
            field: "identification.max_words".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}
