//! JSONL trace output for conversion spans.

use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

use numeral_core::{Registry, Settings};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "numeral_core=debug,numeral_engine=debug";

/// File created inside the log directory.
pub const TRACE_FILE: &str = "numeral-trace.jsonl";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Which languages an engine built from `Settings` will answer for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSummary {
    pub registered: Vec<String>,
    pub default_language: String,
    pub fallback_language: Option<String>,
    /// `[options.<code>]` tables with no grammar behind them.
    pub unused_options: Vec<String>,
    /// Configured languages (default or fallback) that are not registered.
    pub missing: Vec<String>,
}

impl LanguageSummary {
    pub fn new(registry: &Registry, settings: &Settings) -> Self {
        let registered: Vec<String> = registry.codes().into_iter().map(str::to_string).collect();
        let unused_options = settings
            .option_languages()
            .filter(|code| !registry.contains(code))
            .map(str::to_string)
            .collect();
        let missing = std::iter::once(settings.engine.default_language.as_str())
            .chain(settings.engine.fallback_language.as_deref())
            .filter(|code| !registry.contains(code))
            .map(str::to_string)
            .collect();
        Self {
            registered,
            default_language: settings.engine.default_language.clone(),
            fallback_language: settings.engine.fallback_language.clone(),
            unused_options,
            missing,
        }
    }
}

/// Write conversion spans as JSON lines to `<log_dir>/numeral-trace.jsonl`.
///
/// Only the first call installs the subscriber. It then records the built-in
/// languages against the process-wide settings.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // the writer stops flushing once the guard drops
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();

        let summary =
            LanguageSummary::new(&Registry::with_builtin(), numeral_core::settings::settings());
        tracing::debug!(
            log_dir = %log_dir.display(),
            registered = ?summary.registered,
            default_language = %summary.default_language,
            fallback_language = ?summary.fallback_language,
            "tracing initialized"
        );
        if !summary.unused_options.is_empty() {
            tracing::debug!(codes = ?summary.unused_options, "options for unregistered languages");
        }
        if !summary.missing.is_empty() {
            tracing::warn!(codes = ?summary.missing, "configured language is not registered");
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;
    use numeral_core::settings::{default_toml, parse_settings_toml};

    #[test]
    fn default_settings_are_fully_served() {
        let settings = parse_settings_toml(default_toml()).unwrap();
        let summary = LanguageSummary::new(&Registry::with_builtin(), &settings);
        assert_eq!(summary.registered, vec!["en", "ru"]);
        assert!(summary.unused_options.is_empty());
        assert!(summary.missing.is_empty());
    }

    #[test]
    fn reports_unregistered_configuration() {
        let settings = parse_settings_toml(
            r#"
[engine]
default_language = "de"
fallback_language = "ru"

[identification]
max_words = 16

[options.fr]
foo = "bar"
"#,
        )
        .unwrap();
        let summary = LanguageSummary::new(&Registry::with_builtin(), &settings);
        assert_eq!(summary.unused_options, vec!["fr"]);
        assert_eq!(summary.missing, vec!["de"]);
        assert_eq!(summary.fallback_language.as_deref(), Some("ru"));
    }
}
