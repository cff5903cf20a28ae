use numeral_core::{ConversionOptions, Engine};

/// Unwrap a result or print the error and exit with status 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod identify_ops;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid option '{0}': expected key=value")]
    InvalidOption(String),
    #[error("invalid range: {from} > {to}")]
    InvalidRange { from: u64, to: u64 },
}

/// Parse repeated `--opt key=value` arguments.
pub fn parse_options(pairs: &[String]) -> Result<ConversionOptions, CliError> {
    let mut options = ConversionOptions::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .filter(|(k, _)| !k.trim().is_empty())
            .ok_or_else(|| CliError::InvalidOption(pair.clone()))?;
        options.insert(key.trim(), value.trim());
    }
    Ok(options)
}

/// Engine configured from the process-wide settings.
pub(crate) fn engine() -> Engine {
    Engine::from_settings(numeral_core::settings::settings())
}
