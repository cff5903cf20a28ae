/// Failure of a decode or encode call.
///
/// Every variant reflects malformed input or configuration, so none of them
/// is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("no grammar registered for language '{0}'")]
    LanguageNotFound(String),

    #[error("unrecognized token \"{token}\" at position {position}")]
    UnrecognizedToken { token: String, position: usize },

    #[error("{value} is out of range (largest representable value is {max})")]
    OutOfRange { value: u64, max: u64 },
}

impl ConvertError {
    pub(crate) fn unrecognized(token: &str, position: usize) -> Self {
        ConvertError::UnrecognizedToken {
            token: token.to_string(),
            position,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
