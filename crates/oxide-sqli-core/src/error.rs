//! Error types for building a rendering configuration.

/// Errors raised while constructing a [`Config`](crate::Config).
///
/// Rendering itself never fails; every invalid option is rejected here,
/// when the configuration is built.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Unknown keyword case policy.
    #[error("invalid keyword case: '{0}' (expected none, lower, upper or random)")]
    InvalidCase(String),

    /// Unknown string quoting style.
    #[error("invalid quoting style: '{0}' (expected single, double or backtick)")]
    InvalidQuote(String),

    /// Unknown parenthesis preference.
    #[error("invalid parenthesis preference: '{0}' (expected more or less)")]
    InvalidParens(String),

    /// Unknown injection escape context.
    #[error("invalid escape context: '{0}' (expected integer, decimal, string, list or column)")]
    InvalidEscape(String),

    /// Malformed JSON configuration document.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
