//! Error types for the GEX calculator.
//!
//! The exposure calculation itself is infallible: degenerate model inputs are
//! neutralised to a zero gamma and empty selections produce an empty result.
//! Errors only surface at the edges, when validating configuration, mapping
//! provider option-type strings, or encoding results.

use thiserror::Error;

/// Errors produced by the GEX calculator.
#[derive(Debug, Error)]
pub enum Error {
    /// A calculation parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An option-type string could not be mapped to a call or a put.
    #[error("invalid option style: {0}")]
    InvalidOptionStyle(String),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an [`Error::InvalidConfig`] with the given message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates an [`Error::InvalidOptionStyle`] for the offending value.
    pub fn invalid_option_style(value: impl Into<String>) -> Self {
        Self::InvalidOptionStyle(value.into())
    }
}
