//! # Error Types

/// Errors from bertqa operations.
#[derive(Debug, thiserror::Error)]
pub enum QaError {
    /// A vocabulary id does not fit in the target token type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// A reserved marker token is missing from the vocabulary.
    #[error("special token {token:?} is not in the vocabulary")]
    MissingSpecialToken {
        /// The missing token.
        token: String,
    },

    /// A token has no vocabulary id.
    #[error("token {token:?} is not in the vocabulary")]
    UnknownToken {
        /// The unresolved token.
        token: String,
    },

    /// Option values are inconsistent.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Logit arrays do not match the feature's sequence length.
    #[error("logits shape mismatch: expected {expected}, got start={start} end={end}")]
    LogitsShape {
        /// The feature sequence length.
        expected: usize,
        /// The start logits length.
        start: usize,
        /// The end logits length.
        end: usize,
    },

    /// An inference engine returned tensors of the wrong count or size.
    #[error("tensor shape error: {0}")]
    TensorShape(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Parse error (malformed files, missing fields, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for bertqa operations.
pub type QaResult<T> = core::result::Result<T, QaError>;
