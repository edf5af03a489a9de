// File: src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MintError>;

/// Everything that can stop a recognition request or a metadata load.
///
/// "No denomination matched" and "no serial found" are not errors; they surface
/// as empty strings in [`crate::core::types::RecognitionResult`].
#[derive(Error, Debug)]
pub enum MintError {
    #[error("unknown currency code '{0}'")]
    UnknownCurrencyCode(String),

    #[error("currency '{0}' has no recognition metadata")]
    CurrencyNotConfigured(String),

    #[error("denomination '{denomination}' is not registered for currency '{code}'")]
    InvalidDenomination { code: String, denomination: String },

    /// A serial directive reference names a key that the tree does not define.
    #[error("serial directive '{0}' not defined")]
    DirectiveNotDefined(String),

    /// A reference resolved to another reference (only one hop is allowed).
    #[error("unsupported reference to serial directive '{0}'")]
    UnsupportedDirectiveType(String),

    #[error("not money")]
    NotMoney,

    #[error("text mark check failed for currency '{0}'")]
    TextMarkMismatch(String),

    #[error("invalid pattern '{pattern}' in {context}: {reason}")]
    InvalidPattern {
        context: String,
        pattern: String,
        reason: String,
    },

    #[error("invalid currency metadata: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MintError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        MintError::InvalidConfig(message.into())
    }
}
