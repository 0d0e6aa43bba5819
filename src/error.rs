//! Error types shared by the engine and the normalization layer.

use thiserror::Error;

/// Structural contract violations. These are reported to the caller and never
/// corrected inside the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    #[error("expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid letter '{letter}' at position {position}")]
    InvalidLetter { letter: char, position: usize },

    #[error("invalid feedback symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

pub type Result<T> = std::result::Result<T, WordleError>;

/// Raised when raw input cannot be reduced to a well-formed attempt.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("could not recognize an attempt in {input:?}")]
    Unrecognized { input: String },

    #[error("extraction returned no {field}")]
    Missing { field: &'static str },

    #[error("malformed tool-call arguments: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] WordleError),
}

impl NormalizeError {
    /// True when the input did not have the shape a normalizer expects, as
    /// opposed to having that shape with bad contents.
    pub fn is_unrecognized(&self) -> bool {
        match self {
            NormalizeError::Unrecognized { .. } => true,
            NormalizeError::Json(err) => err.is_syntax() || err.is_eof(),
            NormalizeError::Missing { .. } | NormalizeError::Invalid(_) => false,
        }
    }
}
