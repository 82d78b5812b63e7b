//! Error types for reading, mutating and coercing values.

use crate::value::Kind;
use thiserror::Error;

/// Errors that can occur while parsing, building or reading a [`Value`](crate::Value).
#[derive(Error, Debug)]
pub enum ValueError {
    /// The input was not exactly one well-formed JSON document.
    /// `offset` is the byte position where the reader gave up.
    #[error("JSON parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    /// Text handed to a numeric setter does not match the JSON number grammar.
    #[error("invalid number text: {0:?}")]
    InvalidNumber(String),

    /// `set_float` was given NaN or an infinity, which JSON cannot represent.
    #[error("non-finite float cannot be stored as a JSON number")]
    NonFinite,

    /// A typed getter was called on a value of another kind.
    #[error("JSON value is not {expected} as expected (found {found})")]
    TypeMismatch { expected: &'static str, found: Kind },

    /// Integer text does not fit in the requested width.
    #[error("JSON integer out of range for {target}: {text}")]
    OutOfRange { text: String, target: &'static str },

    /// Integer accessor used on text with a fractional part or exponent.
    #[error("JSON number is not an integer: {0}")]
    NotAnInteger(String),

    /// Appending children to a value that is neither the container kind nor null.
    #[error("cannot append to a {found} value")]
    NotAContainer { found: Kind },

    /// Crossing into `serde_json` failed.
    #[error("serde_json conversion error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout rlpvalue.
pub type Result<T> = std::result::Result<T, ValueError>;
