//! Error types for serialization and reconstruction.

use thiserror::Error;

/// Errors from [`to_json`](crate::to_json) and [`from_json`](crate::from_json).
#[derive(Error, Debug)]
pub enum ObjectError {
    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The value could not be encoded (e.g. a map with non-string keys).
    #[error("cannot serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The document supplied a different number of values than the
    /// constructor takes.
    #[error("constructor takes {expected} argument(s), JSON supplied {found}")]
    Arity {
        /// Arguments the constructor takes.
        expected: usize,
        /// Values found in the document.
        found: usize,
    },

    /// A positional value has the wrong JSON type.
    #[error("argument {position} must be a {expected}")]
    InvalidArgument {
        /// Zero-based position of the value.
        position: usize,
        /// Human-readable name of the expected type.
        expected: &'static str,
    },
}
