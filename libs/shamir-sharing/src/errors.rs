//! Secret reconstruction errors.

use math_lib::errors::{InterpolationError, PolynomialError};
use thiserror::Error;

/// A share value could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The radix is outside of the supported range.
    #[error("radix {0} is out of range, it must be between 2 and 36")]
    RadixOutOfRange(i64),

    /// The radix is not a number.
    #[error("radix {0:?} is not a number")]
    InvalidRadix(String),

    /// The value has no digits.
    #[error("value is empty")]
    EmptyValue,

    /// The value contains a character that is not a digit in the radix.
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        /// The offending character.
        digit: char,

        /// Its position in the value, counted in characters.
        position: usize,

        /// The radix the value was decoded with.
        radix: u32,
    },
}

/// The share document does not have the expected structure.
#[derive(Error, Debug)]
pub enum MalformedInputError {
    /// The document is not valid JSON.
    #[error("document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not a JSON object.
    #[error("document is not an object")]
    NotAnObject,

    /// The `keys` field is missing.
    #[error("missing 'keys' field")]
    MissingKeys,

    /// The `keys` field is not an object.
    #[error("'keys' is not an object")]
    KeysNotAnObject,

    /// The threshold `keys.k` is missing.
    #[error("missing threshold 'keys.k'")]
    MissingThreshold,

    /// A numeric field holds something else.
    #[error("'{field}' is not a non-negative integer: {value}")]
    NonNumeric {
        /// The field path.
        field: &'static str,

        /// The raw JSON value.
        value: String,
    },

    /// The threshold is zero.
    #[error("threshold 'keys.k' must be at least 1")]
    ZeroThreshold,

    /// A share key is not an integer.
    #[error("share key {0:?} is not a non-negative integer")]
    InvalidShareKey(String),

    /// A share record does not have the `base` and `value` fields.
    #[error("share {key:?} is not a {{base, value}} record: {source}")]
    InvalidShareRecord {
        /// The share key.
        key: String,

        /// The underlying deserialization error.
        source: serde_json::Error,
    },
}

/// Fewer shares than the threshold were provided.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{required} shares are required but only {available} were provided")]
pub struct InsufficientSharesError {
    /// The threshold.
    pub required: u64,

    /// The number of shares available.
    pub available: usize,
}

/// Secret reconstruction failure.
#[derive(Error, Debug)]
pub enum ReconstructionError {
    /// The document is malformed.
    #[error(transparent)]
    Malformed(#[from] MalformedInputError),

    /// A share could not be decoded.
    #[error("share {key:?}: {source}")]
    Decode {
        /// The share key.
        key: String,

        /// The decode error.
        source: DecodeError,
    },

    /// Not enough shares.
    #[error(transparent)]
    InsufficientShares(#[from] InsufficientSharesError),

    /// The polynomial interpolation failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// The interpolated polynomial is missing a coefficient.
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}
