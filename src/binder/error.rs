//! Binding error types.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use super::field::FloatWidth;

/// Binding error.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("bind target is not a `{expected}`")]
    InvalidTarget { expected: &'static str },
    #[error("field {field}: unsupported field type `{kind}`")]
    UnsupportedFieldType {
        field: &'static str,
        kind: &'static str,
    },
    #[error("error setting field {field} from {raw:?}: {reason}")]
    FieldCoercion {
        field: &'static str,
        raw: String,
        #[source]
        reason: CoercionError,
    },
}

impl BindError {
    /// Name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BindError::InvalidTarget { .. } => None,
            BindError::UnsupportedFieldType { field, .. } | BindError::FieldCoercion { field, .. } => {
                Some(*field)
            }
        }
    }
}

/// Failure to turn a raw string into a field value.
#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),
    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),
    #[error("value out of range for {0}")]
    FloatOutOfRange(FloatWidth),
    #[error("invalid boolean, expected one of 1, t, true, 0, f, false")]
    Bool,
    #[error("invalid duration: {0}")]
    Duration(#[from] DurationError),
    #[error("unsupported field type `{0}`")]
    Unsupported(&'static str),
}

/// Duration grammar errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("expected a number in {0:?}")]
    MissingNumber(String),
    #[error("missing unit in {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("negative duration {0:?}")]
    Negative(String),
    #[error("duration {0:?} out of range")]
    Overflow(String),
}
