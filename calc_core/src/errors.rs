//! # Error Types
//!
//! Structured error types for calc_core. Arithmetic failures never leave the
//! engine as an `Err`: the transition that hit them folds the error into the
//! engine state and the snapshot reports it through `has_error`. The
//! remaining variants describe problems on the host side (unknown keys,
//! unreadable settings files).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_divide(first: f64, second: f64) -> CalcResult<f64> {
//!     if second == 0.0 {
//!         return Err(CalcError::DivisionByZero);
//!     }
//!     Ok(first / second)
//! }
//!
//! assert_eq!(checked_divide(1.0, 0.0), Err(CalcError::DivisionByZero));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The divisor of a division was zero (or negative zero)
    #[error("Error: Division by zero")]
    DivisionByZero,

    /// A key, token or value is not part of the input vocabulary
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors produced by arithmetic inside the engine.
    ///
    /// These are absorbed into engine state and only `Clear` recovers from them.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, CalcError::DivisionByZero)
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
