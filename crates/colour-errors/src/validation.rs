//! Input validation error types.
//!
//! Raised by the checked (`try_`) formula entry points. The unchecked
//! variants follow IEEE-754 semantics and never fail.

use core::fmt;

use crate::common::ErrorSeverity;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value out of range
    #[error("{field} value {value} is out of range {range}")]
    OutOfRange {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Human-readable description of the valid range
        range: String,
    },

    /// Required argument missing
    #[error("Required argument '{0}' is missing")]
    Required(String),

    /// Value is NaN or infinite
    #[error("{field} value must be finite")]
    NonFinite {
        /// Field name
        field: String,
    },

    /// Invalid enum value
    #[error("Invalid value '{value}' for field '{field}', expected one of: {expected}")]
    InvalidEnumValue {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Expected values
        expected: String,
    },
}

impl ValidationError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    /// Create an out of range error for a numeric value.
    pub fn out_of_range<T: fmt::Debug>(
        field: impl Into<String>,
        value: T,
        range: impl Into<String>,
    ) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            range: range.into(),
        }
    }

    /// Create a non-finite value error.
    pub fn non_finite(field: impl Into<String>) -> Self {
        ValidationError::NonFinite {
            field: field.into(),
        }
    }

    /// Create an invalid enum value error.
    pub fn invalid_enum_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        ValidationError::InvalidEnumValue {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Reject NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] when `value` is not finite.
    pub fn check_finite(field: &str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::non_finite(field))
        }
    }
}
