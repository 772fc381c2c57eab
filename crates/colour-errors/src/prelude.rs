//! Prelude module for convenient error handling imports.
//!
//! ```
//! use colour_errors::prelude::*;
//!
//! fn checked(value: f64) -> Result<f64> {
//!     Ok(ValidationError::check_finite("value", value)?)
//! }
//!
//! assert!(checked(f64::NAN).is_err());
//! ```

pub use crate::{
    Result,
    attribute::AttributeError,
    common::{ColourError, ErrorCategory, ErrorSeverity},
    config::ConfigError,
    validation::ValidationError,
};
