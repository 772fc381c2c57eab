//! Centralized error types for colour
//!
//! This crate provides the error taxonomy shared by every colour crate: the
//! attribute resolution failures raised by the compatibility redirector, the
//! configuration failures raised while change tables and registries are
//! built, and the validation failures raised by the checked formula entry
//! points.
//!
//! # Architecture
//!
//! - [`common`]: Top-level error type, classification and severity
//! - [`attribute`]: Attribute resolution errors (removed, not found)
//! - [`config`]: Change table, registry and configuration errors
//! - [`validation`]: Input validation errors for formula entry points
//!
//! Deprecation *warnings* are not errors and do not live here; they travel
//! through the warning channel of `colour-deprecation`.
//!
//! # Example
//!
//! ```
//! use colour_errors::prelude::*;
//!
//! fn lookup(name: &str) -> Result<()> {
//!     Err(AttributeError::not_found("colour.biochemistry", name).into())
//! }
//!
//! let err = lookup("gone").unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Attribute);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attribute;
pub mod common;
pub mod config;
pub mod prelude;
pub mod validation;

pub use attribute::AttributeError;
pub use common::{ColourError, ErrorCategory, ErrorSeverity};
pub use config::ConfigError;
pub use validation::ValidationError;

/// A specialized `Result` type for colour operations.
pub type Result<T> = std::result::Result<T, ColourError>;
