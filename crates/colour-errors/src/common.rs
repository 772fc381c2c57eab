//! Common error types and utilities used across all colour crates.
//!
//! This module provides the top-level error enum that can wrap all sub-errors,
//! along with error classification and severity levels.

use core::fmt;

use crate::{AttributeError, ConfigError, ValidationError};

/// Top-level error type that can wrap all colour sub-errors.
#[derive(Debug, thiserror::Error)]
pub enum ColourError {
    /// Attribute resolution errors
    #[error("Attribute error: {0}")]
    Attribute(#[from] AttributeError),

    /// Change table, registry and configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl ColourError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ColourError::Attribute(_) => ErrorCategory::Attribute,
            ColourError::Config(_) => ErrorCategory::Config,
            ColourError::Validation(_) => ErrorCategory::Validation,
            ColourError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ColourError::Attribute(e) => e.severity(),
            ColourError::Config(e) => e.severity(),
            ColourError::Validation(e) => e.severity(),
            ColourError::Other(_) => ErrorSeverity::Error,
        }
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        ColourError::Other(msg.into())
    }

    /// The wrapped attribute error, if any.
    pub fn as_attribute(&self) -> Option<&AttributeError> {
        match self {
            ColourError::Attribute(e) => Some(e),
            _ => None,
        }
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Attribute resolution errors
    Attribute = 0,
    /// Configuration errors
    Config = 1,
    /// Validation errors
    Validation = 2,
    /// Other errors
    Other = 255,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Attribute => write!(f, "Attribute"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Validation => write!(f, "Validation"),
            ErrorCategory::Other => write!(f, "Other"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, process state is unusable
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
