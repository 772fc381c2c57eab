//! Error types for colourctl

use colour::ColourError;
use colour::errors::{AttributeError, ErrorCategory};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid keyword argument '{0}', expected KEY=VALUE")]
    InvalidKeyword(String),

    #[error(transparent)]
    Colour(#[from] ColourError),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidKeyword(_) => 4,
            CliError::Colour(err) => colour_exit_code(err),
        }
    }

    /// Short machine-readable error type.
    pub fn type_name(&self) -> &'static str {
        match self {
            CliError::InvalidKeyword(_) => "invalid_keyword",
            CliError::Colour(err) => colour_type_name(err),
        }
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<CliError>() {
        err.exit_code()
    } else if let Some(err) = err.downcast_ref::<ColourError>() {
        colour_exit_code(err)
    } else {
        1
    }
}

/// Machine-readable type for any error reaching `main`.
pub fn type_name(err: &anyhow::Error) -> &'static str {
    if let Some(err) = err.downcast_ref::<CliError>() {
        err.type_name()
    } else if let Some(err) = err.downcast_ref::<ColourError>() {
        colour_type_name(err)
    } else {
        "error"
    }
}

fn colour_type_name(err: &ColourError) -> &'static str {
    match err.as_attribute() {
        Some(AttributeError::Removed { .. }) => "attribute_removed",
        Some(AttributeError::TypeMismatch { .. }) => "type_mismatch",
        Some(_) => "attribute_not_found",
        None => match err.category() {
            ErrorCategory::Config => "config",
            ErrorCategory::Validation => "validation",
            _ => "error",
        },
    }
}

fn colour_exit_code(err: &ColourError) -> i32 {
    match err {
        ColourError::Attribute(AttributeError::Removed { .. }) => 2,
        ColourError::Attribute(_) => 3,
        ColourError::Config(_) | ColourError::Validation(_) => 4,
        _ => 1,
    }
}
