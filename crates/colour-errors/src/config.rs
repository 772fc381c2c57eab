//! Configuration errors.
//!
//! Raised while change tables are built, while namespaces are installed into
//! a registry, and while the deprecation configuration is loaded.

use std::path::PathBuf;

use crate::common::ErrorSeverity;

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Two rules share the same unqualified old name (strict builder only).
    #[error("Duplicate change rule for '{key}': '{previous}' conflicts with '{next}'")]
    DuplicateRule {
        /// Unqualified attribute name both rules are keyed by
        key: String,
        /// Qualified old name of the earlier rule
        previous: String,
        /// Qualified old name of the later rule
        next: String,
    },

    /// A rule descriptor has the wrong number of entries for its label.
    #[error("Invalid {label} descriptor {descriptor:?}: expected {expected}")]
    InvalidDescriptor {
        /// Change-kind label the descriptor was listed under
        label: String,
        /// The offending descriptor
        descriptor: Vec<String>,
        /// Expected shape
        expected: &'static str,
    },

    /// A rule descriptor names an attribute without a namespace.
    #[error("'{0}' attribute has no namespace")]
    NoNamespace(String),

    /// A namespace was installed twice into the same registry.
    #[error("Module '{0}' is already installed")]
    AlreadyInstalled(String),

    /// Unknown warning filter action.
    #[error("Invalid warning action '{0}', expected one of: always, once, ignore")]
    InvalidWarningAction(String),

    /// The configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration file could not be read.
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConfigError::DuplicateRule { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Create a parse error from any displayable source.
    pub fn parse(reason: impl std::fmt::Display) -> Self {
        ConfigError::Parse(reason.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_rule_display() {
        let err = ConfigError::DuplicateRule {
            key: "old_fn".into(),
            previous: "pkg.old_fn".into(),
            next: "pkg.sub.old_fn".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("old_fn"));
        assert!(msg.contains("pkg.sub.old_fn"));
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_io_error_has_source() {
        let err = ConfigError::Io {
            path: PathBuf::from("colour.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("colour.yaml"));
    }
}
