//! Attribute resolution errors.
//!
//! Removal and absence are the failures resolution itself raises; the other
//! variants come from qualified and typed lookups around it. Every variant
//! is fatal to the lookup that raised it.

use crate::common::ErrorSeverity;

/// Failure to resolve an attribute on a namespace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The attribute was removed from the API.
    #[error("{}", removed_message(.name, .message.as_deref()))]
    Removed {
        /// Fully-qualified name of the removed attribute
        name: String,
        /// Optional explanation attached to the removal rule
        message: Option<String>,
    },

    /// The attribute is neither declared in the change table nor present on
    /// the namespace.
    #[error("module '{module}' has no attribute '{attribute}'")]
    NotFound {
        /// Fully-qualified namespace name
        module: String,
        /// Unqualified attribute name
        attribute: String,
    },

    /// A qualified lookup named a namespace that is not installed.
    #[error("module '{0}' does not exist or is not installed")]
    ModuleNotFound(String),

    /// A qualified lookup was given a name without any namespace.
    #[error("'{0}' attribute has no namespace")]
    NoNamespace(String),

    /// A typed accessor found the attribute but it holds another type.
    #[error("'{name}' attribute is a {actual}, not a {expected}")]
    TypeMismatch {
        /// Qualified attribute name
        name: String,
        /// Requested type
        expected: &'static str,
        /// Stored type
        actual: &'static str,
    },
}

fn removed_message(name: &str, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("{name} attribute has been removed from the API: {message}"),
        None => format!("{name} attribute has been removed from the API."),
    }
}

impl AttributeError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    /// Create a removed attribute error.
    pub fn removed(name: impl Into<String>, message: Option<String>) -> Self {
        AttributeError::Removed {
            name: name.into(),
            message,
        }
    }

    /// Create a missing attribute error.
    pub fn not_found(module: impl Into<String>, attribute: impl Into<String>) -> Self {
        AttributeError::NotFound {
            module: module.into(),
            attribute: attribute.into(),
        }
    }

    /// The attribute (or namespace) name the failure is about.
    pub fn attribute(&self) -> &str {
        match self {
            AttributeError::Removed { name, .. } | AttributeError::TypeMismatch { name, .. } => {
                name
            }
            AttributeError::NotFound { attribute, .. } => attribute,
            AttributeError::ModuleNotFound(name) | AttributeError::NoNamespace(name) => name,
        }
    }

    /// Check if the attribute existed once and was taken out of the API.
    pub fn is_removed(&self) -> bool {
        matches!(self, AttributeError::Removed { .. })
    }
}
