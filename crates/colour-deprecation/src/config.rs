//! Deprecation behaviour configuration.
//!
//! Loaded from YAML, then optionally overridden from the environment:
//!
//! ```yaml
//! usage_warnings: once
//! documentation_build: false
//! ```

use std::path::Path;

use colour_errors::ConfigError;
use serde::{Deserialize, Serialize};

use crate::{FilteredSink, TracingSink, WarningAction, WarningSink};

/// Environment variable overriding [`DeprecationConfig::usage_warnings`].
pub const FILTER_USAGE_WARNINGS_ENV: &str = "COLOUR_SCIENCE__FILTER_USAGE_WARNINGS";

/// Environment variable marking a documentation build when non-empty.
pub const DOCUMENTATION_BUILD_ENV: &str = "COLOUR_SCIENCE__DOCUMENTATION_BUILD";

/// How deprecation warnings are filtered and whether old names are
/// redirected at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeprecationConfig {
    /// Filter applied to deprecation warnings
    pub usage_warnings: WarningAction,
    /// Install namespaces without change tables
    pub documentation_build: bool,
}

impl DeprecationConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_yaml_str(document: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(document).map_err(ConfigError::parse)
    }

    /// Read and parse a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&document)?;
        tracing::debug!(
            path = %path.display(),
            action = %config.usage_warnings,
            "deprecation config loaded"
        );
        Ok(config)
    }

    /// Defaults overridden from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWarningAction`] if
    /// [`FILTER_USAGE_WARNINGS_ENV`] holds an unknown action.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// See [`DeprecationConfig::from_env`].
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, keyed by environment variable
    /// name.
    ///
    /// # Errors
    ///
    /// See [`DeprecationConfig::from_env`].
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(FILTER_USAGE_WARNINGS_ENV) {
            self.usage_warnings = value.parse()?;
        }
        if let Some(value) = lookup(DOCUMENTATION_BUILD_ENV) {
            self.documentation_build = !value.is_empty();
        }
        Ok(self)
    }

    /// Wrap `sink` with the configured filter.
    pub fn filter<S: WarningSink>(&self, sink: S) -> FilteredSink<S> {
        FilteredSink::new(sink, self.usage_warnings)
    }

    /// `tracing` sink with the configured filter.
    pub fn sink(&self) -> FilteredSink<TracingSink> {
        self.filter(TracingSink)
    }
}
