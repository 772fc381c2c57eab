//! Colour science for Rust
//!
//! [`Colour`] is the entry point: it installs every namespace
//! (`colour.biochemistry`, `colour.colorimetry`) into one
//! [`ModuleRegistry`] so that names can be resolved by their
//! fully-qualified path, old names included.
//!
//! ```
//! use colour::{Colour, DeprecationConfig};
//! use colour::colorimetry::PlanckLawFn;
//!
//! let colour = Colour::new(&DeprecationConfig::default())?;
//! let planck = colour.get::<PlanckLawFn>("colour.colorimetry.planck_law")?;
//! assert!(planck(500e-9, 5500.0) > 0.0);
//! # Ok::<(), colour::ColourError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

use std::any::Any;
use std::sync::Arc;

pub use colour_biochemistry as biochemistry;
pub use colour_colorimetry as colorimetry;
pub use colour_deprecation as deprecation;
pub use colour_errors as errors;

pub use colour_deprecation::{
    ApiChanges, Attribute, DeprecationConfig, ModuleApi, ModuleRegistry, WarningSink,
};
pub use colour_errors::{ColourError, Result};

/// Installed namespaces, in installation order.
pub const NAMESPACES: [&str; 2] = [biochemistry::MODULE_NAME, colorimetry::MODULE_NAME];

/// Process-wide colour service.
///
/// Construct one at startup and pass it to the code that resolves names.
#[derive(Debug)]
pub struct Colour {
    registry: ModuleRegistry,
}

impl Colour {
    /// Install every namespace, reporting warnings to `tracing` filtered by
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ColourError::Config`] if a namespace declares malformed
    /// changes.
    pub fn new(config: &DeprecationConfig) -> Result<Self> {
        Self::with_sink(config, Arc::new(config.sink()))
    }

    /// Defaults overridden from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ColourError::Config`] for an invalid environment override.
    pub fn from_env() -> Result<Self> {
        Self::new(&DeprecationConfig::from_env()?)
    }

    /// Install every namespace, reporting warnings to `sink` unfiltered.
    ///
    /// # Errors
    ///
    /// See [`Colour::new`].
    pub fn with_sink(config: &DeprecationConfig, sink: Arc<dyn WarningSink>) -> Result<Self> {
        let registry = ModuleRegistry::builder()
            .sink(sink)
            .install(biochemistry::module_api(config)?)?
            .install(colorimetry::module_api(config)?)?
            .build();
        tracing::debug!(
            namespaces = NAMESPACES.len(),
            documentation_build = config.documentation_build,
            "colour initialized"
        );
        Ok(Self { registry })
    }

    /// Underlying registry.
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Resolve a fully-qualified name.
    ///
    /// # Errors
    ///
    /// Returns [`ColourError::Attribute`] if the name was removed or does not
    /// exist.
    pub fn get_attribute(&self, qualified: &str) -> Result<Attribute> {
        Ok(self.registry.get_attribute(qualified)?)
    }

    /// Resolve a fully-qualified name and copy out its value as `T`.
    ///
    /// # Errors
    ///
    /// See [`Colour::get_attribute`]; also fails when the value is not a `T`.
    pub fn get<T: Any + Clone>(&self, qualified: &str) -> Result<T> {
        Ok(self.registry.get(qualified)?)
    }

    /// Public member names of a namespace, old names excluded.
    ///
    /// # Errors
    ///
    /// Returns [`ColourError::Attribute`] for an unknown namespace.
    pub fn dir(&self, module: &str) -> Result<Vec<String>> {
        self.registry
            .module(module)
            .map(ModuleApi::dir)
            .ok_or_else(|| colour_errors::AttributeError::ModuleNotFound(module.to_owned()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colour_deprecation::RecordingSink;

    #[test]
    fn test_installs_every_namespace() -> Result<()> {
        let colour = Colour::new(&DeprecationConfig::default())?;
        let names: Vec<_> = colour.registry().module_names().collect();
        assert_eq!(names, NAMESPACES);
        Ok(())
    }

    #[test]
    fn test_unknown_namespace() -> Result<()> {
        let colour =
            Colour::with_sink(&DeprecationConfig::default(), Arc::new(RecordingSink::new()))?;
        let err = colour.dir("colour.plotting").err();
        assert!(matches!(err, Some(ColourError::Attribute(_))));
        Ok(())
    }
}
