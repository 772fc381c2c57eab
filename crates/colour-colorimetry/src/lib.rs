//! Colorimetry for colour
//!
//! Blackbody spectral radiance and the `colour.colorimetry` namespace. The
//! namespace declares no API changes yet; it is wrapped all the same so that
//! lookups through it go through the same resolution path as every other
//! namespace.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod blackbody;

use colour_deprecation::{ApiChanges, DeprecationConfig, Module, ModuleApi};
use colour_errors::ConfigError;

pub use blackbody::{
    CONSTANT_C1, CONSTANT_C2, CONSTANT_N, RadiationConstants, blackbody_spectral_radiance,
    planck_law, planck_law_with, try_planck_law,
};

/// Fully-qualified namespace name.
pub const MODULE_NAME: &str = "colour.colorimetry";

/// Signature of [`planck_law`] and its alias.
pub type PlanckLawFn = fn(f64, f64) -> f64;

/// Public members of `colour.colorimetry`.
///
/// `blackbody_spectral_radiance` shares its value with `planck_law`.
pub fn namespace() -> Module {
    Module::new(MODULE_NAME)
        .with("CONSTANT_C1", CONSTANT_C1)
        .with("CONSTANT_C2", CONSTANT_C2)
        .with("CONSTANT_N", CONSTANT_N)
        .with("planck_law", planck_law as PlanckLawFn)
        .with_alias("blackbody_spectral_radiance", "planck_law")
}

/// API changes of `colour.colorimetry`.
pub fn api_changes() -> ApiChanges {
    ApiChanges::new()
}

/// `colour.colorimetry` wrapped with its change table.
///
/// # Errors
///
/// Returns an error if the change declarations are malformed.
pub fn module_api(config: &DeprecationConfig) -> Result<ModuleApi, ConfigError> {
    ModuleApi::from_changes(namespace(), &api_changes(), config)
}
