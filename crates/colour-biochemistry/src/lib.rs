//! Biochemistry for colour
//!
//! Michaelis-Menten kinetics and the `colour.biochemistry` namespace. The
//! namespace installs a change table mapping the misspelled names of
//! earlier releases (`*_michealis_menten`) to the current ones.
//!
//! ```
//! use std::sync::Arc;
//! use colour_biochemistry::{MichaelisMenten, MichaelisMentenFn, module_api};
//! use colour_deprecation::{DeprecationConfig, ModuleRegistry, RecordingSink};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let registry = ModuleRegistry::builder()
//!     .sink(sink.clone())
//!     .install(module_api(&DeprecationConfig::default())?)?
//!     .build();
//!
//! let rate = registry.get::<MichaelisMentenFn>(
//!     "colour.biochemistry.reaction_rate_michealis_menten",
//! )?;
//! let v = rate(0.5, 2.5, 0.8, MichaelisMenten::Michaelis1913);
//! assert!((v - 0.961_538_461_538_461_5).abs() < 1e-12);
//! assert_eq!(sink.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod compat;
pub mod keywords;
pub mod michaelis_menten;

use colour_deprecation::{ApiChanges, DeprecationConfig, Module, ModuleApi};
use colour_errors::ConfigError;

pub use keywords::{
    Keywords, argument_changes, reaction_rate_from_keywords, substrate_concentration_from_keywords,
};
pub use michaelis_menten::{
    MichaelisMenten, MichaelisMentenMethod, reaction_rate_michaelis_menten,
    reaction_rate_michaelis_menten_abebe2017, reaction_rate_michaelis_menten_michaelis1913,
    substrate_concentration_michaelis_menten, substrate_concentration_michaelis_menten_abebe2017,
    substrate_concentration_michaelis_menten_michaelis1913, try_reaction_rate_michaelis_menten,
    try_substrate_concentration_michaelis_menten,
};

/// Fully-qualified namespace name.
pub const MODULE_NAME: &str = "colour.biochemistry";

/// Signature of the dispatching entry points.
pub type MichaelisMentenFn = fn(f64, f64, f64, MichaelisMenten) -> f64;
/// Signature of the Michaelis 1913 entry points.
pub type Michaelis1913Fn = fn(f64, f64, f64) -> f64;
/// Signature of the Abebe 2017 entry points.
pub type Abebe2017Fn = fn(f64, f64, f64, f64) -> f64;

/// Keyword arguments renamed in the Rust API, `(old, new)`.
pub const ARGUMENT_RENAMES: [(&str, &str); 3] = [("S", "s"), ("V_max", "v_max"), ("K_m", "k_m")];

/// Public members of `colour.biochemistry`.
pub fn namespace() -> Module {
    Module::new(MODULE_NAME)
        .with(
            "REACTION_RATE_MICHAELIS_MENTEN_METHODS",
            MichaelisMentenMethod::ALL,
        )
        .with(
            "reaction_rate_michaelis_menten",
            reaction_rate_michaelis_menten as MichaelisMentenFn,
        )
        .with(
            "SUBSTRATE_CONCENTRATION_MICHAELIS_MENTEN_METHODS",
            MichaelisMentenMethod::ALL,
        )
        .with(
            "substrate_concentration_michaelis_menten",
            substrate_concentration_michaelis_menten as MichaelisMentenFn,
        )
        .with(
            "reaction_rate_michaelis_menten_michaelis1913",
            reaction_rate_michaelis_menten_michaelis1913 as Michaelis1913Fn,
        )
        .with(
            "substrate_concentration_michaelis_menten_michaelis1913",
            substrate_concentration_michaelis_menten_michaelis1913 as Michaelis1913Fn,
        )
        .with(
            "reaction_rate_michaelis_menten_abebe2017",
            reaction_rate_michaelis_menten_abebe2017 as Abebe2017Fn,
        )
        .with(
            "substrate_concentration_michaelis_menten_abebe2017",
            substrate_concentration_michaelis_menten_abebe2017 as Abebe2017Fn,
        )
}

/// API changes of `colour.biochemistry`.
pub fn api_changes() -> ApiChanges {
    // v0.4.0
    let changes = ApiChanges::new()
        .renamed(
            "colour.biochemistry.reaction_rate_michealis_menten",
            "colour.biochemistry.reaction_rate_michaelis_menten",
        )
        .renamed(
            "colour.biochemistry.substrate_concentration_michealis_menten",
            "colour.biochemistry.substrate_concentration_michaelis_menten",
        );
    ARGUMENT_RENAMES
        .iter()
        .fold(changes, |changes, (name, new_name)| {
            changes.argument_renamed(*name, *new_name)
        })
}

/// `colour.biochemistry` wrapped with its change table.
///
/// # Errors
///
/// Returns an error if the change declarations are malformed.
pub fn module_api(config: &DeprecationConfig) -> Result<ModuleApi, ConfigError> {
    ModuleApi::from_changes(namespace(), &api_changes(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colour_deprecation::ChangeTable;

    #[test]
    fn test_change_table_is_collision_free() -> Result<(), ConfigError> {
        let table = ChangeTable::try_build(&api_changes())?;
        let keys: Vec<_> = table.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            [
                "reaction_rate_michealis_menten",
                "substrate_concentration_michealis_menten"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_rename_targets_exist() -> Result<(), ConfigError> {
        let module = namespace();
        for (_, rule) in ChangeTable::build(&api_changes())?.iter() {
            let target = rule.new_name().and_then(|name| name.rsplit_once('.'));
            assert!(matches!(target, Some((MODULE_NAME, member)) if module.contains(member)));
        }
        Ok(())
    }

    #[test]
    fn test_argument_changes_follow_renames() -> Result<(), ConfigError> {
        let names: Vec<_> = argument_changes()?
            .iter()
            .map(|change| change.name().to_owned())
            .collect();
        assert_eq!(names, ["S", "V_max", "K_m"]);
        Ok(())
    }
}
