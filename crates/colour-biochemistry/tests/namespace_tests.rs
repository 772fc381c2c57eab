//! Resolution of `colour.biochemistry` members through a registry.

use std::sync::Arc;

use colour_biochemistry::{MODULE_NAME, MichaelisMenten, MichaelisMentenFn, module_api};
use colour_deprecation::{DeprecationConfig, ModuleRegistry, RecordingSink, WarningCategory};
use colour_errors::AttributeError;
use colour_test_helpers::prelude::*;

fn registry(
    config: &DeprecationConfig,
    sink: Arc<RecordingSink>,
) -> Result<ModuleRegistry, Box<dyn std::error::Error>> {
    Ok(ModuleRegistry::builder()
        .sink(sink)
        .install(module_api(config)?)?
        .build())
}

#[test]
fn misspelled_names_resolve_to_current_functions() -> TestResult {
    let sink = Arc::new(RecordingSink::new());
    let registry = registry(&DeprecationConfig::default(), sink.clone())?;

    for (old, new) in [
        ("reaction_rate_michealis_menten", "reaction_rate_michaelis_menten"),
        (
            "substrate_concentration_michealis_menten",
            "substrate_concentration_michaelis_menten",
        ),
    ] {
        let via_old = registry.getattr(MODULE_NAME, old)?;
        let via_new = registry.getattr(MODULE_NAME, new)?;
        assert!(via_old.ptr_eq(&via_new), "{old} should resolve to {new}");
    }

    let warnings = sink.take();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.category == WarningCategory::Renamed));
    assert!(
        warnings
            .iter()
            .any(|w| w.attribute == "colour.biochemistry.reaction_rate_michealis_menten")
    );
    Ok(())
}

#[test]
fn resolved_function_computes() -> TestResult {
    let registry = registry(&DeprecationConfig::default(), Arc::new(RecordingSink::new()))?;
    let rate =
        registry.get::<MichaelisMentenFn>("colour.biochemistry.reaction_rate_michealis_menten")?;
    let concentration =
        registry.get::<MichaelisMentenFn>(
            "colour.biochemistry.substrate_concentration_michaelis_menten",
        )?;

    let model = MichaelisMenten::Abebe2017 { b_m: 0.813 };
    let v = rate(0.5, 1.448, 0.635, model);
    assert_approx_eq!(concentration(v, 1.448, 0.635, model), 0.5, 1e-12);
    Ok(())
}

#[test]
fn documentation_build_exposes_only_current_names() -> TestResult {
    let config = DeprecationConfig {
        documentation_build: true,
        ..DeprecationConfig::default()
    };
    let registry = registry(&config, Arc::new(RecordingSink::new()))?;
    assert_eq!(
        registry.getattr(MODULE_NAME, "reaction_rate_michealis_menten").err(),
        Some(AttributeError::not_found(MODULE_NAME, "reaction_rate_michealis_menten"))
    );
    assert!(registry.getattr(MODULE_NAME, "reaction_rate_michaelis_menten").is_ok());
    Ok(())
}

#[test]
fn dir_lists_current_members() -> TestResult {
    let registry = registry(&DeprecationConfig::default(), Arc::new(RecordingSink::new()))?;
    let names = must_some(registry.module(MODULE_NAME), "installed").dir();
    assert_sorted!(&names);
    assert!(names.iter().all(|name| !name.contains("michealis")));
    assert_eq!(names.len(), 8);
    Ok(())
}
