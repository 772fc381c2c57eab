//! Integration tests for colourctl
//!
//! Every test runs the real binary with the deprecation environment
//! variables cleared, so the outcome depends on flags and files only.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Custom predicate to check if output is valid JSON
fn is_json() -> impl predicates::Predicate<[u8]> {
    predicates::function::function(|s: &[u8]| {
        std::str::from_utf8(s)
            .map(|text| serde_json::from_str::<Value>(text).is_ok())
            .unwrap_or(false)
    })
}

/// Test helper to create a colourctl command
fn colourctl() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("colourctl")?;
    cmd.env_remove("COLOUR_SCIENCE__FILTER_USAGE_WARNINGS")
        .env_remove("COLOUR_SCIENCE__DOCUMENTATION_BUILD")
        .env_remove("COLOURCTL_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    Ok(cmd)
}

fn json_stdout(output: &std::process::Output) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(&output.stdout)
}

#[test]
fn test_help() -> TestResult {
    colourctl()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("changes"));
    Ok(())
}

#[test]
fn test_resolve_current_name() -> TestResult {
    colourctl()?
        .args(["resolve", "colour.colorimetry.CONSTANT_C2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("colour.colorimetry.CONSTANT_C2"))
        .stdout(predicate::str::contains("1.4388e-2"))
        .stderr(predicate::str::contains("warning:").not());
    Ok(())
}

#[test]
fn test_resolve_renamed_name_warns() -> TestResult {
    colourctl()?
        .args(["resolve", "colour.biochemistry.reaction_rate_michealis_menten"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "colour.biochemistry.reaction_rate_michealis_menten -> colour.biochemistry.reaction_rate_michaelis_menten",
        ))
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains(
            "please use 'colour.biochemistry.reaction_rate_michaelis_menten' attribute.",
        ));
    Ok(())
}

#[test]
fn test_resolve_json_carries_warnings() -> TestResult {
    let output = colourctl()?
        .args([
            "resolve",
            "colour.biochemistry.substrate_concentration_michealis_menten",
            "--json",
        ])
        .output()?;
    assert!(output.status.success());
    let body = json_stdout(&output)?;
    assert_eq!(body["success"], Value::Bool(true));
    let warnings = body["warnings"].as_array().map(Vec::len);
    assert_eq!(warnings, Some(1));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("warning:"));
    Ok(())
}

#[test]
fn test_resolve_unknown_name_exit_code() -> TestResult {
    colourctl()?
        .args(["resolve", "colour.biochemistry.missing_fn"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("has no attribute 'missing_fn'"));
    colourctl()?
        .args(["resolve", "colour.plotting.plot"])
        .assert()
        .code(3);
    Ok(())
}

#[test]
fn test_resolve_error_as_json() -> TestResult {
    let output = colourctl()?
        .args(["resolve", "planck_law", "--json"])
        .output()?;
    assert_eq!(output.status.code(), Some(3));
    let body = json_stdout(&output)?;
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"]["type"], Value::from("attribute_not_found"));
    Ok(())
}

#[test]
fn test_warning_filter_flag() -> TestResult {
    colourctl()?
        .args([
            "--warnings",
            "ignore",
            "resolve",
            "colour.biochemistry.reaction_rate_michealis_menten",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:").not());
    Ok(())
}

#[test]
fn test_invalid_environment_override() -> TestResult {
    colourctl()?
        .env("COLOUR_SCIENCE__FILTER_USAGE_WARNINGS", "loud")
        .args(["modules"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("loud"));
    Ok(())
}

#[test]
fn test_config_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("colour.yaml");
    fs::write(&path, "usage_warnings: ignore\n")?;
    colourctl()?
        .arg("--config")
        .arg(&path)
        .args(["resolve", "colour.biochemistry.reaction_rate_michealis_menten"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:").not());
    Ok(())
}

#[test]
fn test_documentation_build_disables_redirects() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("colour.yaml");
    fs::write(&path, "documentation_build: true\n")?;
    colourctl()?
        .env("COLOURCTL_CONFIG", &path)
        .args(["resolve", "colour.biochemistry.reaction_rate_michealis_menten"])
        .assert()
        .code(3);
    Ok(())
}

#[test]
fn test_missing_config_file() -> TestResult {
    colourctl()?
        .args(["--config", "/nonexistent/colour.yaml", "modules"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("/nonexistent/colour.yaml"));
    Ok(())
}

#[test]
fn test_changes_lists_rules() -> TestResult {
    colourctl()?
        .args(["changes", "colour.biochemistry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reaction_rate_michealis_menten"))
        .stdout(predicate::str::contains("substrate_concentration_michealis_menten"));
    colourctl()?
        .args(["changes", "colour.colorimetry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No API changes"));
    Ok(())
}

#[test]
fn test_changes_json() -> TestResult {
    colourctl()?
        .args(["changes", "--json"])
        .assert()
        .success()
        .stdout(is_json());
    Ok(())
}

#[test]
fn test_dir_excludes_old_names() -> TestResult {
    colourctl()?
        .args(["dir", "colour.biochemistry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reaction_rate_michaelis_menten"))
        .stdout(predicate::str::contains("michealis").not());
    Ok(())
}

#[test]
fn test_modules() -> TestResult {
    let output = colourctl()?.args(["modules", "--json"]).output()?;
    assert!(output.status.success());
    let body = json_stdout(&output)?;
    let names: Vec<_> = body["modules"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|module| module["module"].as_str())
        .collect();
    assert_eq!(names, ["colour.biochemistry", "colour.colorimetry"]);
    Ok(())
}

#[test]
fn test_compute_reaction_rate() -> TestResult {
    colourctl()?
        .args(["compute", "reaction-rate", "s=0.5", "v_max=2.5", "k_m=0.8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.9615384615384615"))
        .stderr(predicate::str::contains("warning:").not());
    Ok(())
}

#[test]
fn test_compute_with_legacy_arguments_warns() -> TestResult {
    colourctl()?
        .args([
            "compute",
            "reaction-rate",
            "--method",
            "Abebe 2017",
            "S=0.5",
            "V_max=1.448",
            "K_m=0.635",
            "b_m=0.813",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3131184521914832"))
        .stderr(predicate::str::contains("K_m"));
    Ok(())
}

#[test]
fn test_compute_substrate_concentration_json() -> TestResult {
    let output = colourctl()?
        .args([
            "compute",
            "substrate-concentration",
            "v=0.9615384615384615",
            "v_max=2.5",
            "k_m=0.8",
            "--json",
        ])
        .output()?;
    assert!(output.status.success());
    let body = json_stdout(&output)?;
    let value = body["value"].as_f64().unwrap_or(f64::NAN);
    assert!((value - 0.5).abs() < 1e-12);
    assert_eq!(body["method"], Value::from("Michaelis 1913"));
    Ok(())
}

#[test]
fn test_compute_errors() -> TestResult {
    colourctl()?
        .args(["compute", "reaction-rate", "s"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("KEY=VALUE"));
    colourctl()?
        .args(["compute", "reaction-rate", "s=0.5", "v_max=2.5"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("k_m"));
    colourctl()?
        .args(["compute", "reaction-rate", "--method", "Henri 1902", "s=0.5"])
        .assert()
        .code(4);
    colourctl()?
        .args(["compute", "reaction-rate", "s=0", "v_max=1", "k_m=0"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("NaN").not())
        .stderr(predicate::str::contains("k_m"));
    Ok(())
}

#[test]
fn test_completion() -> TestResult {
    colourctl()?
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("colourctl"));
    Ok(())
}
