//! Output formatting for CLI responses

use anyhow::Error;
use colored::Colorize;
use colour::Attribute;
use colour::deprecation::DeprecationWarning;
use serde::Serialize;
use serde_json::json;

use crate::error::type_name as error_type_name;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print any serializable document as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report deprecation warnings on stderr. In JSON mode they travel in the
/// response document instead.
pub fn print_warnings(warnings: &[DeprecationWarning], json: bool) {
    if json {
        return;
    }
    for warning in warnings {
        eprintln!(
            "{} [{}] {}",
            "warning:".yellow().bold(),
            warning.category,
            warning.message
        );
    }
}

/// Print a resolved attribute.
pub fn print_resolution(
    name: &str,
    attribute: &Attribute,
    rule: Option<&str>,
    value: Option<&str>,
) {
    println!("{} {}", name.bold(), attribute.type_name().dimmed());
    if let Some(value) = value {
        println!("  value: {value}");
    }
    if let Some(rule) = rule {
        println!("  rule:  {}", rule.yellow());
    }
}
