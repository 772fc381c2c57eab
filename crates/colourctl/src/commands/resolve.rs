//! Name resolution commands

use anyhow::Result;
use colour::deprecation::split_qualified;
use colour::{Attribute, ColourError};
use serde_json::json;

use crate::commands::Session;
use crate::output;

/// Resolve a fully-qualified name and report what it points at.
pub fn execute(session: &Session, name: &str, json: bool) -> Result<()> {
    let resolved = session.colour.get_attribute(name);
    let warnings = session.take_warnings();
    output::print_warnings(&warnings, json);
    let attribute = resolved?;

    let rule = rule_for(session, name)?;
    let value = display_value(&attribute);

    if json {
        output::print_json(&json!({
            "success": true,
            "name": name,
            "type": attribute.type_name(),
            "value": value,
            "rule": rule,
            "warnings": warnings,
        }))
    } else {
        output::print_resolution(name, &attribute, rule.as_deref(), value.as_deref());
        Ok(())
    }
}

fn rule_for(session: &Session, name: &str) -> Result<Option<String>> {
    let (module, attribute) = split_qualified(name).map_err(ColourError::from)?;
    Ok(session
        .colour
        .registry()
        .module(module)
        .and_then(|api| api.changes().get(attribute))
        .map(ToString::to_string))
}

fn display_value(attribute: &Attribute) -> Option<String> {
    attribute.downcast_ref::<f64>().map(|value| format!("{value:e}"))
}
