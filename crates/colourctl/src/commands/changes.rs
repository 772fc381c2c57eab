//! Namespace inspection commands

use anyhow::Result;
use colour::ModuleApi;
use colour::errors::AttributeError;
use colour::{Colour, ColourError};
use colored::Colorize;
use serde_json::json;

use crate::output;

/// List the change rules of one namespace, or of all of them.
pub fn list_changes(colour: &Colour, module: Option<&str>, json: bool) -> Result<()> {
    let apis = select(colour, module)?;

    if json {
        let namespaces: Vec<_> = apis
            .iter()
            .map(|api| {
                let rules: Vec<_> = api.changes().iter().map(|(_, rule)| rule).collect();
                json!({ "module": api.name(), "rules": rules })
            })
            .collect();
        return output::print_json(&json!({ "success": true, "namespaces": namespaces }));
    }

    for api in apis {
        println!("{}", api.name().bold());
        if api.changes().is_empty() {
            println!("  {}", "No API changes".dimmed());
        }
        for (key, rule) in api.changes().iter() {
            println!("  {} {}", key.yellow(), rule);
        }
    }
    Ok(())
}

/// List the public members of a namespace.
pub fn list_dir(colour: &Colour, module: &str, json: bool) -> Result<()> {
    let names = colour.dir(module)?;
    if json {
        return output::print_json(&json!({ "success": true, "module": module, "names": names }));
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

/// List installed namespaces.
pub fn list_modules(colour: &Colour, json: bool) -> Result<()> {
    let modules: Vec<_> = colour
        .registry()
        .modules()
        .map(|api| {
            json!({
                "module": api.name(),
                "members": api.module().len(),
                "changes": api.changes().len(),
            })
        })
        .collect();
    if json {
        return output::print_json(&json!({ "success": true, "modules": modules }));
    }
    for api in colour.registry().modules() {
        println!(
            "{} ({} members, {} changes)",
            api.name().bold(),
            api.module().len(),
            api.changes().len()
        );
    }
    Ok(())
}

fn select<'a>(colour: &'a Colour, module: Option<&str>) -> Result<Vec<&'a ModuleApi>> {
    match module {
        Some(name) => {
            let api = colour
                .registry()
                .module(name)
                .ok_or_else(|| ColourError::from(AttributeError::ModuleNotFound(name.to_owned())))?;
            Ok(vec![api])
        }
        None => Ok(colour.registry().modules().collect()),
    }
}
