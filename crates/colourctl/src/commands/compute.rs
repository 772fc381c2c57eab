//! Formula evaluation commands

use anyhow::Result;
use colour::ColourError;
use colour::biochemistry::{
    Keywords, MichaelisMentenMethod, reaction_rate_from_keywords,
    substrate_concentration_from_keywords,
};
use serde_json::json;

use crate::commands::{ComputeCommands, Session};
use crate::error::CliError;
use crate::output;

/// Execute compute command
pub fn execute(session: &Session, cmd: &ComputeCommands, json: bool) -> Result<()> {
    let (quantity, method, args) = match cmd {
        ComputeCommands::ReactionRate { method, args } => ("reaction_rate", method, args),
        ComputeCommands::SubstrateConcentration { method, args } => {
            ("substrate_concentration", method, args)
        }
    };

    let method: MichaelisMentenMethod = method.parse().map_err(ColourError::from)?;
    let keywords = parse_keywords(args)?;
    tracing::debug!(quantity, %method, arguments = keywords.len(), "computing");

    let result = match cmd {
        ComputeCommands::ReactionRate { .. } => {
            reaction_rate_from_keywords(keywords, method, session.sink())
        }
        ComputeCommands::SubstrateConcentration { .. } => {
            substrate_concentration_from_keywords(keywords, method, session.sink())
        }
    };
    let warnings = session.take_warnings();
    output::print_warnings(&warnings, json);
    let value = result?;

    if json {
        output::print_json(&json!({
            "success": true,
            "quantity": quantity,
            "method": method,
            "value": value,
            "warnings": warnings,
        }))
    } else {
        println!("{value}");
        Ok(())
    }
}

/// Parse `KEY=VALUE` pairs, keeping their order.
pub fn parse_keywords(args: &[String]) -> Result<Keywords, CliError> {
    args.iter()
        .map(|arg| {
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| CliError::InvalidKeyword(arg.clone()))?;
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|_parse| CliError::InvalidKeyword(arg.clone()))?;
            Ok((key.trim().to_owned(), value))
        })
        .collect()
}
