//! colourctl - colour API migration CLI
//!
//! Resolves fully-qualified colour names (old names included), lists the API
//! changes each namespace declares and evaluates formulas from keyword
//! arguments, reporting deprecation warnings on the way.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colour::deprecation::WarningAction;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{ComputeCommands, Session};

#[derive(Parser, Debug)]
#[command(name = "colourctl")]
#[command(about = "Resolve colour API names and inspect API changes")]
#[command(version)]
#[command(long_about = "
colourctl resolves fully-qualified colour names such as
colour.biochemistry.reaction_rate_michealis_menten, following the change
tables every namespace declares. Old names resolve with a deprecation
warning; removed names fail with exit code 2.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Deprecation configuration file (YAML)
    #[arg(long, global = true, env = "COLOURCTL_CONFIG")]
    config: Option<PathBuf>,

    /// Warning filter: always, once or ignore
    #[arg(long, global = true, value_parser = parse_action)]
    warnings: Option<WarningAction>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a fully-qualified name
    Resolve {
        /// Name such as colour.colorimetry.planck_law
        name: String,
    },

    /// List declared API changes
    Changes {
        /// Restrict to one namespace
        module: Option<String>,
    },

    /// List the public members of a namespace
    Dir {
        /// Namespace such as colour.biochemistry
        module: String,
    },

    /// List installed namespaces
    Modules,

    /// Evaluate a formula from keyword arguments
    #[command(subcommand)]
    Compute(ComputeCommands),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn parse_action(value: &str) -> Result<WarningAction, colour::errors::ConfigError> {
    value.parse()
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("colourctl={log_level},colour={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute_command(&cli) {
        if cli.json {
            output::print_error_json(&e);
        } else {
            output::print_error_human(&e);
        }
        std::process::exit(error::exit_code(&e));
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    if let Commands::Completion { shell } = &cli.command {
        completion::generate_completion(*shell);
        return Ok(());
    }

    let session = Session::open(cli.config.as_deref(), cli.warnings)?;
    match &cli.command {
        Commands::Resolve { name } => commands::resolve::execute(&session, name, cli.json),
        Commands::Changes { module } => {
            commands::changes::list_changes(&session.colour, module.as_deref(), cli.json)
        }
        Commands::Dir { module } => commands::changes::list_dir(&session.colour, module, cli.json),
        Commands::Modules => commands::changes::list_modules(&session.colour, cli.json),
        Commands::Compute(cmd) => commands::compute::execute(&session, cmd, cli.json),
        Commands::Completion { .. } => Ok(()),
    }
}
