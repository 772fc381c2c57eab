//! Command implementations for colourctl

pub mod changes;
pub mod compute;
pub mod resolve;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use colour::deprecation::{DeprecationWarning, FilteredSink, RecordingSink, WarningAction};
use colour::{Colour, ColourError, DeprecationConfig};

#[derive(Subcommand, Debug)]
pub enum ComputeCommands {
    /// Reaction rate from substrate concentration (s, v_max, k_m[, b_m])
    ReactionRate {
        /// Model name
        #[arg(short, long, default_value = "Michaelis 1913")]
        method: String,
        /// Keyword arguments as KEY=VALUE
        #[arg(required = true)]
        args: Vec<String>,
    },

    /// Substrate concentration from reaction rate (v, v_max, k_m[, b_m])
    SubstrateConcentration {
        /// Model name
        #[arg(short, long, default_value = "Michaelis 1913")]
        method: String,
        /// Keyword arguments as KEY=VALUE
        #[arg(required = true)]
        args: Vec<String>,
    },
}

/// Colour service plus the warnings it reported during one command.
pub struct Session {
    pub colour: Colour,
    warnings: Arc<FilteredSink<RecordingSink>>,
}

impl Session {
    /// Load configuration and install every namespace.
    pub fn open(config_path: Option<&Path>, action: Option<WarningAction>) -> Result<Self> {
        let config = load_config(config_path, action).map_err(ColourError::from)?;
        let warnings = Arc::new(config.filter(RecordingSink::new()));
        let colour = Colour::with_sink(&config, warnings.clone())?;
        Ok(Self { colour, warnings })
    }

    /// Warnings delivered so far, after filtering.
    pub fn take_warnings(&self) -> Vec<DeprecationWarning> {
        self.warnings.inner().take()
    }

    /// Sink for code paths that warn outside attribute resolution.
    pub fn sink(&self) -> &FilteredSink<RecordingSink> {
        &self.warnings
    }
}

fn load_config(
    path: Option<&Path>,
    action: Option<WarningAction>,
) -> Result<DeprecationConfig, colour::errors::ConfigError> {
    let config = match path {
        Some(path) => DeprecationConfig::from_path(path)?,
        None => DeprecationConfig::default(),
    };
    let mut config = config.with_env_overrides()?;
    if let Some(action) = action {
        config.usage_warnings = action;
    }
    tracing::debug!(
        action = %config.usage_warnings,
        documentation_build = config.documentation_build,
        "configuration resolved"
    );
    Ok(config)
}
