//! Configuration command implementations

use super::{ScannerOverrides, load_scanner_config};
use crate::cli::Output;
use crate::config::ScannerConfig;
use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration after all layers are merged
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Validate the configuration without running a scan
    Validate,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

#[derive(Serialize)]
struct EffectiveConfig<'a> {
    scanner: &'a ScannerConfig,
}

pub fn execute(cmd: ConfigCommands, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let scanner = load_scanner_config(custom_config, ScannerOverrides::default())?;

    match cmd {
        ConfigCommands::Show { format } => {
            let effective = EffectiveConfig { scanner: &scanner };
            let rendered = match format {
                ConfigFormat::Toml => {
                    toml::to_string_pretty(&effective).context("Failed to render TOML")?
                }
                ConfigFormat::Json => {
                    serde_json::to_string_pretty(&effective).context("Failed to render JSON")?
                }
            };
            output.result(rendered.trim_end());
        }
        ConfigCommands::Validate => match scanner.validate() {
            Ok(()) => output.status_indicator("VALID", "Configuration is valid", true),
            Err(e) => {
                output.status_indicator("INVALID", &e.to_string(), false);
                return Err(e);
            }
        },
    }

    Ok(())
}
