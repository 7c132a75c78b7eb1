//! Command implementations for the idscan CLI
//!
//! Each command is organized into its own module.

use crate::config::{IdscanConfig, ScannerConfig, StrategyMode};
use crate::scan::Rule;
use anyhow::Result;
use serde::Serialize;

pub mod check;
pub mod config;
pub mod scan;
pub mod version;

/// CLI flags layered over the `[scanner]` section; unset flags are skipped
#[derive(Debug, Default, Serialize)]
pub struct ScannerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_per_worker: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<StrategyMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chunks: Option<usize>,
}

#[derive(Serialize)]
struct Overrides {
    scanner: ScannerOverrides,
}

/// Load the layered configuration and extract the scanner section
pub fn load_scanner_config(
    custom_config: Option<&str>,
    overrides: ScannerOverrides,
) -> Result<ScannerConfig> {
    let config = IdscanConfig::load_with(custom_config, Some(Overrides { scanner: overrides }))?;
    let scanner = config.scanner()?;
    tracing::debug!("Effective scanner config: {:?}", scanner);
    Ok(scanner)
}
