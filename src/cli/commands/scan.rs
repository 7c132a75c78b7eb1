use super::{ScannerOverrides, load_scanner_config};
use crate::cli::Output;
use crate::config::StrategyMode;
use crate::input::load_ranges;
use crate::scan::{Rule, Scanner};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ScanArgs {
    /// File whose first line holds comma-separated <start>-<end> ranges
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Exact number of worker threads (default: all logical cores)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Chunks per worker when splitting each range
    #[arg(long)]
    pub chunks_per_worker: Option<usize>,

    /// Execution strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyMode>,

    /// Which IDs count as invalid
    #[arg(short, long, value_enum)]
    pub rule: Option<Rule>,

    /// Fail if the input needs more than this many chunks (0 = unlimited)
    #[arg(long)]
    pub max_chunks: Option<usize>,
}

pub fn execute(args: ScanArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let scanner_config = load_scanner_config(
        custom_config,
        ScannerOverrides {
            workers: args.workers,
            chunks_per_worker: args.chunks_per_worker,
            strategy: args.strategy,
            rule: args.rule,
            max_chunks: args.max_chunks,
        },
    )?;
    scanner_config.validate()?;

    let ranges = load_ranges(&args.input)?;
    if ranges.is_empty() {
        output.warning(&format!("No valid ranges found in {}", args.input.display()));
    }

    let scanner = Scanner::new(scanner_config);
    let result = scanner.scan(&ranges).context("Scan failed")?;

    let label = if result.parallel {
        "Parallel Execution time"
    } else {
        "Execution time"
    };
    output.result(&format!(
        "{label}: {:.6} seconds",
        result.stats.scan_duration.as_secs_f64()
    ));
    output.result(&format!("Total invalid ID count: {}", result.total));

    if output.is_verbose() {
        output.header("Scan statistics");
        output.verbose_key_value("Rule:", &scanner.config().rule.to_string());
        output.verbose_key_value("Ranges:", &ranges.len().to_string());
        output.verbose_key_value("Workers:", &result.stats.workers.to_string());
        output.verbose_key_value("Chunks:", &result.stats.chunks.to_string());
        output.verbose_key_value("IDs scanned:", &result.stats.ids_scanned.to_string());
        output.verbose_key_value("Invalid IDs:", &result.stats.invalid_ids.to_string());
    }

    Ok(())
}
