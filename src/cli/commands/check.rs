use super::{ScannerOverrides, load_scanner_config};
use crate::cli::Output;
use crate::scan::Rule;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct CheckArgs {
    /// IDs to classify
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<u64>,

    /// Which IDs count as invalid
    #[arg(short, long, value_enum)]
    pub rule: Option<Rule>,
}

pub fn execute(args: CheckArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let rule = match args.rule {
        Some(rule) => rule,
        None => load_scanner_config(custom_config, ScannerOverrides::default())?.rule,
    };

    for id in args.ids {
        let verdict = if rule.is_invalid(id) { "invalid" } else { "valid" };
        output.result(&format!("{id}: {verdict}"));
    }

    Ok(())
}
