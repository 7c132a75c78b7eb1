use anyhow::Result;
use clap::Parser;
use idscan::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
