//! Version command implementation

use crate::cli::Output;
use crate::{PKG_NAME, VERSION};
use anyhow::Result;

pub fn execute(output: &Output) -> Result<()> {
    output.result(&format!("{PKG_NAME} {VERSION}"));
    output.verbose_key_value("Description:", env!("CARGO_PKG_DESCRIPTION"));
    output.verbose_key_value("License:", env!("CARGO_PKG_LICENSE"));
    output.verbose_key_value("Target:", std::env::consts::ARCH);
    output.verbose_key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
    );
    Ok(())
}
