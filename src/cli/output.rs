//! Console output for idscan
//!
//! Result lines are the only thing printed to stdout, so scripts can parse
//! them. Everything else goes to stderr through styled helpers that respect
//! `--quiet`.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an unstyled result line; shown even in quiet mode
    pub fn result(&self, line: &str) {
        println!("{}", line);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            eprintln!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a key-value pair, only in verbose mode
    pub fn verbose_key_value(&self, key: &str, value: &str) {
        if self.verbose && !self.quiet {
            eprintln!("  {} {}", style(key).dim(), style(value).white());
        }
    }

    /// Print a status indicator with consistent styling
    pub fn status_indicator(&self, status: &str, message: &str, is_success: bool) {
        if !self.quiet {
            let (icon, color) = if is_success {
                ("✓", style(status).green())
            } else {
                ("✗", style(status).red())
            };
            eprintln!("{} {} {}", style(icon).bold(), color.bold(), message);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
