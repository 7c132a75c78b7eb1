//! Reading and parsing the range list
//!
//! Input is a single line of comma-separated `<start>-<end>` tokens, e.g.
//! `11-22,95-115,998-1012`. Parsing is lenient: tokens that cannot form a
//! range are dropped rather than failing the whole run.

use crate::scan::IdRange;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the first line of `path` with trailing whitespace removed
pub fn read_first_line(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input file: {}", path.display()))?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    Ok(line.trim_end().to_string())
}

/// Parse a comma-separated list of `<start>-<end>` ranges.
///
/// Tokens without a `-` are skipped silently. Tokens with unparsable bounds or
/// `start > end` are skipped with a warning.
pub fn parse_ranges(line: &str) -> Vec<IdRange> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Option<IdRange> {
    let (start, end) = token.split_once('-')?;

    let bounds = start
        .trim()
        .parse::<u64>()
        .and_then(|start| end.trim().parse::<u64>().map(|end| (start, end)));

    match bounds {
        Ok((start, end)) => {
            let range = IdRange::new(start, end);
            if range.is_none() {
                tracing::warn!("Skipping range '{token}': start is greater than end");
            }
            range
        }
        Err(e) => {
            tracing::warn!("Skipping range '{token}': {e}");
            None
        }
    }
}

/// Read `path` and parse its first line into ranges
pub fn load_ranges(path: &Path) -> Result<Vec<IdRange>> {
    let line = read_first_line(path)?;
    let ranges = parse_ranges(&line);
    tracing::debug!("Parsed {} ranges from {}", ranges.len(), path.display());
    Ok(ranges)
}
