//! # idscan - parallel invalid-ID checksums
//!
//! Scans inclusive numeric ranges and sums every "invalid" ID: a number whose
//! decimal form is a block of digits repeated, such as `55`, `1212` or
//! `123123`.
//!
//! ## Pipeline
//!
//! ```text
//! ranges → RangeChunker → WorkQueue → workers (claim, classify, accumulate) → aggregate
//! ```
//!
//! Ranges are split into chunks, all chunks are queued before any worker
//! starts, and each worker claims chunks through a single atomic cursor until
//! the queue is drained. Workers keep private partial sums that are only
//! combined after every worker has joined.
//!
//! ```rust
//! use idscan::config::ScannerConfig;
//! use idscan::input::parse_ranges;
//! use idscan::scan::Scanner;
//!
//! let ranges = parse_ranges("1-5,8-11");
//! let result = Scanner::new(ScannerConfig::default()).scan(&ranges).unwrap();
//! assert_eq!(result.total, 11);
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod parallel;
pub mod scan;

pub use cli::{Cli, Output};
pub use config::{IdscanConfig, ScannerConfig};
pub use scan::{ScanResult, Scanner};

/// Result type alias for idscan operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
