//! Configuration management for idscan
//!
//! Settings are layered with figment: embedded defaults, user and repository
//! TOML files, an explicit `--config` file, `IDSCAN_` environment variables
//! and finally CLI flags. The engine only reads the typed [`ScannerConfig`].

use crate::parallel::ExecutionStrategy;
use crate::scan::Rule;
use anyhow::{Result, ensure};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

mod core;


pub use self::core::IdscanConfig;

/// Largest accepted explicit worker count
pub const MAX_WORKERS: usize = 1024;

/// Largest accepted `workers * chunks_per_worker` split target
pub const MAX_TARGET_CHUNKS: usize = 1 << 20;

/// How the scan engine runs its workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyMode {
    /// Parallel above `min_ids_for_parallel`, sequential below
    Auto,
    /// Always spawn the worker pool
    #[default]
    Parallel,
    /// Single worker on the calling thread
    Sequential,
}

/// Scanner configuration (`[scanner]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Exact worker count (0 = derive from logical cores)
    pub workers: usize,

    /// Maximum number of worker threads (0 = no limit)
    pub max_threads: usize,

    /// Percentage of logical cores to use (1-100)
    pub thread_percentage: u8,

    /// Chunks per worker when splitting each range
    pub chunks_per_worker: usize,

    pub strategy: StrategyMode,

    /// Minimum total IDs before `auto` goes parallel
    pub min_ids_for_parallel: u64,

    /// Which IDs count as invalid
    pub rule: Rule,

    /// Upper bound on queued chunks (0 = unlimited)
    pub max_chunks: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            max_threads: 0,
            thread_percentage: 100,
            chunks_per_worker: 4,
            strategy: StrategyMode::Parallel,
            min_ids_for_parallel: 100_000,
            rule: Rule::Halves,
            max_chunks: 0,
        }
    }
}

impl ScannerConfig {
    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.chunks_per_worker > 0,
            "chunks_per_worker must be at least 1"
        );
        ensure!(
            (1..=100).contains(&self.thread_percentage),
            "thread_percentage must be between 1 and 100 (got {})",
            self.thread_percentage
        );
        ensure!(
            self.workers <= MAX_WORKERS,
            "workers must be at most {MAX_WORKERS} (got {})",
            self.workers
        );

        let workers = if self.workers > 0 {
            self.workers
        } else {
            ExecutionStrategy::calculate_optimal_workers(self.max_threads, self.thread_percentage)
        };
        ensure!(
            workers.saturating_mul(self.chunks_per_worker) <= MAX_TARGET_CHUNKS,
            "workers * chunks_per_worker must be at most {MAX_TARGET_CHUNKS} (got {workers} * {})",
            self.chunks_per_worker
        );
        Ok(())
    }
}
