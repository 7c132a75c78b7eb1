use super::aggregate::aggregate_reports;
use super::chunker::RangeChunker;
use super::classifier::{MirroredHalves, RepeatedPattern, Rule};
use super::error::Result;
use super::queue::WorkQueue;
use super::types::{IdRange, ScanResult, ScanStats, WorkerReport};
use super::worker::scan_worker;
use crate::config::{ScannerConfig, StrategyMode};
use crate::parallel::ExecutionStrategy;
use std::time::Instant;

/// Main scanner struct - turns parsed ranges into an invalid-ID checksum
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScannerConfig,
}

/// A fully populated queue and the strategy that will drain it
#[derive(Debug)]
pub struct ScanPlan {
    pub strategy: ExecutionStrategy,
    pub queue: WorkQueue,
}

impl ScanPlan {
    /// Run the workers and return their reports once every one has joined
    pub fn run(&self, rule: Rule) -> Result<Vec<WorkerReport>> {
        let queue = &self.queue;
        match rule {
            Rule::Halves => self
                .strategy
                .execute(|worker_id| scan_worker(worker_id, queue, &MirroredHalves)),
            Rule::Repeated => self
                .strategy
                .execute(|worker_id| scan_worker(worker_id, queue, &RepeatedPattern)),
        }
    }
}

impl Scanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Worker count: the explicit override, else system resources and limits
    pub fn optimal_workers(&self) -> usize {
        if self.config.workers > 0 {
            return self.config.workers;
        }
        ExecutionStrategy::calculate_optimal_workers(
            self.config.max_threads,
            self.config.thread_percentage,
        )
    }

    /// Chunk the ranges, fill the work queue and pick an execution strategy
    pub fn plan(&self, ranges: &[IdRange]) -> Result<ScanPlan> {
        let workers = self.optimal_workers();
        let chunker = RangeChunker::for_workers(workers, self.config.chunks_per_worker)?;
        let queue = WorkQueue::from_ranges(ranges, &chunker, self.config.max_chunks)?;

        let strategy = match self.config.strategy {
            StrategyMode::Parallel => ExecutionStrategy::Parallel { workers },
            StrategyMode::Sequential => ExecutionStrategy::Sequential,
            StrategyMode::Auto => ExecutionStrategy::auto(
                queue.total_ids(),
                self.config.min_ids_for_parallel as u128,
                workers,
            ),
        };

        tracing::info!(
            "Scan plan: {} ranges → {} chunks ({} per worker target), {:?}, rule {}",
            ranges.len(),
            queue.len(),
            chunker.target_workers(),
            strategy,
            self.config.rule
        );

        Ok(ScanPlan { strategy, queue })
    }

    /// Sum every invalid ID in `ranges`, timing from chunking to the final join
    pub fn scan(&self, ranges: &[IdRange]) -> Result<ScanResult> {
        let start_time = Instant::now();

        let plan = self.plan(ranges)?;
        let reports = plan.run(self.config.rule)?;
        let totals = aggregate_reports(&reports);

        let scan_duration = start_time.elapsed();
        tracing::info!(
            "Scan completed in {:.6}s ({} ids, {} invalid, {} workers)",
            scan_duration.as_secs_f64(),
            totals.ids_scanned,
            totals.invalid_ids,
            reports.len()
        );

        Ok(ScanResult {
            total: totals.total,
            parallel: plan.strategy.is_parallel(),
            stats: ScanStats {
                workers: reports.len(),
                chunks: totals.chunks,
                ids_scanned: totals.ids_scanned,
                invalid_ids: totals.invalid_ids,
                scan_duration,
            },
        })
    }
}
