use crate::scan::error::{Result, ScanError};

/// Execution strategy enum for choosing between parallel and sequential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    Sequential,
    Parallel { workers: usize },
}

impl ExecutionStrategy {
    /// Run `worker(worker_id)` once per worker and collect the typed results.
    ///
    /// Parallel spawns exactly `workers` scoped threads (at least one) and
    /// joins every one of them before returning; results come back in worker
    /// id order. Sequential calls `worker(0)` on the current thread.
    pub fn execute<R, F>(&self, worker: F) -> Result<Vec<R>>
    where
        R: Send,
        F: Fn(usize) -> R + Sync,
    {
        match *self {
            ExecutionStrategy::Sequential => Ok(vec![worker(0)]),
            ExecutionStrategy::Parallel { workers } => {
                let workers = workers.max(1);
                let worker = &worker;

                // Use crossbeam::thread::scope for safe borrowing
                crossbeam::thread::scope(|s| -> Result<Vec<R>> {
                    // Threads already started are joined by the scope if a later spawn fails
                    let mut handles = Vec::with_capacity(workers);
                    for worker_id in 0..workers {
                        let handle = s
                            .builder()
                            .name(format!("idscan-worker-{worker_id}"))
                            .spawn(move |_| worker(worker_id))
                            .map_err(|e| ScanError::ThreadSpawn {
                                worker_id,
                                reason: e.to_string(),
                            })?;
                        handles.push(handle);
                    }

                    // Join all handles before inspecting any result
                    let joined: Vec<_> = handles.into_iter().map(|h| h.join()).collect();

                    joined
                        .into_iter()
                        .enumerate()
                        .map(|(worker_id, result)| {
                            result.map_err(|_| ScanError::WorkerPanicked { worker_id })
                        })
                        .collect()
                })
                .map_err(|_| ScanError::ThreadPanic)?
            }
        }
    }

    /// Number of workers this strategy runs
    pub fn workers(&self) -> usize {
        match *self {
            ExecutionStrategy::Sequential => 1,
            ExecutionStrategy::Parallel { workers } => workers.max(1),
        }
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, ExecutionStrategy::Parallel { .. })
    }

    /// Auto strategy selection based on workload size threshold
    ///
    /// ```rust
    /// use idscan::parallel::ExecutionStrategy;
    ///
    /// // 36 ids < 50 → Sequential (threshold not met)
    /// let strategy = ExecutionStrategy::auto(36, 50, 8);
    /// assert!(matches!(strategy, ExecutionStrategy::Sequential));
    ///
    /// // 100 ids >= 50 → Parallel (threshold met)
    /// let strategy = ExecutionStrategy::auto(100, 50, 8);
    /// assert_eq!(strategy, ExecutionStrategy::Parallel { workers: 8 });
    /// ```
    pub fn auto(work_items_count: u128, min_items_for_parallel: u128, optimal_workers: usize) -> Self {
        if work_items_count >= min_items_for_parallel && optimal_workers > 1 {
            ExecutionStrategy::Parallel {
                workers: optimal_workers,
            }
        } else {
            ExecutionStrategy::Sequential
        }
    }

    /// Calculate optimal workers based on available system resources and configuration limits
    ///
    /// # Algorithm
    /// ```text
    /// 1. Detect available logical cores: num_cpus::get()
    /// 2. Apply percentage: cores * thread_percentage / 100
    /// 3. Apply config limit: min(max_threads_config, percentage_result) if max_threads_config > 0
    /// 4. Ensure minimum: max(1, final_result)
    /// ```
    ///
    /// # Examples
    /// ```rust
    /// use idscan::parallel::ExecutionStrategy;
    ///
    /// let workers = ExecutionStrategy::calculate_optimal_workers(0, 100);
    /// assert!(workers >= 1);
    ///
    /// let workers = ExecutionStrategy::calculate_optimal_workers(2, 100);
    /// assert!(workers <= 2);
    /// ```
    pub fn calculate_optimal_workers(max_threads_config: usize, thread_percentage: u8) -> usize {
        Self::workers_for_cores(num_cpus::get(), max_threads_config, thread_percentage)
    }

    fn workers_for_cores(cores: usize, max_threads_config: usize, thread_percentage: u8) -> usize {
        let workers_by_percentage = std::cmp::max(1, (cores * thread_percentage as usize) / 100);

        // 0 means use percentage calculation only
        if max_threads_config > 0 {
            std::cmp::min(max_threads_config, workers_by_percentage)
        } else {
            workers_by_percentage
        }
    }
}
