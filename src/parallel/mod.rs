//! Generic parallel execution framework
//!
//! The parallel module focuses exclusively on **system resource management**
//! and **execution strategy**:
//!
//! - **Resource Discovery**: Detects available logical cores using `num_cpus::get()`
//! - **Resource Calculation**: Applies user configuration (thread percentage, max threads)
//! - **Execution Strategy**: Sequential vs Parallel execution of a worker function
//! - **Thread Safety**: Scoped crossbeam threads, typed per-worker results, join barrier
//!
//! It does not know about ranges, chunks or classification; the scan engine
//! hands it a worker closure and gets one result back per worker.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Client        │    │   Parallel       │    │   System        │
//! │   (Scanner)     │───▶│   Module         │───▶│   Resources     │
//! │                 │    │                  │    │                 │
//! │ • Work queue    │    │ • CPU cores      │    │ • Hardware      │
//! │ • Worker loop   │    │ • Thread mgmt    │    │ • OS threads    │
//! │ • Aggregation   │    │ • Join barrier   │    │                 │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use idscan::parallel::ExecutionStrategy;
//!
//! let strategy = ExecutionStrategy::Parallel { workers: 4 };
//! let results = strategy.execute(|worker_id| worker_id + 1).unwrap();
//! assert_eq!(results.iter().sum::<usize>(), 10);
//! ```

pub mod core;

// Re-export main types for easier access
pub use self::core::ExecutionStrategy;
