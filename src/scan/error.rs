//! Error types for the scan engine.
//!
//! Every variant is fatal for the current run: the scan is a single-shot
//! batch computation, so callers report the error and exit.

pub type Result<T> = core::result::Result<T, ScanError>;

#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// Chunk granularity resolved to zero target workers.
    #[error("Invalid chunk granularity: target worker count must be at least 1")]
    InvalidGranularity,

    /// The configured `max_chunks` limit is smaller than the chunks the input needs.
    #[error("Chunk capacity exceeded: limit is {limit} chunks")]
    CapacityExceeded { limit: usize },

    /// A worker thread panicked before reporting its partial sum.
    #[error("Worker {worker_id} panicked during scan")]
    WorkerPanicked { worker_id: usize },

    /// The OS refused to start a worker thread.
    #[error("Failed to spawn worker {worker_id}: {reason}")]
    ThreadSpawn { worker_id: usize, reason: String },

    /// The thread scope itself failed to tear down cleanly.
    #[error("Thread panic occurred during parallel execution")]
    ThreadPanic,
}
