pub mod aggregate;
pub mod chunker;
pub mod classifier;
pub mod core;
pub mod error;
pub mod queue;
pub mod types;
pub mod worker;

#[cfg(test)]
mod tests;

// Re-export main types for easier access
pub use self::core::{ScanPlan, Scanner};
pub use aggregate::{aggregate, aggregate_reports};
pub use chunker::{RangeChunker, make_chunks};
pub use classifier::{IdClassifier, MirroredHalves, RepeatedPattern, Rule, is_invalid, is_repeated_pattern};
pub use error::ScanError;
pub use queue::WorkQueue;
pub use types::{Chunk, IdRange, ScanResult, ScanStats, WorkerReport};
pub use worker::{scan_chunk, scan_worker};
