use std::ops::RangeInclusive;
use std::time::Duration;

/// Inclusive range of IDs parsed from the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
}

impl IdRange {
    /// Create a range, returning `None` when `start > end`
    pub fn new(start: u64, end: u64) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Number of IDs in the range. A full `u64` range holds 2^64 IDs.
    pub fn id_count(&self) -> u128 {
        (self.end - self.start) as u128 + 1
    }

    pub fn ids(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

/// Contiguous slice of one [`IdRange`], claimed and scanned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: u64,
    pub end: u64,
}

impl Chunk {
    pub fn id_count(&self) -> u128 {
        (self.end - self.start) as u128 + 1
    }

    pub fn ids(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

/// What a single worker hands back when the queue runs dry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    /// Sum of every invalid ID this worker found
    pub partial_sum: u128,
    pub chunks_claimed: usize,
    pub ids_scanned: u128,
    pub invalid_ids: u64,
}

/// Statistics from a scanning operation
#[derive(Debug, Default)]
pub struct ScanStats {
    pub workers: usize,
    pub chunks: usize,
    pub ids_scanned: u128,
    pub invalid_ids: u64,
    pub scan_duration: Duration,
}

/// Result of a scanning operation
#[derive(Debug)]
pub struct ScanResult {
    /// Sum of all invalid IDs across every input range
    pub total: u128,
    pub parallel: bool,
    pub stats: ScanStats,
}
