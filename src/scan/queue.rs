use super::chunker::RangeChunker;
use super::error::{Result, ScanError};
use super::types::{Chunk, IdRange};
use crossbeam::utils::CachePadded;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared list of chunks plus one atomic claim cursor.
///
/// The queue is filled through `&mut self` ([`WorkQueue::push`]) and drained
/// through `&self` ([`WorkQueue::try_claim`]), so workers can only borrow it
/// once setup is finished. Each claim is a single `fetch_add`; a chunk is
/// handed out at most once and chunks leave the queue in index order.
#[derive(Debug)]
pub struct WorkQueue {
    chunks: Vec<Chunk>,
    cursor: CachePadded<AtomicUsize>,
    limit: Option<usize>,
}

impl WorkQueue {
    /// Empty queue with room for `capacity` chunks and no upper limit.
    ///
    /// Fails with [`ScanError::CapacityExceeded`] when the allocation cannot
    /// be made instead of aborting the process.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut chunks = Vec::new();
        chunks
            .try_reserve_exact(capacity)
            .map_err(|_| ScanError::CapacityExceeded { limit: capacity })?;
        Ok(Self {
            chunks,
            cursor: CachePadded::new(AtomicUsize::new(0)),
            limit: None,
        })
    }

    /// Refuse to grow past `limit` chunks (0 means unlimited)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// Chunk every range and fill a queue sized from the chunker's estimate
    pub fn from_ranges(ranges: &[IdRange], chunker: &RangeChunker, limit: usize) -> Result<Self> {
        let estimate = chunker.estimate_chunks(ranges);
        let capacity = if limit > 0 { estimate.min(limit) } else { estimate };
        let mut queue = Self::with_capacity(capacity)?.with_limit(limit);

        for range in ranges {
            for chunk in chunker.chunks(*range) {
                queue.push(chunk)?;
            }
        }

        tracing::debug!(
            "Work queue ready: {} chunks from {} ranges (estimated {})",
            queue.len(),
            ranges.len(),
            estimate
        );
        Ok(queue)
    }

    /// Append a chunk during setup
    pub fn push(&mut self, chunk: Chunk) -> Result<()> {
        if let Some(limit) = self.limit
            && self.chunks.len() >= limit
        {
            return Err(ScanError::CapacityExceeded { limit });
        }
        self.chunks.push(chunk);
        Ok(())
    }

    /// Claim the next unclaimed chunk, or `None` once the queue is drained.
    ///
    /// Never blocks. `Relaxed` is enough: the chunk list is immutable while
    /// shared, and the cursor only has to hand out distinct indices.
    #[inline]
    pub fn try_claim(&self) -> Option<Chunk> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.chunks.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Total IDs across every queued chunk
    pub fn total_ids(&self) -> u128 {
        self.chunks.iter().map(Chunk::id_count).sum()
    }

    /// Read-only view of the queued chunks
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}
