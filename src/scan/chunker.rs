use super::error::{Result, ScanError};
use super::types::{Chunk, IdRange};
use std::num::NonZeroUsize;

/// Splits ID ranges into roughly `target_workers` chunks each.
///
/// `chunk_size = max(1, len / target_workers)`, so the last chunk of a range
/// may be shorter and a range may yield up to `2 * target_workers - 1`
/// chunks.
#[derive(Debug, Clone, Copy)]
pub struct RangeChunker {
    target_workers: NonZeroUsize,
}

impl RangeChunker {
    pub fn new(target_worker_count: usize) -> Result<Self> {
        NonZeroUsize::new(target_worker_count)
            .map(|target_workers| Self { target_workers })
            .ok_or(ScanError::InvalidGranularity)
    }

    /// Chunker for `workers` threads with `chunks_per_worker` chunks each
    pub fn for_workers(workers: usize, chunks_per_worker: usize) -> Result<Self> {
        Self::new(workers.saturating_mul(chunks_per_worker))
    }

    pub fn target_workers(&self) -> usize {
        self.target_workers.get()
    }

    /// Chunk length used for `range`
    pub fn chunk_size(&self, range: IdRange) -> u128 {
        (range.id_count() / self.target_workers.get() as u128).max(1)
    }

    /// Lazily yield the chunks of `range` in ascending order
    pub fn chunks(&self, range: IdRange) -> Chunks {
        Chunks {
            next_start: Some(range.start),
            end: range.end,
            chunk_size: self.chunk_size(range),
        }
    }

    /// Number of chunks `range` splits into: `ceil(len / chunk_size)`
    pub fn chunk_count(&self, range: IdRange) -> u128 {
        range.id_count().div_ceil(self.chunk_size(range))
    }

    /// Exact chunk count for all `ranges`, used to pre-size the queue
    pub fn estimate_chunks(&self, ranges: &[IdRange]) -> usize {
        ranges
            .iter()
            .map(|range| usize::try_from(self.chunk_count(*range)).unwrap_or(usize::MAX))
            .fold(0usize, usize::saturating_add)
    }
}

/// Split `range` into an ordered list of chunks for `target_worker_count` workers
pub fn make_chunks(range: IdRange, target_worker_count: usize) -> Result<Vec<Chunk>> {
    Ok(RangeChunker::new(target_worker_count)?.chunks(range).collect())
}

/// Iterator over the chunks of a single range
#[derive(Debug, Clone)]
pub struct Chunks {
    next_start: Option<u64>,
    end: u64,
    chunk_size: u128,
}

impl Iterator for Chunks {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let start = self.next_start?;
        // u128 keeps `start + chunk_size - 1` from overflowing near u64::MAX
        let end = (start as u128 + self.chunk_size - 1).min(self.end as u128) as u64;
        self.next_start = if end == self.end { None } else { Some(end + 1) };
        Some(Chunk { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u64, end: u64) -> IdRange {
        IdRange::new(start, end).unwrap()
    }

    /// Chunks must tile the range exactly, in order, with no empty chunk.
    fn assert_partition(range: IdRange, chunks: &[Chunk]) {
        assert!(!chunks.is_empty());
        assert_eq!(chunks.first().unwrap().start, range.start);
        assert_eq!(chunks.last().unwrap().end, range.end);
        for chunk in chunks {
            assert!(chunk.start <= chunk.end);
        }
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end + 1, pair[1].start, "gap or overlap in {pair:?}");
        }
        let covered: u128 = chunks.iter().map(Chunk::id_count).sum();
        assert_eq!(covered, range.id_count());
    }

    #[test]
    fn test_zero_target_is_rejected() {
        assert_eq!(
            RangeChunker::new(0).unwrap_err(),
            ScanError::InvalidGranularity
        );
        assert!(make_chunks(range(1, 10), 0).is_err());
        assert!(RangeChunker::for_workers(0, 4).is_err());
    }

    #[test]
    fn test_even_split() {
        let chunks = make_chunks(range(1, 100), 4).unwrap();
        assert_eq!(
            chunks,
            vec![
                Chunk { start: 1, end: 25 },
                Chunk { start: 26, end: 50 },
                Chunk { start: 51, end: 75 },
                Chunk { start: 76, end: 100 },
            ]
        );
    }

    #[test]
    fn test_remainder_lands_in_extra_chunk() {
        // 10 ids / 3 workers -> chunk size 3, last chunk holds the leftover id
        let chunks = make_chunks(range(0, 9), 3).unwrap();
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[3], Chunk { start: 9, end: 9 });
    }

    #[test]
    fn test_small_range_uses_unit_chunks() {
        let chunks = make_chunks(range(5, 7), 16).unwrap();
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.start == c.end));

        let single = make_chunks(range(42, 42), 16).unwrap();
        assert_eq!(single, vec![Chunk { start: 42, end: 42 }]);
    }

    #[test]
    fn test_chunks_partition_ranges() {
        let ranges = [
            range(0, 0),
            range(1, 5),
            range(8, 11),
            range(100, 121),
            range(1_188_511_880, 1_188_511_890),
            range(998, 1_012),
            range(11, 22_222),
        ];
        for r in ranges {
            for target in 1..=40 {
                let chunks = make_chunks(r, target).unwrap();
                assert_partition(r, &chunks);
                assert!(chunks.len() < 2 * target, "{} chunks for target {target}", chunks.len());
            }
        }
    }

    #[test]
    fn test_u64_boundaries_do_not_overflow() {
        let top = range(u64::MAX - 10, u64::MAX);
        assert_partition(top, &make_chunks(top, 4).unwrap());

        let full = range(0, u64::MAX);
        let chunker = RangeChunker::new(1).unwrap();
        let chunks: Vec<_> = chunker.chunks(full).collect();
        assert_eq!(chunks, vec![Chunk { start: 0, end: u64::MAX }]);

        let chunker = RangeChunker::new(3).unwrap();
        assert_partition(full, &chunker.chunks(full).collect::<Vec<_>>());
    }

    #[test]
    fn test_estimate_is_exact() {
        let chunker = RangeChunker::new(7).unwrap();
        let ranges = [range(1, 5), range(0, 12), range(100, 10_000), range(3, 3)];
        let actual: usize = ranges.iter().map(|r| chunker.chunks(*r).count()).sum();
        assert_eq!(chunker.estimate_chunks(&ranges), actual);

        for target in [1, 2, 3, 8, 13, 40] {
            let chunker = RangeChunker::new(target).unwrap();
            for r in [range(1, 1), range(1, 100), range(7, 1_000_003), range(0, u64::MAX)] {
                assert_eq!(chunker.chunk_count(r), chunker.chunks(r).count() as u128);
            }
        }
    }

    #[test]
    fn test_estimate_is_bounded_by_range_size() {
        // A huge target on a tiny range must not inflate the estimate
        let chunker = RangeChunker::new(400_000_000).unwrap();
        assert_eq!(chunker.estimate_chunks(&[range(1, 5), range(8, 11)]), 9);
    }
}
