use super::classifier::IdClassifier;
use super::queue::WorkQueue;
use super::types::{Chunk, WorkerReport};

/// Sum and count of the invalid IDs inside one chunk
#[inline]
pub fn scan_chunk<C: IdClassifier>(chunk: Chunk, classifier: &C) -> (u128, u64) {
    let mut sum = 0u128;
    let mut found = 0u64;
    for id in chunk.ids() {
        if classifier.is_invalid(id) {
            sum += id as u128;
            found += 1;
        }
    }
    (sum, found)
}

/// Worker loop: claim chunks until the queue is empty, accumulating locally.
///
/// Nothing is shared with other workers except the queue cursor; the partial
/// sum only leaves this function through the returned report.
pub fn scan_worker<C: IdClassifier>(
    worker_id: usize,
    queue: &WorkQueue,
    classifier: &C,
) -> WorkerReport {
    tracing::trace!("Worker {worker_id} started");

    let mut report = WorkerReport {
        worker_id,
        ..WorkerReport::default()
    };

    while let Some(chunk) = queue.try_claim() {
        tracing::trace!("Worker {worker_id} claimed {}..={}", chunk.start, chunk.end);
        let (sum, found) = scan_chunk(chunk, classifier);
        report.partial_sum += sum;
        report.invalid_ids += found;
        report.ids_scanned += chunk.id_count();
        report.chunks_claimed += 1;
    }

    tracing::debug!(
        "Worker {worker_id} finished: {} chunks, {} ids, partial sum {}",
        report.chunks_claimed,
        report.ids_scanned,
        report.partial_sum
    );
    report
}
