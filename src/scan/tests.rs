use super::*;
use crate::config::{ScannerConfig, StrategyMode};
use crate::parallel::ExecutionStrategy;

fn ranges(pairs: &[(u64, u64)]) -> Vec<IdRange> {
    pairs
        .iter()
        .map(|&(start, end)| IdRange::new(start, end).unwrap())
        .collect()
}

/// Straight single-threaded loop over every ID, no chunking involved
fn reference_sum(input: &[IdRange], rule: Rule) -> u128 {
    input
        .iter()
        .flat_map(IdRange::ids)
        .filter(|&id| rule.is_invalid(id))
        .map(u128::from)
        .sum()
}

fn config(strategy: StrategyMode, max_threads: usize) -> ScannerConfig {
    ScannerConfig {
        max_threads,
        strategy,
        ..ScannerConfig::default()
    }
}

#[test]
fn test_small_ranges_total() {
    let scanner = Scanner::new(config(StrategyMode::Parallel, 0));
    let result = scanner.scan(&ranges(&[(1, 5), (8, 11)])).unwrap();
    assert_eq!(result.total, 11);
    assert_eq!(result.stats.ids_scanned, 9);
    assert_eq!(result.stats.invalid_ids, 1);
}

#[test]
fn test_odd_length_range_totals_zero() {
    let scanner = Scanner::new(config(StrategyMode::Parallel, 0));
    assert_eq!(scanner.scan(&ranges(&[(100, 121)])).unwrap().total, 0);
    assert_eq!(scanner.scan(&ranges(&[(1188, 1191)])).unwrap().total, 0);
}

#[test]
fn test_single_id_range() {
    let scanner = Scanner::new(config(StrategyMode::Parallel, 0));
    assert_eq!(scanner.scan(&ranges(&[(1212, 1212)])).unwrap().total, 1212);
}

#[test]
fn test_no_ranges() {
    let scanner = Scanner::new(config(StrategyMode::Parallel, 4));
    let result = scanner.scan(&[]).unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.stats.chunks, 0);
}

#[test]
fn test_parallel_matches_reference_for_any_worker_count() {
    let input = ranges(&[
        (11, 22),
        (95, 115),
        (998, 1012),
        (1_188_511_880, 1_188_511_890),
        (222_220, 222_224),
        (1_698_522, 1_698_528),
        (446_443, 446_449),
        (38_593_856, 38_593_862),
        (1, 250_000),
    ]);

    for rule in [Rule::Halves, Rule::Repeated] {
        let expected = reference_sum(&input, rule);
        for workers in [1, 2, 3, 4, 7, 16] {
            for chunks_per_worker in [1, 4, 9] {
                let chunker = RangeChunker::for_workers(workers, chunks_per_worker).unwrap();
                let plan = ScanPlan {
                    strategy: ExecutionStrategy::Parallel { workers },
                    queue: WorkQueue::from_ranges(&input, &chunker, 0).unwrap(),
                };
                let reports = plan.run(rule).unwrap();
                assert_eq!(reports.len(), workers);
                assert_eq!(
                    aggregate(reports.iter().map(|r| r.partial_sum)),
                    expected,
                    "{rule} with {workers} workers x {chunks_per_worker}"
                );
                let claimed: usize = reports.iter().map(|r| r.chunks_claimed).sum();
                assert_eq!(claimed, plan.queue.len());
            }
        }
    }
}

#[test]
fn test_sequential_and_parallel_agree() {
    let input = ranges(&[(1, 5), (8, 11), (100, 121), (1212, 1212), (10, 1_000_000)]);

    let sequential = Scanner::new(config(StrategyMode::Sequential, 0))
        .scan(&input)
        .unwrap();
    let parallel = Scanner::new(config(StrategyMode::Parallel, 0))
        .scan(&input)
        .unwrap();

    assert!(!sequential.parallel);
    assert_eq!(sequential.stats.workers, 1);
    assert_eq!(sequential.total, parallel.total);
    assert_eq!(sequential.total, reference_sum(&input, Rule::Halves));
    assert_eq!(sequential.stats.ids_scanned, parallel.stats.ids_scanned);
}

#[test]
fn test_repeated_rule_through_scanner() {
    let scanner = Scanner::new(ScannerConfig {
        rule: Rule::Repeated,
        ..ScannerConfig::default()
    });
    // 99 and 111 repeat a block; only 99 mirrors its halves
    let result = scanner.scan(&ranges(&[(95, 115)])).unwrap();
    assert_eq!(result.total, 99 + 111);
}

#[test]
fn test_auto_strategy_picks_sequential_for_tiny_input() {
    let scanner = Scanner::new(ScannerConfig {
        strategy: StrategyMode::Auto,
        min_ids_for_parallel: 1_000,
        ..ScannerConfig::default()
    });
    let plan = scanner.plan(&ranges(&[(1, 10)])).unwrap();
    assert_eq!(plan.strategy, ExecutionStrategy::Sequential);
}

#[test]
fn test_chunk_limit_surfaces_capacity_error() {
    let scanner = Scanner::new(ScannerConfig {
        max_threads: 2,
        chunks_per_worker: 4,
        max_chunks: 3,
        ..ScannerConfig::default()
    });
    let err = scanner.scan(&ranges(&[(1, 1_000)])).unwrap_err();
    assert_eq!(err, ScanError::CapacityExceeded { limit: 3 });
}

#[test]
fn test_zero_chunks_per_worker_is_rejected() {
    let scanner = Scanner::new(ScannerConfig {
        chunks_per_worker: 0,
        ..ScannerConfig::default()
    });
    assert_eq!(
        scanner.scan(&ranges(&[(1, 10)])).unwrap_err(),
        ScanError::InvalidGranularity
    );
}

#[test]
fn test_plan_sizes_chunks_for_workers() {
    let scanner = Scanner::new(ScannerConfig {
        max_threads: 1,
        chunks_per_worker: 4,
        ..ScannerConfig::default()
    });
    let plan = scanner.plan(&ranges(&[(1, 100)])).unwrap();
    assert_eq!(plan.strategy, ExecutionStrategy::Parallel { workers: 1 });
    assert_eq!(plan.queue.len(), 4);
}
