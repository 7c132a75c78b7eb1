use super::types::WorkerReport;

/// Sum partial results; order does not matter
pub fn aggregate<I>(partial_sums: I) -> u128
where
    I: IntoIterator<Item = u128>,
{
    partial_sums.into_iter().sum()
}

/// Totals folded from joined worker reports
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub total: u128,
    pub chunks: usize,
    pub ids_scanned: u128,
    pub invalid_ids: u64,
}

/// Fold every worker's report into run totals
pub fn aggregate_reports(reports: &[WorkerReport]) -> Totals {
    Totals {
        total: aggregate(reports.iter().map(|r| r.partial_sum)),
        chunks: reports.iter().map(|r| r.chunks_claimed).sum(),
        ids_scanned: reports.iter().map(|r| r.ids_scanned).sum(),
        invalid_ids: reports.iter().map(|r| r.invalid_ids).sum(),
    }
}
