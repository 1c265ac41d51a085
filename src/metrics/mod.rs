//! Metrics calculation modules for span evaluation.

pub mod f1_score;
pub mod precision_recall;

pub use f1_score::{calculate_f1_from_counts, calculate_f1_from_pr, calculate_f1_score};
pub use precision_recall::{calculate_precision_recall, counts_from_indicators, PrecisionRecall};

use crate::types::MetricsRecord;

/// Compute a full metrics record from aligned indicator sequences.
///
/// Counts TP/FP/FN over the pairs, then derives binary precision, recall,
/// and F1 as fractions in `[0, 1]`. Empty sequences yield an all-zero
/// record.
pub fn compute_metrics(truth: &[bool], predicted: &[bool]) -> MetricsRecord {
    let (tp, fp, fn_) = counts_from_indicators(truth, predicted);
    let pr = calculate_precision_recall(tp, fp, fn_);
    MetricsRecord {
        precision: pr.precision,
        recall: pr.recall,
        f1: calculate_f1_from_pr(&pr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_metrics_perfect() {
        let record = compute_metrics(&[true, true], &[true, true]);
        assert_eq!(record.precision, 1.0);
        assert_eq!(record.recall, 1.0);
        assert_eq!(record.f1, 1.0);
    }

    #[test]
    fn test_compute_metrics_empty_is_zero() {
        let record = compute_metrics(&[], &[]);
        assert_eq!(record, MetricsRecord::default());
    }

    #[test]
    fn test_compute_metrics_mixed() {
        // One TP, one FP, one FN.
        let record = compute_metrics(&[true, false, true], &[true, true, false]);
        assert!((record.precision - 0.5).abs() < 1e-10);
        assert!((record.recall - 0.5).abs() < 1e-10);
        assert!((record.f1 - 0.5).abs() < 1e-10);
    }
}
