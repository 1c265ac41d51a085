//! F1 Score calculation.

use crate::metrics::precision_recall::PrecisionRecall;

/// Calculate F1 score from precision and recall.
///
/// F1 score is the harmonic mean of precision and recall:
/// F1 = 2 × (Precision × Recall) / (Precision + Recall)
///
/// # Arguments
///
/// * `precision` - Precision value (0.0 to 1.0)
/// * `recall` - Recall value (0.0 to 1.0)
///
/// # Returns
///
/// Returns the F1 score (0.0 to 1.0). Returns 0.0 if both precision and recall are 0.
///
/// # Example
///
/// ```
/// use pii_eval::metrics::f1_score::calculate_f1_score;
///
/// let f1 = calculate_f1_score(0.8, 0.6);
/// assert!((f1 - 0.6857).abs() < 0.001);
/// ```
pub fn calculate_f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        return 0.0;
    }

    2.0 * (precision * recall) / (precision + recall)
}

/// Calculate F1 score from a PrecisionRecall struct.
///
/// # Example
///
/// ```
/// use pii_eval::metrics::precision_recall::calculate_precision_recall;
/// use pii_eval::metrics::f1_score::calculate_f1_from_pr;
///
/// let pr = calculate_precision_recall(8, 2, 3);
/// let f1 = calculate_f1_from_pr(&pr);
/// assert!(f1 > 0.0 && f1 <= 1.0);
/// ```
pub fn calculate_f1_from_pr(pr: &PrecisionRecall) -> f64 {
    calculate_f1_score(pr.precision, pr.recall)
}

/// Calculate F1 score directly from TP, FP, and FN counts.
///
/// # Example
///
/// ```
/// use pii_eval::metrics::f1_score::calculate_f1_from_counts;
///
/// let f1 = calculate_f1_from_counts(8, 2, 3);
/// assert!((f1 - 0.7619).abs() < 0.001);
/// ```
pub fn calculate_f1_from_counts(
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
) -> f64 {
    use crate::metrics::precision_recall::calculate_precision_recall;

    let pr = calculate_precision_recall(true_positives, false_positives, false_negatives);
    calculate_f1_from_pr(&pr)
}
