//! Precision and Recall calculation.

/// Container for precision and recall values.
#[derive(Debug, Clone)]
pub struct PrecisionRecall {
    pub precision: f64,
    pub recall: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

/// Calculate precision and recall from TP, FP, and FN counts.
///
/// A zero denominator resolves the corresponding metric to `0.0`, never an
/// error or `NaN`.
///
/// # Arguments
///
/// * `true_positives` - Positions where truth and prediction agree
/// * `false_positives` - Predicted positions with no truth counterpart
/// * `false_negatives` - Truth positions with no predicted counterpart
///
/// # Example
///
/// ```
/// use pii_eval::metrics::precision_recall::calculate_precision_recall;
///
/// let pr = calculate_precision_recall(8, 2, 3);
/// assert_eq!(pr.precision, 0.8); // 8 / (8 + 2)
/// assert!((pr.recall - 0.7272).abs() < 0.001); // 8 / (8 + 3)
/// ```
pub fn calculate_precision_recall(
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
) -> PrecisionRecall {
    let precision = if true_positives + false_positives > 0 {
        true_positives as f64 / (true_positives + false_positives) as f64
    } else {
        0.0
    };

    let recall = if true_positives + false_negatives > 0 {
        true_positives as f64 / (true_positives + false_negatives) as f64
    } else {
        0.0
    };

    PrecisionRecall {
        precision,
        recall,
        true_positives,
        false_positives,
        false_negatives,
    }
}

/// Count TP, FP, and FN from two aligned indicator sequences.
///
/// Index `i` of both sequences refers to the same judged item. `TP` counts
/// positions where both indicators are set, `FP` predicted-only positions,
/// `FN` truth-only positions.
///
/// # Panics
///
/// Debug builds assert that the sequences have equal length; release builds
/// judge up to the shorter length.
pub fn counts_from_indicators(truth: &[bool], predicted: &[bool]) -> (usize, usize, usize) {
    debug_assert_eq!(
        truth.len(),
        predicted.len(),
        "indicator sequences must be aligned"
    );

    let mut true_positives = 0;
    let mut false_positives = 0;
    let mut false_negatives = 0;

    for (&t, &p) in truth.iter().zip(predicted.iter()) {
        match (t, p) {
            (true, true) => true_positives += 1,
            (false, true) => false_positives += 1,
            (true, false) => false_negatives += 1,
            (false, false) => {}
        }
    }

    (true_positives, false_positives, false_negatives)
}
