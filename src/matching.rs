//! Span matching utilities for evaluating predictions against ground truth.

use crate::types::Span;
use std::collections::HashSet;

/// Check whether two spans overlap.
///
/// Two spans overlap iff `max(a.start, b.start) < min(a.end, b.end)`.
/// The inequality is strict: a zero-length intersection does not count, so
/// touching spans like `[0, 5)` and `[5, 10)` do not overlap. Labels are
/// ignored; overlap is purely positional.
///
/// # Example
///
/// ```
/// use pii_eval::matching::spans_overlap;
/// use pii_eval::types::Span;
///
/// let a = Span::new(0, 10, "ORG").unwrap();
/// let b = Span::new(8, 12, "PERSON").unwrap();
/// assert!(spans_overlap(&a, &b));
///
/// let c = Span::new(10, 15, "ORG").unwrap();
/// assert!(!spans_overlap(&a, &c));
/// ```
pub fn spans_overlap(a: &Span, b: &Span) -> bool {
    a.start.max(b.start) < a.end.min(b.end)
}

/// The matched/unmatched partition of one document's spans.
///
/// A span is matched when it overlaps at least one span on the other side.
/// Matching is many-to-many coverage, not an assignment: several predictions
/// may match one truth span and vice versa.
#[derive(Debug, Clone, Default)]
pub struct SpanMatches {
    /// True spans that overlap at least one predicted span.
    pub matched_true: HashSet<Span>,
    /// Predicted spans that overlap at least one true span.
    pub matched_pred: HashSet<Span>,
}

impl SpanMatches {
    /// Whether a ground-truth span found an overlapping prediction.
    pub fn is_matched_true(&self, span: &Span) -> bool {
        self.matched_true.contains(span)
    }

    /// Whether a predicted span found an overlapping ground-truth span.
    pub fn is_matched_pred(&self, span: &Span) -> bool {
        self.matched_pred.contains(span)
    }
}

/// Partition true and predicted spans for one document into matched vs
/// unmatched sets.
///
/// Every `(true, predicted)` pair is tested with [`spans_overlap`]; both
/// members of an overlapping pair are recorded as matched. Empty input on
/// either side yields empty matched sets.
///
/// # Arguments
///
/// * `true_spans` - Ground truth spans for this document
/// * `predicted_spans` - Predicted spans for this document
pub fn match_spans(true_spans: &[Span], predicted_spans: &[Span]) -> SpanMatches {
    let mut matches = SpanMatches::default();

    for true_span in true_spans {
        for predicted_span in predicted_spans {
            if spans_overlap(true_span, predicted_span) {
                matches.matched_true.insert(true_span.clone());
                matches.matched_pred.insert(predicted_span.clone());
            }
        }
    }

    matches
}
