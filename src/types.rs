//! Core data types for annotated spans and evaluation reports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A labeled region of text.
///
/// Represents a half-open character range `[start, end)` tagged with an
/// entity category such as `"PERSON"` or `"IP_ADDRESS"`. Spans are value
/// types: immutable once created, hashable, and comparable by all three
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl Span {
    /// Create a new span, validating its coordinates.
    ///
    /// # Errors
    ///
    /// Returns `PiiEvalError::InvalidSpan` if `end <= start`.
    ///
    /// # Example
    ///
    /// ```
    /// use pii_eval::types::Span;
    ///
    /// let span = Span::new(0, 5, "PERSON").unwrap();
    /// assert_eq!(span.len(), 5);
    /// assert!(Span::new(5, 5, "PERSON").is_err());
    /// ```
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> crate::error::Result<Self> {
        let label = label.into();
        if end <= start {
            return Err(crate::error::PiiEvalError::InvalidSpan(format!(
                "span [{start}, {end}) with label {label:?} must satisfy start < end"
            )));
        }
        Ok(Self { start, end, label })
    }

    /// The `(start, end)` position pair, ignoring the label.
    pub fn position(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Number of character positions covered by the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the span covers no characters (only possible for spans
    /// built by deserialization, which bypasses `new`).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that the span coordinates are well-formed (`start < end`).
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }
}

/// Ground truth and predicted spans for one document.
///
/// Missing annotation lists deserialize as empty sets: absence of ground
/// truth for a text is a valid, silent outcome, not an error. The serde
/// aliases accept the field names used by the annotation store format
/// (`annotations` for truth, `predictions` for system output).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSpans {
    /// The document text, or an opaque identifier for it.
    pub text: String,
    /// Hand-labeled ground truth spans.
    #[serde(default, alias = "annotations")]
    pub true_spans: Vec<Span>,
    /// Spans produced by an anonymization provider.
    #[serde(default, alias = "predictions")]
    pub predicted_spans: Vec<Span>,
}

/// An annotated corpus: the unit of input for one evaluation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(alias = "documents")]
    pub texts: Vec<DocumentSpans>,
}

/// Precision, recall, and F1 for one scope (global or a single entity label).
///
/// All three values are fractions in `[0, 1]`. Use [`as_percentage`] for
/// callers that render the `0–100` convention.
///
/// [`as_percentage`]: MetricsRecord::as_percentage
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl MetricsRecord {
    /// Create a metrics record from already-computed values.
    pub fn new(precision: f64, recall: f64, f1: f64) -> Self {
        Self { precision, recall, f1 }
    }

    /// The same metrics scaled to the `0–100` percentage convention.
    pub fn as_percentage(&self) -> MetricsRecord {
        MetricsRecord {
            precision: self.precision * 100.0,
            recall: self.recall * 100.0,
            f1: self.f1 * 100.0,
        }
    }
}

/// The terminal output of one evaluation run.
///
/// `by_entity` holds one record per entity label observed anywhere in the
/// run (true or predicted side); it is an ordered map so serialization and
/// rendering are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Metrics over every observed position, all labels pooled.
    pub global: MetricsRecord,
    /// Metrics per entity label.
    pub by_entity: BTreeMap<String, MetricsRecord>,
}

impl EvaluationReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a formatted plain-text summary of the report.
    ///
    /// Global metrics first, then one block per entity label.
    pub fn summary_string(&self) -> String {
        let mut out = String::new();
        out.push_str("Global Evaluation Metrics:\n");
        out.push_str(&format!("Precision: {:.4}\n", self.global.precision));
        out.push_str(&format!("Recall: {:.4}\n", self.global.recall));
        out.push_str(&format!("F1 Score: {:.4}\n", self.global.f1));
        out.push_str("\nEntity-Specific Evaluation Metrics:\n");
        for (entity, metrics) in &self.by_entity {
            out.push_str(&format!("Entity: {entity}\n"));
            out.push_str(&format!("  Precision: {:.4}\n", metrics.precision));
            out.push_str(&format!("  Recall: {:.4}\n", metrics.recall));
            out.push_str(&format!("  F1 Score: {:.4}\n", metrics.f1));
        }
        out
    }

    /// Print the summary to stdout.
    pub fn print_summary(&self) {
        println!("{}", self.summary_string());
    }
}
