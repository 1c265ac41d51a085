/// Statistics tracking for corpus loading and evaluation runs
///
/// This module provides a counter structure for tracking what was observed
/// and what was skipped while preparing a corpus for evaluation.
use serde::{Deserialize, Serialize};

use crate::types::DocumentSpans;

/// Statistics collected while loading and evaluating a span corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Total number of documents seen
    pub documents: usize,

    /// Total number of ground-truth spans seen
    pub true_spans: usize,

    /// Total number of predicted spans seen
    pub predicted_spans: usize,

    /// Number of spans dropped because their coordinates were invalid
    pub skipped_invalid_spans: usize,

    /// Number of documents with no ground-truth spans
    pub documents_without_truth: usize,

    /// Number of documents with no predicted spans
    pub documents_without_predictions: usize,
}

impl CorpusStats {
    /// Create a new `CorpusStats` with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's span counts into the statistics
    pub fn record_document(&mut self, document: &DocumentSpans) {
        self.documents += 1;
        self.true_spans += document.true_spans.len();
        self.predicted_spans += document.predicted_spans.len();
        if document.true_spans.is_empty() {
            self.documents_without_truth += 1;
        }
        if document.predicted_spans.is_empty() {
            self.documents_without_predictions += 1;
        }
    }

    /// Record a span dropped during lenient loading
    pub fn skip_invalid_span(&mut self) {
        self.skipped_invalid_spans += 1;
    }

    /// Total number of spans seen on both sides
    pub fn total_spans(&self) -> usize {
        self.true_spans + self.predicted_spans
    }

    /// Get a formatted string summary of the statistics
    pub fn summary_string(&self) -> String {
        format!(
            "CorpusStats {{ documents: {}, true_spans: {}, predicted_spans: {}, skipped_invalid: {}, no_truth: {}, no_predictions: {} }}",
            self.documents,
            self.true_spans,
            self.predicted_spans,
            self.skipped_invalid_spans,
            self.documents_without_truth,
            self.documents_without_predictions
        )
    }

    /// Print a summary of the statistics to stdout
    pub fn print_summary(&self) {
        println!("\n=== Corpus Statistics ===");
        println!("Documents: {}", self.documents);
        println!("True spans: {}", self.true_spans);
        println!("Predicted spans: {}", self.predicted_spans);
        println!("Skipped invalid spans: {}", self.skipped_invalid_spans);
        println!("Documents without truth: {}", self.documents_without_truth);
        println!(
            "Documents without predictions: {}",
            self.documents_without_predictions
        );
        println!("=========================\n");
    }
}
