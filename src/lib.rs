//! # pii-eval
//!
//! A Rust library for scoring PII-anonymization output against hand-labeled
//! ground truth using span-overlap evaluation metrics.
//!
//! This library provides:
//! - **Overlap matching** between predicted and ground-truth entity spans
//!   (positional, label-blind, many-to-many)
//! - **Precision**, **Recall**, and **F1** per evaluation run, globally and
//!   per entity label
//! - Annotated corpus loading from JSON or YAML
//! - Rule-based span providers (email, IP address, phone number patterns)
//!   and provider chaining for producing predictions to score
//!
//! ## Quick Start
//!
//! ```rust
//! use pii_eval::{evaluate, DocumentSpans, Span};
//!
//! # fn main() -> pii_eval::Result<()> {
//! let document = DocumentSpans {
//!     text: "Alice works at Acme".to_string(),
//!     true_spans: vec![Span::new(0, 5, "PERSON")?],
//!     predicted_spans: vec![Span::new(1, 5, "PERSON")?],
//! };
//!
//! // Overlapping-but-not-identical predictions still count as found.
//! let report = evaluate(&[document])?;
//! assert_eq!(report.global.f1, 1.0);
//! assert_eq!(report.by_entity["PERSON"].recall, 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Corpus Format
//!
//! Annotated corpora are lists of documents with truth and prediction
//! spans, in JSON or YAML:
//!
//! ```json
//! {
//!   "texts": [
//!     {
//!       "text": "The server IP is 192.168.1.1.",
//!       "annotations": [
//!         {"start": 17, "end": 28, "label": "IP_ADDRESS"}
//!       ],
//!       "predictions": [
//!         {"start": 17, "end": 28, "label": "IP_ADDRESS"}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Spans are half-open `[start, end)` character ranges. Two spans overlap
//! when `max(start1, start2) < min(end1, end2)`; touching spans do not
//! overlap. All metrics are fractions in `[0, 1]`;
//! [`MetricsRecord::as_percentage`] converts to the `0–100` convention.

pub mod accumulator;
pub mod error;
pub mod evaluator;
pub mod loader;
pub mod matching;
pub mod metrics;
pub mod providers;
pub mod stats;
pub mod types;

// Re-export commonly used types and functions
pub use accumulator::{Accumulators, IndicatorPool};
pub use error::{PiiEvalError, Result};
pub use evaluator::{evaluate, evaluate_with_stats};
pub use loader::{
    drop_invalid_spans, load_from_json_file, load_from_json_str, load_from_yaml_file,
    load_from_yaml_str,
};
pub use matching::{match_spans, spans_overlap, SpanMatches};
pub use metrics::compute_metrics;
pub use providers::{chain_providers, PatternRecognizer, Provider};
pub use stats::CorpusStats;
pub use types::{Corpus, DocumentSpans, EvaluationReport, MetricsRecord, Span};
