//! Main evaluation orchestrator for span-overlap metrics.

use crate::accumulator::Accumulators;
use crate::error::{PiiEvalError, Result};
use crate::metrics::compute_metrics;
use crate::stats::CorpusStats;
use crate::types::{DocumentSpans, EvaluationReport};

/// Evaluate predicted spans against ground truth across a corpus.
///
/// Iterates the documents once, folding each one's overlap-match result
/// into fresh global and per-entity accumulators, then derives one metrics
/// record per scope. Repeated calls with the same corpus produce identical
/// reports; nothing is shared between calls.
///
/// Documents with empty span sets on either side are valid input and
/// simply contribute nothing for the missing side. An empty corpus yields
/// an all-zero global record and an empty `by_entity` map.
///
/// # Arguments
///
/// * `documents` - One entry per scored document, pairing its ground-truth
///   spans with the spans an anonymization provider produced
///
/// # Errors
///
/// Returns `PiiEvalError::InvalidSpan` if any span has `end <= start`
/// (possible for deserialized spans, which bypass `Span::new`).
///
/// # Example
///
/// ```
/// use pii_eval::evaluator::evaluate;
/// use pii_eval::types::{DocumentSpans, Span};
///
/// let doc = DocumentSpans {
///     text: "Alice works at Acme".to_string(),
///     true_spans: vec![Span::new(0, 5, "PERSON").unwrap()],
///     predicted_spans: vec![Span::new(0, 5, "PERSON").unwrap()],
/// };
///
/// let report = evaluate(&[doc]).unwrap();
/// assert_eq!(report.global.f1, 1.0);
/// assert_eq!(report.by_entity["PERSON"].precision, 1.0);
/// ```
pub fn evaluate(documents: &[DocumentSpans]) -> Result<EvaluationReport> {
    let mut accumulators = Accumulators::new();

    for document in documents {
        validate_document(document)?;
        accumulators.fold_document(document);
    }

    Ok(assemble_report(&accumulators))
}

/// Evaluate a corpus and also return the corpus statistics of the run.
///
/// Same contract as [`evaluate`], with a [`CorpusStats`] inventory of what
/// was seen (document count, span counts, documents missing ground truth).
pub fn evaluate_with_stats(documents: &[DocumentSpans]) -> Result<(EvaluationReport, CorpusStats)> {
    let mut accumulators = Accumulators::new();
    let mut stats = CorpusStats::new();

    for document in documents {
        validate_document(document)?;
        stats.record_document(document);
        accumulators.fold_document(document);
    }

    Ok((assemble_report(&accumulators), stats))
}

/// Turn the folded accumulators into the final report.
fn assemble_report(accumulators: &Accumulators) -> EvaluationReport {
    let mut report = EvaluationReport::new();
    report.global = compute_metrics(accumulators.global.truth(), accumulators.global.predicted());

    for (label, pool) in &accumulators.by_entity {
        report
            .by_entity
            .insert(label.clone(), compute_metrics(pool.truth(), pool.predicted()));
    }

    report
}

/// Reject documents carrying malformed spans.
fn validate_document(document: &DocumentSpans) -> Result<()> {
    for span in document
        .true_spans
        .iter()
        .chain(&document.predicted_spans)
    {
        if !span.is_valid() {
            return Err(PiiEvalError::InvalidSpan(format!(
                "span [{}, {}) with label {:?}: end must be > start",
                span.start, span.end, span.label
            )));
        }
    }
    Ok(())
}
