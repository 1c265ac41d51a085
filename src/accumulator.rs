//! Indicator accumulation across documents for global and per-entity scopes.
//!
//! Each evaluation run folds documents one at a time into an [`Accumulators`]
//! value: a global pool of aligned truth/prediction indicators plus one pool
//! per observed entity label. The pools are consumed by the metrics layer
//! after the whole corpus has been folded.

use crate::matching::{match_spans, SpanMatches};
use crate::types::{DocumentSpans, Span};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Two aligned indicator sequences for one scope.
///
/// Index `i` of both sequences refers to the same judged item: a unique
/// span position observed in some document. The sequences always have
/// equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorPool {
    truth: Vec<bool>,
    predicted: Vec<bool>,
}

impl IndicatorPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one aligned indicator pair.
    pub fn push_pair(&mut self, truth: bool, predicted: bool) {
        self.truth.push(truth);
        self.predicted.push(predicted);
    }

    /// Number of judged items in the pool.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.truth.len(), self.predicted.len());
        self.truth.len()
    }

    /// Whether the pool has judged any item yet.
    pub fn is_empty(&self) -> bool {
        self.truth.is_empty()
    }

    /// The ground-truth indicator sequence.
    pub fn truth(&self) -> &[bool] {
        &self.truth
    }

    /// The prediction indicator sequence.
    pub fn predicted(&self) -> &[bool] {
        &self.predicted
    }
}

/// Accumulator state for one evaluation run.
///
/// Never shared across runs: the orchestrator creates a fresh value per
/// call and discards it once the report is assembled. A label appears in
/// `by_entity` iff at least one true or predicted span with that label was
/// observed.
#[derive(Debug, Clone, Default)]
pub struct Accumulators {
    /// Pool over every observed position, all labels together.
    pub global: IndicatorPool,
    /// Pools keyed by entity label.
    pub by_entity: BTreeMap<String, IndicatorPool>,
}

impl Accumulators {
    /// Create empty accumulators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's spans into the global and per-entity pools.
    ///
    /// Every unique span position observed in the document contributes
    /// exactly one aligned pair to each scope it is observed in:
    ///
    /// * `(1, 1)` when a span at that position (either side) overlaps a
    ///   counterpart — approximate region agreement is credited as a true
    ///   positive, not punished as a miss plus a false alarm;
    /// * `(1, 0)` for a truth-only position with no overlapping prediction;
    /// * `(0, 1)` for a prediction-only position with no overlapping truth.
    ///
    /// Identical positions on both sides overlap trivially and fall under
    /// the first rule. Duplicate spans within one side collapse to a single
    /// position.
    pub fn fold_document(&mut self, document: &DocumentSpans) {
        let matches = match_spans(&document.true_spans, &document.predicted_spans);

        fold_scope(
            &mut self.global,
            document.true_spans.iter(),
            document.predicted_spans.iter(),
            &matches,
        );

        let mut labels: BTreeSet<&str> = BTreeSet::new();
        for span in document.true_spans.iter().chain(&document.predicted_spans) {
            labels.insert(span.label.as_str());
        }

        for label in labels {
            let pool = self.by_entity.entry(label.to_string()).or_default();
            fold_scope(
                pool,
                document.true_spans.iter().filter(|s| s.label == label),
                document.predicted_spans.iter().filter(|s| s.label == label),
                &matches,
            );
        }
    }
}

/// Fold one document's spans (already filtered to a scope) into a pool.
///
/// Positions are deduplicated per side, then the union is walked in sorted
/// order so repeated runs over the same corpus produce identical pools.
fn fold_scope<'a>(
    pool: &mut IndicatorPool,
    true_spans: impl Iterator<Item = &'a Span>,
    predicted_spans: impl Iterator<Item = &'a Span>,
    matches: &SpanMatches,
) {
    let mut true_positions: HashSet<(usize, usize)> = HashSet::new();
    let mut matched_positions: HashSet<(usize, usize)> = HashSet::new();

    for span in true_spans {
        true_positions.insert(span.position());
        if matches.is_matched_true(span) {
            matched_positions.insert(span.position());
        }
    }

    let mut predicted_positions: HashSet<(usize, usize)> = HashSet::new();
    for span in predicted_spans {
        predicted_positions.insert(span.position());
        if matches.is_matched_pred(span) {
            matched_positions.insert(span.position());
        }
    }

    let universe: BTreeSet<(usize, usize)> = true_positions
        .union(&predicted_positions)
        .copied()
        .collect();

    for position in universe {
        if matched_positions.contains(&position) {
            pool.push_pair(true, true);
        } else if true_positions.contains(&position) {
            pool.push_pair(true, false);
        } else {
            pool.push_pair(false, true);
        }
    }
}
