//! Property-based tests using proptest
//!
//! These tests verify mathematical properties and invariants that should
//! always hold regardless of the input values.

use pii_eval::accumulator::Accumulators;
use pii_eval::evaluator::evaluate;
use pii_eval::matching::{match_spans, spans_overlap};
use pii_eval::metrics::{calculate_f1_score, calculate_precision_recall, compute_metrics};
use pii_eval::types::{DocumentSpans, Span};
use proptest::prelude::*;

const LABELS: &[&str] = &["PERSON", "ORGANIZATION", "IP_ADDRESS", "EMAIL_ADDRESS"];

fn arb_span() -> impl Strategy<Value = Span> {
    (0usize..200, 1usize..20, prop::sample::select(LABELS.to_vec())).prop_map(|(start, len, label)| {
        Span::new(start, start + len, label).unwrap()
    })
}

fn arb_document() -> impl Strategy<Value = DocumentSpans> {
    (
        prop::collection::vec(arb_span(), 0..8),
        prop::collection::vec(arb_span(), 0..8),
    )
        .prop_map(|(true_spans, predicted_spans)| DocumentSpans {
            text: "generated document".to_string(),
            true_spans,
            predicted_spans,
        })
}

// Property: overlap is symmetric
proptest! {
    #[test]
    fn prop_overlap_symmetric(a in arb_span(), b in arb_span()) {
        prop_assert_eq!(spans_overlap(&a, &b), spans_overlap(&b, &a));
    }
}

// Property: every valid span overlaps itself
proptest! {
    #[test]
    fn prop_span_overlaps_itself(span in arb_span()) {
        prop_assert!(spans_overlap(&span, &span));
    }
}

// Property: touching spans never overlap (boundary is exclusive)
proptest! {
    #[test]
    fn prop_touching_spans_never_overlap(
        start in 0usize..100,
        left_len in 1usize..20,
        right_len in 1usize..20,
    ) {
        let boundary = start + left_len;
        let left = Span::new(start, boundary, "PERSON").unwrap();
        let right = Span::new(boundary, boundary + right_len, "PERSON").unwrap();
        prop_assert!(!spans_overlap(&left, &right));
        prop_assert!(!spans_overlap(&right, &left));
    }
}

// Property: matched sets are subsets of the inputs
proptest! {
    #[test]
    fn prop_matched_sets_are_subsets(
        truth in prop::collection::vec(arb_span(), 0..10),
        predicted in prop::collection::vec(arb_span(), 0..10),
    ) {
        let matches = match_spans(&truth, &predicted);
        for span in &matches.matched_true {
            prop_assert!(truth.contains(span));
        }
        for span in &matches.matched_pred {
            prop_assert!(predicted.contains(span));
        }
    }
}

// Property: a span is matched iff some counterpart overlaps it
proptest! {
    #[test]
    fn prop_match_agrees_with_overlap(
        truth in prop::collection::vec(arb_span(), 0..10),
        predicted in prop::collection::vec(arb_span(), 0..10),
    ) {
        let matches = match_spans(&truth, &predicted);
        for span in &truth {
            let has_overlap = predicted.iter().any(|p| spans_overlap(span, p));
            prop_assert_eq!(matches.is_matched_true(span), has_overlap);
        }
        for span in &predicted {
            let has_overlap = truth.iter().any(|t| spans_overlap(span, t));
            prop_assert_eq!(matches.is_matched_pred(span), has_overlap);
        }
    }
}

// Property: precision and recall are always in [0, 1], never NaN
proptest! {
    #[test]
    fn prop_precision_recall_range(
        tp in 0usize..1000,
        fp in 0usize..1000,
        fn_ in 0usize..1000,
    ) {
        let pr = calculate_precision_recall(tp, fp, fn_);
        prop_assert!((0.0..=1.0).contains(&pr.precision));
        prop_assert!((0.0..=1.0).contains(&pr.recall));
        prop_assert!(!pr.precision.is_nan());
        prop_assert!(!pr.recall.is_nan());
    }
}

// Property: F1 is the harmonic mean of precision and recall
proptest! {
    #[test]
    fn prop_f1_harmonic_mean(
        precision in 0.0f64..=1.0,
        recall in 0.0f64..=1.0,
    ) {
        let f1 = calculate_f1_score(precision, recall);

        if precision + recall > 0.0 {
            let expected = 2.0 * precision * recall / (precision + recall);
            prop_assert!((f1 - expected).abs() < 1e-10);
        } else {
            prop_assert_eq!(f1, 0.0);
        }
    }
}

// Property: metrics computed from indicator pools stay in range
proptest! {
    #[test]
    fn prop_indicator_metrics_range(
        pairs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..100),
    ) {
        let truth: Vec<bool> = pairs.iter().map(|(t, _)| *t).collect();
        let predicted: Vec<bool> = pairs.iter().map(|(_, p)| *p).collect();

        let record = compute_metrics(&truth, &predicted);
        prop_assert!((0.0..=1.0).contains(&record.precision));
        prop_assert!((0.0..=1.0).contains(&record.recall));
        prop_assert!((0.0..=1.0).contains(&record.f1));
    }
}

// Property: accumulator indicator sequences stay aligned
proptest! {
    #[test]
    fn prop_accumulator_sequences_aligned(
        documents in prop::collection::vec(arb_document(), 0..5),
    ) {
        let mut acc = Accumulators::new();
        for document in &documents {
            acc.fold_document(document);
        }

        prop_assert_eq!(acc.global.truth().len(), acc.global.predicted().len());
        for pool in acc.by_entity.values() {
            prop_assert_eq!(pool.truth().len(), pool.predicted().len());
        }
    }
}

// Property: evaluation is deterministic across repeated runs
proptest! {
    #[test]
    fn prop_evaluate_idempotent(
        documents in prop::collection::vec(arb_document(), 0..5),
    ) {
        let first = evaluate(&documents).unwrap();
        let second = evaluate(&documents).unwrap();
        prop_assert_eq!(first, second);
    }
}

// Property: per-entity keys are exactly the labels observed in the corpus
proptest! {
    #[test]
    fn prop_by_entity_keys_match_observed_labels(
        documents in prop::collection::vec(arb_document(), 0..5),
    ) {
        let report = evaluate(&documents).unwrap();

        let mut observed: Vec<&str> = documents
            .iter()
            .flat_map(|d| d.true_spans.iter().chain(&d.predicted_spans))
            .map(|s| s.label.as_str())
            .collect();
        observed.sort_unstable();
        observed.dedup();

        let keys: Vec<&str> = report.by_entity.keys().map(String::as_str).collect();
        prop_assert_eq!(keys, observed);
    }
}

// Property: perfect prediction of truth yields perfect metrics
proptest! {
    #[test]
    fn prop_echoing_truth_is_perfect(
        truth in prop::collection::vec(arb_span(), 1..8),
    ) {
        let document = DocumentSpans {
            text: "echo".to_string(),
            true_spans: truth.clone(),
            predicted_spans: truth,
        };

        let report = evaluate(&[document]).unwrap();
        prop_assert!((report.global.precision - 1.0).abs() < 1e-10);
        prop_assert!((report.global.recall - 1.0).abs() < 1e-10);
        prop_assert!((report.global.f1 - 1.0).abs() < 1e-10);
    }
}
