use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pii_eval::evaluator::evaluate;
use pii_eval::matching::{match_spans, spans_overlap};
use pii_eval::metrics::compute_metrics;
use pii_eval::types::{DocumentSpans, Span};

fn make_spans(count: usize, label: &str, stride: usize) -> Vec<Span> {
    (0..count)
        .map(|i| Span::new(i * stride, i * stride + 8, label).unwrap())
        .collect()
}

fn bench_overlap_check(c: &mut Criterion) {
    let a = Span::new(10, 60, "ORGANIZATION").unwrap();
    let b = Span::new(30, 80, "ORGANIZATION").unwrap();

    c.bench_function("overlap_single", |bench| {
        bench.iter(|| spans_overlap(black_box(&a), black_box(&b)));
    });
}

fn bench_match_spans(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_spans");

    for size in [10, 50, 100, 500].iter() {
        let truth = make_spans(*size, "PERSON", 10);
        // Offset stride so roughly half the predictions overlap a truth span.
        let predicted = make_spans(*size, "PERSON", 15);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| match_spans(black_box(&truth), black_box(&predicted)));
        });
    }
    group.finish();
}

fn bench_compute_metrics(c: &mut Criterion) {
    let truth: Vec<bool> = (0..10_000).map(|i| i % 3 != 0).collect();
    let predicted: Vec<bool> = (0..10_000).map(|i| i % 4 != 0).collect();

    c.bench_function("compute_metrics_10k", |bench| {
        bench.iter(|| compute_metrics(black_box(&truth), black_box(&predicted)));
    });
}

fn bench_evaluate_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_corpus");

    for num_documents in [10, 100, 500].iter() {
        let documents: Vec<DocumentSpans> = (0..*num_documents)
            .map(|i| DocumentSpans {
                text: format!("document {i}"),
                true_spans: make_spans(5, if i % 2 == 0 { "PERSON" } else { "ORGANIZATION" }, 12),
                predicted_spans: make_spans(5, "PERSON", 14),
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_documents),
            num_documents,
            |bench, _| {
                bench.iter(|| evaluate(black_box(&documents)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_overlap_check,
    bench_match_spans,
    bench_compute_metrics,
    bench_evaluate_corpus
);
criterion_main!(benches);
