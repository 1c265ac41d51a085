//! Basic evaluation example demonstrating core functionality.

use pii_eval::{
    chain_providers, evaluator::evaluate_with_stats, load_from_json_str,
    matching::spans_overlap, PatternRecognizer, Provider, Span,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== PII Span Evaluation Example ===\n");

    // Example 1: Overlap check
    println!("1. Span Overlap");
    let truth = Span::new(17, 28, "IP_ADDRESS")?;
    let predicted = Span::new(20, 30, "IP_ADDRESS")?;
    println!(
        "   [{}, {}) overlaps [{}, {}): {}",
        truth.start,
        truth.end,
        predicted.start,
        predicted.end,
        spans_overlap(&truth, &predicted)
    );
    println!();

    // Example 2: Load an annotated corpus
    println!("2. Loading Annotated Corpus");
    let corpus_json = r#"{
        "texts": [
            {
                "text": "Alice works at Acme Corp",
                "annotations": [
                    {"start": 0, "end": 5, "label": "PERSON"},
                    {"start": 15, "end": 24, "label": "ORGANIZATION"}
                ],
                "predictions": [
                    {"start": 0, "end": 5, "label": "PERSON"},
                    {"start": 15, "end": 19, "label": "ORGANIZATION"}
                ]
            },
            {
                "text": "The server IP is 192.168.1.1.",
                "annotations": [
                    {"start": 17, "end": 28, "label": "IP_ADDRESS"}
                ],
                "predictions": []
            }
        ]
    }"#;

    let corpus = load_from_json_str(corpus_json)?;
    println!("   Loaded {} documents", corpus.texts.len());
    println!();

    // Example 3: Evaluate predictions against ground truth
    println!("3. Running Evaluation");
    let (report, stats) = evaluate_with_stats(&corpus.texts)?;
    println!("   {}", stats.summary_string());
    println!();
    println!("{}", report.summary_string());

    // Example 4: Rule-based providers producing predictions
    println!("4. Rule-Based Providers");
    let text = "Mail root@example.com from 10.0.0.1";
    let providers = vec![
        Provider::Pattern(PatternRecognizer::email()),
        Provider::Pattern(PatternRecognizer::ip_address()),
    ];

    let spans = chain_providers(&providers, text);
    for span in &spans {
        println!(
            "   Detected {}: {:?} at [{}, {})",
            span.label,
            &text[span.start..span.end],
            span.start,
            span.end
        );
    }
    println!();

    // Example 5: Percentage convention
    println!("5. Percentage Convention");
    let pct = report.global.as_percentage();
    println!(
        "   Global precision {:.2}% / recall {:.2}% / F1 {:.2}%",
        pct.precision, pct.recall, pct.f1
    );
    println!();

    println!("=== Example Complete ===");

    Ok(())
}
