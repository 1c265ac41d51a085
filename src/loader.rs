//! JSON and YAML loading utilities for annotated span corpora.
//!
//! The annotation store format is a list of documents under a `texts` key,
//! each with its text, optional ground-truth `annotations`, and optional
//! `predictions`. Both JSON and YAML renditions of the same shape are
//! accepted.

use crate::error::{PiiEvalError, Result};
use crate::stats::CorpusStats;
use crate::types::{Corpus, DocumentSpans, Span};
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load an annotated corpus from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any span
/// has invalid coordinates.
///
/// # Example
///
/// ```no_run
/// use pii_eval::loader::load_from_json_file;
///
/// let corpus = load_from_json_file("ground_truth.json").unwrap();
/// println!("Loaded {} documents", corpus.texts.len());
/// ```
pub fn load_from_json_file<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let corpus: Corpus = serde_json::from_reader(reader)?;

    validate_corpus(&corpus)?;

    Ok(corpus)
}

/// Load an annotated corpus from a JSON string.
///
/// # Example
///
/// ```
/// use pii_eval::loader::load_from_json_str;
///
/// let json = r#"{
///     "texts": [
///         {
///             "text": "Alice works at Acme",
///             "annotations": [{"start": 0, "end": 5, "label": "PERSON"}]
///         }
///     ]
/// }"#;
/// let corpus = load_from_json_str(json).unwrap();
/// assert_eq!(corpus.texts.len(), 1);
/// ```
pub fn load_from_json_str(json_str: &str) -> Result<Corpus> {
    let corpus: Corpus = serde_json::from_str(json_str)?;
    validate_corpus(&corpus)?;
    Ok(corpus)
}

/// Load an annotated corpus from a YAML file.
///
/// The original annotation stores for this tool are YAML documents of the
/// same shape as the JSON format.
pub fn load_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let contents = fs::read_to_string(path)?;
    load_from_yaml_str(&contents)
}

/// Load an annotated corpus from a YAML string.
///
/// # Example
///
/// ```
/// use pii_eval::loader::load_from_yaml_str;
///
/// let yaml = "
/// texts:
///   - text: Alice works at Acme
///     annotations:
///       - {start: 0, end: 5, label: PERSON}
/// ";
/// let corpus = load_from_yaml_str(yaml).unwrap();
/// assert_eq!(corpus.texts[0].true_spans.len(), 1);
/// ```
pub fn load_from_yaml_str(yaml_str: &str) -> Result<Corpus> {
    let corpus: Corpus = serde_yaml::from_str(yaml_str)?;
    validate_corpus(&corpus)?;
    Ok(corpus)
}

/// Validate that every span in the corpus has well-formed coordinates.
fn validate_corpus(corpus: &Corpus) -> Result<()> {
    for (index, document) in corpus.texts.iter().enumerate() {
        for span in document
            .true_spans
            .iter()
            .chain(&document.predicted_spans)
        {
            if !span.is_valid() {
                return Err(PiiEvalError::InvalidSpan(format!(
                    "document {} has span [{}, {}) with label {:?}: end must be > start",
                    index, span.start, span.end, span.label
                )));
            }
        }
    }

    Ok(())
}

/// Drop invalid spans from a corpus instead of failing on them.
///
/// The skip-offending-data policy from the surrounding orchestration:
/// spans with `end <= start` are removed and counted, valid spans are kept
/// untouched. Returns the cleaned corpus and the statistics of the pass.
pub fn drop_invalid_spans(corpus: &Corpus) -> (Corpus, CorpusStats) {
    let mut stats = CorpusStats::new();
    let mut cleaned = Corpus::default();

    for document in &corpus.texts {
        let keep = |spans: &[Span], stats: &mut CorpusStats| -> Vec<Span> {
            spans
                .iter()
                .filter(|span| {
                    if span.is_valid() {
                        true
                    } else {
                        stats.skip_invalid_span();
                        false
                    }
                })
                .cloned()
                .collect()
        };

        let document = DocumentSpans {
            text: document.text.clone(),
            true_spans: keep(&document.true_spans, &mut stats),
            predicted_spans: keep(&document.predicted_spans, &mut stats),
        };
        stats.record_document(&document);
        cleaned.texts.push(document);
    }

    (cleaned, stats)
}
