//! Rule-based span providers and provider chaining.
//!
//! The evaluation engine accepts predicted spans from any source. This
//! module supplies the built-in rule-based providers (pattern recognizers
//! for structured PII such as IP addresses and email addresses) and a
//! chaining helper that runs several providers over a text in priority
//! order. Model-backed anonymizers are external collaborators: their
//! already-computed output enters the chain as [`Provider::Precomputed`].
//!
//! Span offsets follow the same convention as the corpus they are scored
//! against; the built-in recognizers emit byte offsets, which coincide
//! with character offsets for ASCII text.

use crate::error::{PiiEvalError, Result};
use crate::matching::spans_overlap;
use crate::types::Span;
use once_cell::sync::Lazy;
use regex::Regex;

/// A single-label regex recognizer.
///
/// Every regex match in the input text becomes one predicted span tagged
/// with the recognizer's label.
#[derive(Debug, Clone)]
pub struct PatternRecognizer {
    label: String,
    pattern: Regex,
}

impl PatternRecognizer {
    /// Recognizer for email addresses, labeled `EMAIL_ADDRESS`.
    pub fn email() -> Self {
        static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("email pattern compiles")
        });
        Self {
            label: "EMAIL_ADDRESS".to_string(),
            pattern: EMAIL_PATTERN.clone(),
        }
    }

    /// Recognizer for IPv4 addresses, labeled `IP_ADDRESS`.
    pub fn ip_address() -> Self {
        static IP_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").expect("IP pattern compiles")
        });
        Self {
            label: "IP_ADDRESS".to_string(),
            pattern: IP_PATTERN.clone(),
        }
    }

    /// Recognizer for separator-delimited phone numbers, labeled
    /// `PHONE_NUMBER`.
    pub fn phone_number() -> Self {
        static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b\(?\d{3}\)?[-. ]\d{3}[-. ]\d{4}\b").expect("phone pattern compiles")
        });
        Self {
            label: "PHONE_NUMBER".to_string(),
            pattern: PHONE_PATTERN.clone(),
        }
    }

    /// Recognizer for a caller-supplied pattern and entity label.
    ///
    /// # Errors
    ///
    /// Returns `PiiEvalError::InvalidPattern` if the regex does not compile.
    pub fn with_pattern(label: impl Into<String>, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| PiiEvalError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            label: label.into(),
            pattern,
        })
    }

    /// The entity label this recognizer emits.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Find every occurrence of the pattern in the text.
    ///
    /// Zero-length matches (possible with custom patterns) are discarded
    /// so every emitted span is a valid half-open range.
    pub fn recognize(&self, text: &str) -> Vec<Span> {
        self.pattern
            .find_iter(text)
            .filter(|m| m.start() < m.end())
            .map(|m| Span {
                start: m.start(),
                end: m.end(),
                label: self.label.clone(),
            })
            .collect()
    }
}

/// A span provider: one fixed variant per way predictions can be produced.
///
/// Closed enum dispatch; adding a provider kind means adding a variant
/// here, not looking a class up by name at runtime.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Regex pattern recognizer.
    Pattern(PatternRecognizer),
    /// Spans computed by an external system (NLP model output, hand labels).
    Precomputed(Vec<Span>),
}

impl Provider {
    /// Produce predicted spans for one text.
    pub fn predict(&self, text: &str) -> Vec<Span> {
        match self {
            Provider::Pattern(recognizer) => recognizer.recognize(text),
            Provider::Precomputed(spans) => spans.clone(),
        }
    }
}

/// Run providers in priority order and merge their predictions.
///
/// Earlier providers win: a candidate span is dropped when it overlaps a
/// span an earlier provider (or an earlier, longer candidate of the same
/// provider) already claimed. This mirrors chained anonymization, where a
/// region masked by one step is no longer visible to the next. The result
/// is sorted by position.
pub fn chain_providers(providers: &[Provider], text: &str) -> Vec<Span> {
    let mut kept: Vec<Span> = Vec::new();

    for provider in providers {
        let mut candidates = provider.predict(text);
        // Longer candidates first so nested duplicates within one provider
        // resolve to the widest span.
        candidates.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start.cmp(&b.start)));

        for candidate in candidates {
            if candidate.is_valid() && !kept.iter().any(|k| spans_overlap(k, &candidate)) {
                kept.push(candidate);
            }
        }
    }

    kept.sort_by_key(|span| (span.start, span.end));
    kept
}
