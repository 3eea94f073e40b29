//! # sentiscore
//!
//! Evaluation harness for star-rating sentiment classifiers.
//!
//! - **Label taxonomy**: five star tokens (`"1 star"` .. `"5 stars"`)
//!   collapsed into {negative, neutral, positive}
//! - **Gold validation**: all-or-nothing parsing of the gold-label file
//! - **Scoring**: index-aligned accuracy with an explicit alignment check
//! - **Statistics**: per-star/per-category distribution and confidence
//!   descriptives over the batch
//!
//! The classifier itself is an external collaborator behind the
//! [`Classifier`] trait: batch of texts in, one `{label, score}` pair
//! per text out, in input order. This crate ships no inference backend;
//! it evaluates whatever the collaborator returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use sentiscore::eval::{EvaluationPipeline, GoldLabelSet};
//! use sentiscore::{MockClassifier, RawPrediction};
//!
//! let classifier = MockClassifier::new("demo").with_predictions(vec![
//!     RawPrediction::from_parts("5 stars", 0.92)?,
//!     RawPrediction::from_parts("1 star", 0.88)?,
//! ]);
//! let gold = GoldLabelSet::parse("positive\nnegative\n")?;
//! let texts = vec!["great phone".to_string(), "terrible phone".to_string()];
//!
//! let report = EvaluationPipeline::new(&classifier).evaluate(&texts, &gold)?;
//! assert_eq!(report.accuracy, 1.0);
//! println!("{}", report.summary());
//! # Ok::<(), sentiscore::Error>(())
//! ```
//!
//! ## Design
//!
//! - **Closed enums at the boundary**: star tokens and sentiment labels
//!   are tagged variants, so invalid values are rejected where they are
//!   parsed, never checked ad hoc downstream.
//! - **Fail fast**: every error is a deterministic format or contract
//!   violation; the first one aborts the run with no partial report.
//! - **Positional alignment**: record *i* pairs with gold line *i* by
//!   index. Length equality is checked explicitly (`AlignmentMismatch`)
//!   instead of being discovered through out-of-range access.
//! - **Single-threaded batch**: one fully materialized batch per run,
//!   no shared mutable state across components.

pub mod config;
pub mod corpus;
pub mod error;
pub mod eval;
pub mod label;
pub mod types;

pub mod cli;

pub use config::EvalConfig;
pub use error::{Error, Result};
pub use label::{Sentiment, StarRating};
pub use types::{CanonicalRecord, Confidence, RawPrediction};

use std::fs;
use std::path::Path;

// =============================================================================
// Classifier Collaborator
// =============================================================================

/// The external classification collaborator.
///
/// # Contract
///
/// `classify` must return exactly one prediction per input text, in
/// input order; the pipeline verifies the length and the positional
/// alignment relies on the order. How the call executes internally
/// (including parallel hardware) is the implementor's business; the
/// harness treats it as one opaque blocking batch call.
pub trait Classifier {
    /// Classify a batch of texts.
    fn classify(&self, texts: &[String]) -> Result<Vec<RawPrediction>>;

    /// Identifier used in logs and error messages.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

/// Mock classifier returning preconfigured predictions.
///
/// # Example
///
/// ```rust
/// use sentiscore::{Classifier, MockClassifier, RawPrediction};
///
/// let mock = MockClassifier::new("test-mock")
///     .with_predictions(vec![RawPrediction::from_parts("4 stars", 0.8).unwrap()]);
/// let preds = mock.classify(&["good phone".to_string()]).unwrap();
/// assert_eq!(preds.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClassifier {
    name: &'static str,
    predictions: Vec<RawPrediction>,
}

impl MockClassifier {
    /// Create a new mock classifier.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            predictions: Vec::new(),
        }
    }

    /// Set the predictions to return on every `classify` call.
    #[must_use]
    pub fn with_predictions(mut self, predictions: Vec<RawPrediction>) -> Self {
        self.predictions = predictions;
        self
    }
}

impl Classifier for MockClassifier {
    fn classify(&self, _texts: &[String]) -> Result<Vec<RawPrediction>> {
        Ok(self.predictions.clone())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Classifier backed by a precomputed prediction file.
///
/// Plays the collaborator role when inference ran elsewhere: the file
/// is a JSON array in the classifier wire format,
/// `[{"label": "5 stars", "score": 0.92}, ...]`, one element per
/// corpus line, in corpus order. Parsing rejects unknown star tokens
/// and out-of-range scores at load time.
#[derive(Debug, Clone)]
pub struct PrecomputedClassifier {
    predictions: Vec<RawPrediction>,
}

impl PrecomputedClassifier {
    /// Wrap an in-memory batch.
    #[must_use]
    pub fn new(predictions: Vec<RawPrediction>) -> Self {
        Self { predictions }
    }

    /// Load a prediction batch from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::missing_file(path));
        }
        let raw = fs::read_to_string(path)?;
        let predictions: Vec<RawPrediction> = serde_json::from_str(&raw)
            .map_err(|e| Error::inference(format!("{}: {}", path.display(), e)))?;
        Ok(Self { predictions })
    }

    /// Number of loaded predictions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Whether the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

impl Classifier for PrecomputedClassifier {
    fn classify(&self, _texts: &[String]) -> Result<Vec<RawPrediction>> {
        Ok(self.predictions.clone())
    }

    fn name(&self) -> &'static str {
        "precomputed"
    }
}

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use sentiscore::prelude::*;
    //!
    //! let star = StarRating::parse_token("4 stars").unwrap();
    //! assert_eq!(star.sentiment(), Sentiment::Positive);
    //! ```
    pub use crate::config::EvalConfig;
    pub use crate::error::{Error, Result};
    pub use crate::eval::{
        AccuracyResult, ConfidenceStats, Distribution, EvaluationPipeline, EvaluationReport,
        GoldLabelSet, MatchOutcome, PlotData,
    };
    pub use crate::label::{Sentiment, StarRating};
    pub use crate::types::{CanonicalRecord, Confidence, RawPrediction};
    pub use crate::{Classifier, MockClassifier, PrecomputedClassifier};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_classifier_returns_configured_batch() {
        let pred = RawPrediction::from_parts("2 stars", 0.6).unwrap();
        let mock = MockClassifier::new("m").with_predictions(vec![pred]);
        let out = mock.classify(&["meh".to_string()]).unwrap();
        assert_eq!(out, vec![pred]);
        assert_eq!(mock.name(), "m");
    }

    #[test]
    fn precomputed_classifier_parses_wire_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preds.json");
        fs::write(
            &path,
            r#"[{"label": "5 stars", "score": 0.92}, {"label": "1 star", "score": 0.88}]"#,
        )
        .unwrap();

        let classifier = PrecomputedClassifier::from_file(&path).unwrap();
        assert_eq!(classifier.len(), 2);
        let preds = classifier.classify(&[]).unwrap();
        assert_eq!(preds[0].star, StarRating::Five);
    }

    #[test]
    fn precomputed_classifier_rejects_unknown_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preds.json");
        fs::write(&path, r#"[{"label": "0 stars", "score": 0.5}]"#).unwrap();

        let err = PrecomputedClassifier::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Inference(_)), "got {err:?}");
    }

    #[test]
    fn precomputed_classifier_reports_missing_file() {
        let err = PrecomputedClassifier::from_file(Path::new("/nonexistent/preds.json"))
            .unwrap_err();
        assert!(matches!(err, Error::MissingFile(_)));
    }
}
