//! Gold-label file validation.
//!
//! A gold file holds one canonical label per line, case-insensitive,
//! with blank lines ignored. Validation is all-or-nothing: the first
//! line that does not parse as a canonical label invalidates the whole
//! set (`InvalidLabelFormat`, carrying the offending content and its
//! 1-based file line number). There is no partial acceptance of a valid
//! prefix.
//!
//! Length-equality against the prediction records is deliberately NOT
//! checked here; that is the accuracy evaluator's job, since only the
//! caller holds both sequences.

use crate::corpus;
use crate::label::Sentiment;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An ordered, validated sequence of gold labels.
///
/// Element *i* is the expected label for prediction record *i*; the
/// pairing is positional, never content-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldLabelSet {
    labels: Vec<Sentiment>,
}

impl GoldLabelSet {
    /// Validate raw gold-file contents.
    pub fn parse(raw: &str) -> Result<Self> {
        let numbered = corpus::numbered_lines(raw);
        Self::from_numbered_lines(&numbered)
    }

    /// Read and validate a gold-label file.
    pub fn load(path: &Path) -> Result<Self> {
        let numbered = corpus::read_numbered_lines(path)?;
        Self::from_numbered_lines(&numbered)
    }

    /// Validate pre-split `(line_number, content)` pairs.
    ///
    /// Every line must parse as a canonical label (case-insensitive);
    /// the first failure aborts with [`Error::InvalidLabelFormat`].
    pub fn from_numbered_lines(lines: &[(usize, String)]) -> Result<Self> {
        let mut labels = Vec::with_capacity(lines.len());
        for (line, content) in lines {
            match Sentiment::parse_label(content) {
                Some(label) => labels.push(label),
                None => return Err(Error::invalid_label_format(*line, content.clone())),
            }
        }
        Ok(Self { labels })
    }

    /// The validated labels, in file order.
    #[must_use]
    pub fn labels(&self) -> &[Sentiment] {
        &self.labels
    }

    /// Number of gold labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = Sentiment> + '_ {
        self.labels.iter().copied()
    }
}

impl From<Vec<Sentiment>> for GoldLabelSet {
    fn from(labels: Vec<Sentiment>) -> Self {
        Self { labels }
    }
}
