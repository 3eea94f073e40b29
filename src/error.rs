//! Error types for sentiscore.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for sentiscore operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sentiscore operations.
///
/// Every variant is a deterministic format or contract violation; none
/// are transient, so callers abort the run on the first error instead
/// of retrying.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Data or gold-label path does not resolve to a file.
    #[error("File not found: {0}")]
    MissingFile(PathBuf),

    /// A gold-label line is not one of the three canonical tokens.
    #[error("Invalid gold label on line {line}: '{content}' is not positive/negative/neutral")]
    InvalidLabelFormat {
        /// 1-based line number in the gold file.
        line: usize,
        /// The offending line content, after trimming.
        content: String,
    },

    /// Gold-label count differs from prediction record count.
    #[error("Alignment mismatch: {records} prediction records vs {gold} gold labels")]
    AlignmentMismatch {
        /// Number of canonical prediction records.
        records: usize,
        /// Number of validated gold labels.
        gold: usize,
    },

    /// Classifier returned a label outside the five star-rating tokens.
    #[error("Unknown classifier label: '{0}' is not a star-rating token (expected '1 star'..'5 stars')")]
    UnknownLabel(String),

    /// Aggregation requested over zero predictions.
    #[error("Empty batch: {0} is undefined for zero predictions")]
    EmptyBatch(&'static str),

    /// Confidence score outside [0.0, 1.0].
    #[error("Invalid confidence score: {0} is outside [0.0, 1.0]")]
    InvalidConfidence(f64),

    /// Classifier collaborator failed or violated its batch contract.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing-file error.
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Error::MissingFile(path.into())
    }

    /// Create an invalid-label-format error for a gold-file line.
    pub fn invalid_label_format(line: usize, content: impl Into<String>) -> Self {
        Error::InvalidLabelFormat {
            line,
            content: content.into(),
        }
    }

    /// Create an unknown-label error.
    pub fn unknown_label(token: impl Into<String>) -> Self {
        Error::UnknownLabel(token.into())
    }

    /// Create an inference error.
    pub fn inference(msg: impl Into<String>) -> Self {
        Error::Inference(msg.into())
    }

    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
