//! Confidence score descriptives.
//!
//! Mean, median, min, and max over the batch's confidence scores.
//! Undefined for an empty batch: min/max of nothing is meaningless, so
//! the aggregator fails with `EmptyBatch` instead of defaulting.

use crate::eval;
use crate::types::RawPrediction;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Descriptive statistics over a batch's confidence scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (average of the middle pair for even lengths).
    pub median: f64,
    /// Smallest score in the batch.
    pub min: f64,
    /// Largest score in the batch.
    pub max: f64,
}

/// Aggregate confidence statistics over a prediction batch.
///
/// # Errors
///
/// [`Error::EmptyBatch`] for zero predictions.
pub fn aggregate(predictions: &[RawPrediction]) -> Result<ConfidenceStats> {
    let scores = scores(predictions);
    if scores.is_empty() {
        return Err(Error::EmptyBatch("confidence aggregation"));
    }

    // Non-empty by the guard above; fold instead of Ord because the
    // scores are f64 (always finite, Confidence guarantees it).
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = eval::mean(&scores).unwrap_or(0.0);
    let median = eval::median(&scores).unwrap_or(0.0);

    Ok(ConfidenceStats {
        mean,
        median,
        min,
        max,
    })
}

/// Confidence scores as plain numbers, in batch order.
///
/// Handed to the external histogram collaborator.
#[must_use]
pub fn scores(predictions: &[RawPrediction]) -> Vec<f64> {
    predictions.iter().map(|p| p.score.get()).collect()
}
