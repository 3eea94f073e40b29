//! Evaluation harness for sentiment predictions.
//!
//! # Overview
//!
//! Scores a batch of classifier predictions against a gold-label file
//! and aggregates batch statistics:
//!
//! - [`gold`] — gold-label file validation ([`GoldLabelSet`])
//! - [`accuracy`] — index-aligned accuracy ([`AccuracyResult`])
//! - [`distribution`] — per-star / per-category counts ([`Distribution`])
//! - [`confidence`] — confidence descriptives ([`ConfidenceStats`])
//! - [`pipeline`] — fail-fast orchestration ([`EvaluationPipeline`])
//! - [`report`] — the single run output ([`EvaluationReport`])
//!
//! # Alignment
//!
//! The central correctness invariant is positional: the i-th gold label
//! corresponds to the i-th prediction record, paired by index, never by
//! content. Both sequences come from independently read files, so the
//! evaluator checks length equality explicitly (`AlignmentMismatch`)
//! before any indexing happens.
//!
//! # Example
//!
//! ```rust
//! use sentiscore::eval::{accuracy, GoldLabelSet};
//! use sentiscore::{CanonicalRecord, RawPrediction};
//!
//! let pred = RawPrediction::from_parts("5 stars", 0.92)?;
//! let records = vec![CanonicalRecord::from_prediction("great phone", &pred)];
//! let gold = GoldLabelSet::parse("positive\n")?;
//!
//! let result = accuracy::score(&records, &gold)?;
//! assert_eq!(result.accuracy, 1.0);
//! # Ok::<(), sentiscore::Error>(())
//! ```

pub mod accuracy;
pub mod confidence;
pub mod distribution;
pub mod gold;
pub mod pipeline;
pub mod report;

pub use accuracy::{AccuracyResult, MatchOutcome};
pub use confidence::ConfidenceStats;
pub use distribution::Distribution;
pub use gold::GoldLabelSet;
pub use pipeline::{EvaluationPipeline, Stage};
pub use report::{EvaluationReport, PlotData};

/// Arithmetic mean of a non-empty slice.
///
/// Returns `None` for an empty slice; mean is meaningless there and
/// callers surface that as `EmptyBatch`.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of a non-empty slice: the middle element for odd lengths, the
/// average of the two middle elements for even lengths.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
