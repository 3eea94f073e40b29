//! The evaluation report.
//!
//! One [`EvaluationReport`] is built per run and never mutated
//! afterward. It carries the accuracy, the batch distribution, the
//! confidence descriptives, the per-item outcomes, and the plain
//! numeric arrays an external plotting collaborator consumes.
//! Rendering is deterministic: identical inputs produce byte-identical
//! summaries.

use crate::eval::accuracy::{AccuracyResult, MatchOutcome};
use crate::eval::confidence::ConfidenceStats;
use crate::eval::distribution::Distribution;
use crate::label::Sentiment;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// Numeric arrays for the external plotting/histogram collaborators.
///
/// All three are in batch order. The core produces them and consumes
/// nothing back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    /// Star value (1-5) per prediction, for the star bar chart.
    pub star_values: Vec<u8>,
    /// Category label per prediction, for the category bar chart.
    pub category_labels: Vec<String>,
    /// Confidence score per prediction, for the histogram.
    pub confidence_scores: Vec<f64>,
}

/// Complete output of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Fraction of records whose label matched the gold label, in [0, 1].
    pub accuracy: f64,
    /// Matched record count.
    pub matches: usize,
    /// Total records scored.
    pub total: usize,
    /// Per-star and per-category breakdown.
    pub distribution: Distribution,
    /// Confidence descriptives.
    pub confidence: ConfidenceStats,
    /// Per-item match outcomes, in batch order.
    pub outcomes: Vec<MatchOutcome>,
    /// Arrays for the plotting collaborators.
    pub plot: PlotData,
}

impl EvaluationReport {
    /// Assemble a report from the individual aggregation results.
    #[must_use]
    pub fn new(
        scored: AccuracyResult,
        distribution: Distribution,
        confidence: ConfidenceStats,
        plot: PlotData,
    ) -> Self {
        Self {
            accuracy: scored.accuracy,
            matches: scored.matches,
            total: scored.total,
            distribution,
            confidence,
            outcomes: scored.outcomes,
            plot,
        }
    }

    /// Render the printed textual summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(50);

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "PREDICTION DISTRIBUTION");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out);
        let _ = writeln!(out, "By star:");
        for (star, count) in &self.distribution.by_star {
            let unit = if *star == 1 { "star " } else { "stars" };
            let _ = writeln!(
                out,
                "  {star} {unit}: {count:3} predictions ({:5.1}%)",
                self.distribution.star_percentage(*star)
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "By sentiment category:");
        for category in Sentiment::ALL {
            let count = self.distribution.by_category.get(&category).copied().unwrap_or(0);
            let _ = writeln!(
                out,
                "  {:8}: {count:3} predictions ({:5.1}%)",
                category.as_label(),
                self.distribution.category_percentage(category)
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total predictions: {}", self.distribution.total);
        let _ = writeln!(out, "Mean rating: {:.2}", self.distribution.mean_star);
        let _ = writeln!(out, "Median rating: {:.1}", self.distribution.median_star);

        let _ = writeln!(out);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "MODEL CONFIDENCE");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Mean confidence: {:.3}", self.confidence.mean);
        let _ = writeln!(out, "Median confidence: {:.3}", self.confidence.median);
        let _ = writeln!(out, "Min confidence: {:.3}", self.confidence.min);
        let _ = writeln!(out, "Max confidence: {:.3}", self.confidence.max);

        let _ = writeln!(out);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "Accuracy: {:.4} ({}/{})",
            self.accuracy, self.matches, self.total
        );

        out
    }

    /// Render the per-item `<phrase> : <predict> : <gold>` listing.
    #[must_use]
    pub fn verbose_listing(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<phrase> : <predict> : <gold>");
        for outcome in &self.outcomes {
            let _ = writeln!(
                out,
                "{} : {} : {}",
                outcome.text, outcome.predicted, outcome.gold
            );
        }
        out
    }

    /// Serialize the full report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::config(format!("report serialization: {e}")))
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::gold::GoldLabelSet;
    use crate::eval::{accuracy, confidence, distribution};
    use crate::types::{CanonicalRecord, RawPrediction};

    fn sample_report() -> EvaluationReport {
        let preds = vec![
            RawPrediction::from_parts("5 stars", 0.92).unwrap(),
            RawPrediction::from_parts("1 star", 0.88).unwrap(),
        ];
        let records: Vec<CanonicalRecord> = ["great phone", "terrible phone"]
            .iter()
            .zip(&preds)
            .map(|(t, p)| CanonicalRecord::from_prediction(*t, p))
            .collect();
        let gold = GoldLabelSet::from(vec![Sentiment::Positive, Sentiment::Negative]);

        let scored = accuracy::score(&records, &gold).unwrap();
        let dist = distribution::aggregate(&preds).unwrap();
        let conf = confidence::aggregate(&preds).unwrap();
        let plot = PlotData {
            star_values: distribution::star_values(&preds),
            category_labels: distribution::category_labels(&preds),
            confidence_scores: confidence::scores(&preds),
        };
        EvaluationReport::new(scored, dist, conf, plot)
    }

    #[test]
    fn summary_names_the_key_figures() {
        let report = sample_report();
        let summary = report.summary();
        assert!(summary.contains("Accuracy: 1.0000 (2/2)"), "{summary}");
        assert!(summary.contains("Mean rating: 3.00"), "{summary}");
        assert!(summary.contains("Median rating: 3.0"), "{summary}");
        assert!(summary.contains("Mean confidence: 0.900"), "{summary}");
        // The full category domain is printed even when a bucket is zero.
        assert!(summary.contains("neutral"), "{summary}");
    }

    #[test]
    fn summary_is_deterministic() {
        assert_eq!(sample_report().summary(), sample_report().summary());
    }

    #[test]
    fn verbose_listing_shows_every_row() {
        let listing = sample_report().verbose_listing();
        assert!(listing.contains("great phone : positive : positive"));
        assert!(listing.contains("terrible phone : negative : negative"));
    }

    #[test]
    fn json_round_trip() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let back: EvaluationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
