//! Index-aligned accuracy scoring.
//!
//! Walks prediction records and gold labels in lockstep by index and
//! counts exact label matches. The length-equality check is explicit
//! and mandatory: two independently read files pairing by position must
//! never be scored when their counts differ, because truncation or
//! out-of-range indexing would silently produce a wrong score.

use crate::eval::gold::GoldLabelSet;
use crate::label::Sentiment;
use crate::types::CanonicalRecord;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-item scoring outcome, kept for observability.
///
/// Not required by the accuracy contract; the CLI prints these in
/// verbose mode (`<phrase> : <predict> : <gold>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Position in the batch (0-based).
    pub index: usize,
    /// The classified phrase.
    pub text: String,
    /// Canonical predicted label.
    pub predicted: Sentiment,
    /// Gold label at the same position.
    pub gold: Sentiment,
    /// Whether predicted == gold.
    pub matched: bool,
}

/// Result of one accuracy pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyResult {
    /// Number of records whose label matched the gold label.
    pub matches: usize,
    /// Total records scored.
    pub total: usize,
    /// `matches / total`, or 0.0 for an empty batch.
    pub accuracy: f64,
    /// Per-item outcomes, in batch order.
    pub outcomes: Vec<MatchOutcome>,
}

/// Score canonical records against a validated gold-label set.
///
/// # Errors
///
/// [`Error::AlignmentMismatch`] (naming both counts) when the sequences
/// differ in length. A partial score is never returned.
///
/// # Edge cases
///
/// Two empty sequences are aligned; the accuracy is defined as 0.0
/// rather than dividing by zero.
pub fn score(records: &[CanonicalRecord], gold: &GoldLabelSet) -> Result<AccuracyResult> {
    if records.len() != gold.len() {
        return Err(Error::AlignmentMismatch {
            records: records.len(),
            gold: gold.len(),
        });
    }

    let mut matches = 0;
    let mut outcomes = Vec::with_capacity(records.len());
    for (index, (record, expected)) in records.iter().zip(gold.iter()).enumerate() {
        let matched = record.label == expected;
        if matched {
            matches += 1;
        }
        outcomes.push(MatchOutcome {
            index,
            text: record.text.clone(),
            predicted: record.label,
            gold: expected,
            matched,
        });
    }

    let accuracy = if records.is_empty() {
        0.0
    } else {
        matches as f64 / records.len() as f64
    };

    Ok(AccuracyResult {
        matches,
        total: records.len(),
        accuracy,
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawPrediction;

    fn record(text: &str, token: &str) -> CanonicalRecord {
        let pred = RawPrediction::from_parts(token, 0.9).unwrap();
        CanonicalRecord::from_prediction(text, &pred)
    }

    #[test]
    fn perfect_match_scores_one() {
        let records = vec![record("great phone", "5 stars")];
        let gold = GoldLabelSet::from(vec![Sentiment::Positive]);

        let result = score(&records, &gold).unwrap();
        assert_eq!(result.accuracy, 1.0);
        assert_eq!(result.matches, 1);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn total_mismatch_scores_zero() {
        let records = vec![record("great phone", "5 stars")];
        let gold = GoldLabelSet::from(vec![Sentiment::Negative]);

        let result = score(&records, &gold).unwrap();
        assert_eq!(result.accuracy, 0.0);
        assert_eq!(result.matches, 0);
    }

    #[test]
    fn empty_batch_scores_zero_without_division() {
        let result = score(&[], &GoldLabelSet::from(vec![])).unwrap();
        assert_eq!(result.accuracy, 0.0);
        assert_eq!(result.total, 0);
        assert!(result.outcomes.is_empty());
    }

    #[test]
    fn length_mismatch_never_returns_a_partial_score() {
        let records = vec![
            record("great phone", "5 stars"),
            record("terrible phone", "1 star"),
        ];
        let gold = GoldLabelSet::from(vec![Sentiment::Positive]);

        match score(&records, &gold).unwrap_err() {
            Error::AlignmentMismatch { records: r, gold: g } => {
                assert_eq!(r, 2);
                assert_eq!(g, 1);
            }
            other => panic!("expected AlignmentMismatch, got {other:?}"),
        }
    }

    #[test]
    fn gold_longer_than_records_is_also_a_mismatch() {
        // The latent bug in naive implementations: more gold lines than
        // predictions indexes out of range instead of failing cleanly.
        let records = vec![record("ok phone", "3 stars")];
        let gold = GoldLabelSet::from(vec![Sentiment::Neutral, Sentiment::Neutral]);

        assert!(matches!(
            score(&records, &gold),
            Err(Error::AlignmentMismatch { records: 1, gold: 2 })
        ));
    }

    #[test]
    fn outcomes_track_per_item_matches() {
        let records = vec![
            record("great phone", "5 stars"),
            record("ok phone", "3 stars"),
        ];
        let gold = GoldLabelSet::from(vec![Sentiment::Positive, Sentiment::Negative]);

        let result = score(&records, &gold).unwrap();
        assert_eq!(result.accuracy, 0.5);
        assert!(result.outcomes[0].matched);
        assert!(!result.outcomes[1].matched);
        assert_eq!(result.outcomes[1].predicted, Sentiment::Neutral);
        assert_eq!(result.outcomes[1].gold, Sentiment::Negative);
        assert_eq!(result.outcomes[1].index, 1);
    }
}
