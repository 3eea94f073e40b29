//! Prediction records and the bounded confidence score.
//!
//! [`Confidence`] is a witness type: once constructed, the value is
//! guaranteed to be in `[0.0, 1.0]` and no bounds check is ever needed
//! again. [`RawPrediction`] is what the classifier collaborator hands
//! back per input text; [`CanonicalRecord`] is its mapped form in the
//! three-class taxonomy, 1:1 with input order.

use crate::label::{Sentiment, StarRating};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Confidence
// =============================================================================

/// A confidence score guaranteed to be in the range [0.0, 1.0].
///
/// `#[repr(transparent)]`: same memory layout as `f64`, no runtime
/// overhead.
///
/// # Construction
///
/// - [`Confidence::new`]: `None` if out of range (strict)
/// - [`Confidence::saturating`]: clamps into [0, 1], never fails
/// - [`TryFrom<f64>`]: `Err(Error::InvalidConfidence)` if out of range
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a confidence, rejecting values outside [0.0, 1.0] or NaN.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) {
            Some(Confidence(value))
        } else {
            None
        }
    }

    /// Create a confidence, clamping into [0.0, 1.0]. NaN clamps to 0.
    #[must_use]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Confidence(0.0)
        } else {
            Confidence(value.clamp(0.0, 1.0))
        }
    }

    /// The underlying score.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// The score rounded to 4 decimal places, the precision canonical
    /// records carry.
    #[must_use]
    pub fn rounded(self) -> f64 {
        (self.0 * 10_000.0).round() / 10_000.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Confidence::new(value).ok_or(Error::InvalidConfidence(value))
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> f64 {
        c.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

// =============================================================================
// Prediction Records
// =============================================================================

/// One raw classifier output: a star token plus the model's confidence.
///
/// Immutable once received. The JSON form matches the classifier wire
/// format: `{"label": "5 stars", "score": 0.92}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    /// Star rating for the chosen label.
    #[serde(rename = "label")]
    pub star: StarRating,
    /// Model confidence for that label.
    pub score: Confidence,
}

impl RawPrediction {
    /// Create a prediction from already-validated parts.
    #[must_use]
    pub fn new(star: StarRating, score: Confidence) -> Self {
        Self { star, score }
    }

    /// Parse a prediction from the raw classifier output.
    ///
    /// Fails with [`Error::UnknownLabel`] for a token outside the five
    /// star tokens and [`Error::InvalidConfidence`] for a score outside
    /// [0, 1]; both indicate a contract violation by the collaborator.
    pub fn from_parts(raw_label: &str, score: f64) -> Result<Self> {
        Ok(Self {
            star: StarRating::parse_token(raw_label)?,
            score: Confidence::try_from(score)?,
        })
    }
}

/// A prediction mapped into the evaluation taxonomy, paired with its
/// source text.
///
/// Derived deterministically from a [`RawPrediction`]; the confidence
/// is rounded to 4 decimal places at construction. Records keep the
/// input order, which is what the positional alignment against the
/// gold file relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// The classified phrase.
    pub text: String,
    /// Canonical sentiment label.
    pub label: Sentiment,
    /// Confidence, rounded to 4 decimal places.
    pub confidence: f64,
}

impl CanonicalRecord {
    /// Map one prediction into canonical form.
    #[must_use]
    pub fn from_prediction(text: impl Into<String>, prediction: &RawPrediction) -> Self {
        Self {
            text: text.into(),
            label: prediction.star.sentiment(),
            confidence: prediction.score.rounded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_bounds() {
        assert!(Confidence::new(0.0).is_some());
        assert!(Confidence::new(1.0).is_some());
        assert!(Confidence::new(-0.01).is_none());
        assert!(Confidence::new(1.01).is_none());
        assert!(Confidence::new(f64::NAN).is_none());
    }

    #[test]
    fn confidence_saturating_clamps() {
        assert_eq!(Confidence::saturating(1.5).get(), 1.0);
        assert_eq!(Confidence::saturating(-3.0).get(), 0.0);
        assert_eq!(Confidence::saturating(f64::NAN).get(), 0.0);
        assert_eq!(Confidence::saturating(0.4).get(), 0.4);
    }

    #[test]
    fn confidence_rounds_to_four_decimals() {
        let c = Confidence::new(0.918_273_645).unwrap();
        assert_eq!(c.rounded(), 0.9183);
    }

    #[test]
    fn prediction_from_parts_validates_both_fields() {
        let pred = RawPrediction::from_parts("4 stars", 0.75).unwrap();
        assert_eq!(pred.star, StarRating::Four);
        assert_eq!(pred.score.get(), 0.75);

        assert!(matches!(
            RawPrediction::from_parts("six stars", 0.5),
            Err(Error::UnknownLabel(_))
        ));
        assert!(matches!(
            RawPrediction::from_parts("4 stars", 1.5),
            Err(Error::InvalidConfidence(_))
        ));
    }

    #[test]
    fn prediction_wire_format() {
        let pred: RawPrediction =
            serde_json::from_str(r#"{"label": "5 stars", "score": 0.92}"#).unwrap();
        assert_eq!(pred.star, StarRating::Five);
        assert_eq!(pred.score.get(), 0.92);

        // Out-of-range score is rejected at the serde boundary too.
        let bad: std::result::Result<RawPrediction, _> =
            serde_json::from_str(r#"{"label": "5 stars", "score": 1.2}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn canonical_record_maps_and_rounds() {
        let pred = RawPrediction::from_parts("1 star", 0.881_234_9).unwrap();
        let record = CanonicalRecord::from_prediction("terrible phone", &pred);
        assert_eq!(record.text, "terrible phone");
        assert_eq!(record.label, Sentiment::Negative);
        assert_eq!(record.confidence, 0.8812);
    }
}
