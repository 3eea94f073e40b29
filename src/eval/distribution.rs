//! Prediction distribution statistics.
//!
//! Tabulates the batch by star value and by sentiment category, plus
//! the mean and median star rating. The category breakdown always
//! covers the full three-element domain (zero-filled); the star
//! breakdown is sparse — a star value that never occurs is simply
//! absent.

use crate::eval;
use crate::label::Sentiment;
use crate::types::RawPrediction;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distribution of one prediction batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Count per star value (1-5). Sparse: only stars that occur.
    pub by_star: BTreeMap<u8, usize>,
    /// Count per sentiment category. Always all three categories.
    pub by_category: BTreeMap<Sentiment, usize>,
    /// Arithmetic mean of the star values.
    pub mean_star: f64,
    /// Median of the star values (average of the middle pair for
    /// even-length batches).
    pub median_star: f64,
    /// Batch size.
    pub total: usize,
}

impl Distribution {
    /// Share of the batch with this star value, in percent.
    #[must_use]
    pub fn star_percentage(&self, star: u8) -> f64 {
        let count = self.by_star.get(&star).copied().unwrap_or(0);
        count as f64 / self.total as f64 * 100.0
    }

    /// Share of the batch in this category, in percent.
    #[must_use]
    pub fn category_percentage(&self, category: Sentiment) -> f64 {
        let count = self.by_category.get(&category).copied().unwrap_or(0);
        count as f64 / self.total as f64 * 100.0
    }
}

/// Aggregate a prediction batch into a [`Distribution`].
///
/// # Errors
///
/// [`Error::EmptyBatch`] for zero predictions; mean and median are
/// meaningless there and are not silently defaulted.
pub fn aggregate(predictions: &[RawPrediction]) -> Result<Distribution> {
    if predictions.is_empty() {
        return Err(Error::EmptyBatch("distribution aggregation"));
    }

    let mut by_star = BTreeMap::new();
    let mut by_category: BTreeMap<Sentiment, usize> =
        Sentiment::ALL.into_iter().map(|c| (c, 0)).collect();

    for prediction in predictions {
        *by_star.entry(prediction.star.as_u8()).or_insert(0) += 1;
        *by_category.entry(prediction.star.sentiment()).or_insert(0) += 1;
    }

    let stars: Vec<f64> = predictions
        .iter()
        .map(|p| f64::from(p.star.as_u8()))
        .collect();
    // Non-empty by the guard above.
    let mean_star = eval::mean(&stars).unwrap_or(0.0);
    let median_star = eval::median(&stars).unwrap_or(0.0);

    Ok(Distribution {
        by_star,
        by_category,
        mean_star,
        median_star,
        total: predictions.len(),
    })
}

/// Star values of the batch as plain numbers, in batch order.
///
/// Handed to the external plotting collaborator.
#[must_use]
pub fn star_values(predictions: &[RawPrediction]) -> Vec<u8> {
    predictions.iter().map(|p| p.star.as_u8()).collect()
}

/// Category label per prediction, in batch order.
///
/// Handed to the external plotting collaborator.
#[must_use]
pub fn category_labels(predictions: &[RawPrediction]) -> Vec<String> {
    predictions
        .iter()
        .map(|p| p.star.sentiment().as_label().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::StarRating;

    fn batch(tokens: &[&str]) -> Vec<RawPrediction> {
        tokens
            .iter()
            .map(|t| RawPrediction::from_parts(t, 0.9).unwrap())
            .collect()
    }

    #[test]
    fn counts_by_star_and_category() {
        let preds = batch(&["5 stars", "5 stars", "1 star", "3 stars"]);
        let dist = aggregate(&preds).unwrap();

        assert_eq!(dist.by_star.get(&5), Some(&2));
        assert_eq!(dist.by_star.get(&1), Some(&1));
        assert_eq!(dist.by_star.get(&3), Some(&1));
        assert_eq!(dist.by_star.get(&2), None); // sparse

        assert_eq!(dist.by_category[&Sentiment::Positive], 2);
        assert_eq!(dist.by_category[&Sentiment::Negative], 1);
        assert_eq!(dist.by_category[&Sentiment::Neutral], 1);
        assert_eq!(dist.total, 4);
    }

    #[test]
    fn category_domain_is_always_complete() {
        // No neutral predictions, but the bucket still exists.
        let dist = aggregate(&batch(&["5 stars", "1 star"])).unwrap();
        assert_eq!(dist.by_category.len(), 3);
        assert_eq!(dist.by_category[&Sentiment::Neutral], 0);
    }

    #[test]
    fn mean_and_median_star() {
        // End-to-end scenario from the harness contract: one 5-star and
        // one 1-star prediction average out to 3.0 both ways.
        let dist = aggregate(&batch(&["5 stars", "1 star"])).unwrap();
        assert_eq!(dist.mean_star, 3.0);
        assert_eq!(dist.median_star, 3.0);
    }

    #[test]
    fn median_of_odd_batch() {
        let dist = aggregate(&batch(&["1 star", "5 stars", "4 stars"])).unwrap();
        assert_eq!(dist.median_star, 4.0);
        assert!((dist.mean_star - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn percentages() {
        let dist = aggregate(&batch(&["5 stars", "5 stars", "1 star", "3 stars"])).unwrap();
        assert_eq!(dist.star_percentage(5), 50.0);
        assert_eq!(dist.star_percentage(2), 0.0);
        assert_eq!(dist.category_percentage(Sentiment::Positive), 50.0);
        assert_eq!(dist.category_percentage(Sentiment::Neutral), 25.0);
    }

    #[test]
    fn empty_batch_is_an_error() {
        assert!(matches!(aggregate(&[]), Err(Error::EmptyBatch(_))));
    }

    #[test]
    fn plot_arrays_keep_batch_order() {
        let preds = batch(&["5 stars", "1 star"]);
        assert_eq!(star_values(&preds), vec![5, 1]);
        assert_eq!(category_labels(&preds), vec!["positive", "negative"]);
    }

    #[test]
    fn counts_sum_to_total() {
        let preds = batch(&["1 star", "2 stars", "3 stars", "4 stars", "5 stars", "5 stars"]);
        let dist = aggregate(&preds).unwrap();
        assert_eq!(dist.by_star.values().sum::<usize>(), dist.total);
        assert_eq!(dist.by_category.values().sum::<usize>(), dist.total);
    }

    #[test]
    fn uses_star_rating_domain() {
        // All five star tokens land in their own bucket.
        let preds: Vec<RawPrediction> = StarRating::ALL
            .into_iter()
            .map(|s| RawPrediction::from_parts(s.token(), 0.5).unwrap())
            .collect();
        let dist = aggregate(&preds).unwrap();
        assert_eq!(dist.by_star.len(), 5);
        assert_eq!(dist.mean_star, 3.0);
        assert_eq!(dist.median_star, 3.0);
    }
}
