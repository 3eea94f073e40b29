//! The star-rating and sentiment label taxonomy.
//!
//! The classifier emits one of five fixed star tokens (`"1 star"` ..
//! `"5 stars"`); the evaluation taxonomy collapses them into three
//! sentiment categories:
//!
//! | Stars | Sentiment |
//! |-------|-----------|
//! | 1, 2  | negative  |
//! | 3     | neutral   |
//! | 4, 5  | positive  |
//!
//! Both domains are closed enums so invalid values are rejected at the
//! parsing boundary instead of checked ad hoc downstream. Parsing a
//! token outside the star domain is [`Error::UnknownLabel`]; gold-file
//! lines outside the sentiment domain are reported by the gold
//! validator as `InvalidLabelFormat`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Star Ratings
// =============================================================================

/// A raw 1-5 star rating emitted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StarRating {
    /// `"1 star"`
    #[serde(rename = "1 star")]
    One,
    /// `"2 stars"`
    #[serde(rename = "2 stars")]
    Two,
    /// `"3 stars"`
    #[serde(rename = "3 stars")]
    Three,
    /// `"4 stars"`
    #[serde(rename = "4 stars")]
    Four,
    /// `"5 stars"`
    #[serde(rename = "5 stars")]
    Five,
}

impl StarRating {
    /// All five ratings, in ascending order.
    pub const ALL: [StarRating; 5] = [
        StarRating::One,
        StarRating::Two,
        StarRating::Three,
        StarRating::Four,
        StarRating::Five,
    ];

    /// The star count as an integer in 1..=5.
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            StarRating::One => 1,
            StarRating::Two => 2,
            StarRating::Three => 3,
            StarRating::Four => 4,
            StarRating::Five => 5,
        }
    }

    /// The wire token the classifier uses for this rating.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            StarRating::One => "1 star",
            StarRating::Two => "2 stars",
            StarRating::Three => "3 stars",
            StarRating::Four => "4 stars",
            StarRating::Five => "5 stars",
        }
    }

    /// Parse one of the five star tokens.
    ///
    /// The token must match exactly; anything else is a contract
    /// violation by the classifier collaborator and fails with
    /// [`Error::UnknownLabel`]. There is no silent default.
    pub fn parse_token(raw: &str) -> Result<Self> {
        match raw {
            "1 star" => Ok(StarRating::One),
            "2 stars" => Ok(StarRating::Two),
            "3 stars" => Ok(StarRating::Three),
            "4 stars" => Ok(StarRating::Four),
            "5 stars" => Ok(StarRating::Five),
            other => Err(Error::unknown_label(other)),
        }
    }

    /// Map this rating into the three-class sentiment taxonomy.
    ///
    /// The mapping is total and fixed: {1,2} → negative, {3} → neutral,
    /// {4,5} → positive.
    #[must_use]
    pub fn sentiment(self) -> Sentiment {
        match self {
            StarRating::One | StarRating::Two => Sentiment::Negative,
            StarRating::Three => Sentiment::Neutral,
            StarRating::Four | StarRating::Five => Sentiment::Positive,
        }
    }
}

impl FromStr for StarRating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StarRating::parse_token(s)
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

// =============================================================================
// Sentiment Categories
// =============================================================================

/// A canonical sentiment label, the evaluation taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// 1-2 stars.
    Negative,
    /// 3 stars.
    Neutral,
    /// 4-5 stars.
    Positive,
}

impl Sentiment {
    /// All three categories. This is the fixed category domain: every
    /// per-category breakdown covers exactly these, in this order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// Lowercase label string, as written in gold-label files.
    #[must_use]
    pub fn as_label(self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }

    /// Parse a canonical label, case-insensitive.
    ///
    /// Returns `None` for anything outside the three-token domain; the
    /// gold validator turns that into `InvalidLabelFormat` with the
    /// offending line attached.
    #[must_use]
    pub fn parse_label(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            "positive" => Some(Sentiment::Positive),
            _ => None,
        }
    }
}

impl From<StarRating> for Sentiment {
    fn from(star: StarRating) -> Self {
        star.sentiment()
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}
