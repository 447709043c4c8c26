//! Yelp review records and the in-memory review set.

use std::collections::HashMap;
use std::collections::hash_map::{Iter, Values};

use serde::{Deserialize, Deserializer, Serialize};

/// Neutral star rating. Reviews rated exactly this have no polarity.
pub const NEUTRAL_STARS: f32 = 3.0;

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Ground-truth polarity of a star rating.
    ///
    /// Above 3 stars is positive, below is negative, exactly 3 has no polarity.
    pub fn from_stars(stars: f32) -> Option<Self> {
        if stars > NEUTRAL_STARS {
            Some(Self::Positive)
        } else if stars < NEUTRAL_STARS {
            Some(Self::Negative)
        } else {
            None
        }
    }

    /// Numeric score: 1 for positive, 0 for negative.
    pub fn score(&self) -> u8 {
        match self {
            Self::Positive => 1,
            Self::Negative => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// A single Yelp review, as found in the Yelp dataset `review.json`.
///
/// Missing and `null` fields decode to their zero value and unknown fields are
/// ignored. Vote counters are unsigned, so a negative count is a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// 22 character unique review id.
    #[serde(deserialize_with = "null_as_default")]
    pub review_id: String,
    /// Author, maps to the user in `user.json`.
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    /// Reviewed business, maps to `business.json`.
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: f32,
    /// Formatted `YYYY-MM-DD`. Not validated.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub useful: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub funny: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub cool: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Review {
    /// Ground-truth polarity from the star rating. See [`Sentiment::from_stars`].
    pub fn polarity(&self) -> Option<Sentiment> {
        Sentiment::from_stars(self.stars)
    }

    /// Star rating truncated toward zero.
    pub fn star_bucket(&self) -> i64 {
        self.stars.trunc() as i64
    }
}

/// Reviews keyed by `review_id`.
///
/// Inserting an id that is already present replaces the earlier record.
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewSet {
    reviews: HashMap<String, Review>,
}

/// Summary statistics for a ReviewSet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Count per truncated star rating, sorted by rating.
    pub by_stars: Vec<(i64, usize)>,
}

impl ReviewSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a review under its id, returning the record it replaced.
    pub fn insert(&mut self, review: Review) -> Option<Review> {
        self.reviews.insert(review.review_id.clone(), review)
    }

    pub fn get(&self, review_id: &str) -> Option<&Review> {
        self.reviews.get(review_id)
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Iterate over `(review_id, review)` pairs.
    pub fn iter(&self) -> Iter<'_, String, Review> {
        self.reviews.iter()
    }

    pub fn values(&self) -> Values<'_, String, Review> {
        self.reviews.values()
    }

    /// Summary statistics.
    pub fn summary(&self) -> ReviewSummary {
        let mut summary = ReviewSummary {
            total: self.reviews.len(),
            ..Default::default()
        };

        let mut by_stars: HashMap<i64, usize> = HashMap::new();
        for review in self.reviews.values() {
            match review.polarity() {
                Some(Sentiment::Positive) => summary.positive += 1,
                Some(Sentiment::Negative) => summary.negative += 1,
                None => summary.neutral += 1,
            }
            *by_stars.entry(review.star_bucket()).or_insert(0) += 1;
        }

        summary.by_stars = by_stars.into_iter().collect();
        summary.by_stars.sort_unstable_by_key(|&(stars, _)| stars);
        summary
    }
}

impl FromIterator<Review> for ReviewSet {
    fn from_iter<I: IntoIterator<Item = Review>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Review> for ReviewSet {
    fn extend<I: IntoIterator<Item = Review>>(&mut self, iter: I) {
        for review in iter {
            self.insert(review);
        }
    }
}

impl<'a> IntoIterator for &'a ReviewSet {
    type Item = (&'a String, &'a Review);
    type IntoIter = Iter<'a, String, Review>;

    fn into_iter(self) -> Self::IntoIter {
        self.reviews.iter()
    }
}
