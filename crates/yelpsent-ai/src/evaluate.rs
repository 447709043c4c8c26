//! Evaluate a classifier against star-rating ground truth.
//!
//! Reviews above 3 stars are ground-truth positive, below 3 negative. 3-star
//! reviews are skipped and never reach the classifier.
//!
//! Counter naming: a positive review the classifier misses is counted as a
//! *false positive*, and a missed negative review as a *false negative*.

use tracing::debug;
use yelpsent_core::{Review, ReviewSet, Sentiment};

use crate::classifier::{Analysis, SentimentClassifier};

/// Confusion-style counters for one evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub true_positive: u64,
    pub true_negative: u64,
    pub false_positive: u64,
    pub false_negative: u64,
}

impl Tally {
    /// Record one eligible review.
    pub fn record(&mut self, truth: Sentiment, predicted: Sentiment) {
        match (truth, predicted) {
            (Sentiment::Positive, Sentiment::Positive) => self.true_positive += 1,
            (Sentiment::Positive, Sentiment::Negative) => self.false_positive += 1,
            (Sentiment::Negative, Sentiment::Negative) => self.true_negative += 1,
            (Sentiment::Negative, Sentiment::Positive) => self.false_negative += 1,
        }
    }

    /// Number of tallied (non-neutral) reviews.
    pub fn total(&self) -> u64 {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    /// `None` when nothing was tallied.
    pub fn false_positive_rate(&self) -> Option<f64> {
        self.rate(self.false_positive)
    }

    /// `None` when nothing was tallied.
    pub fn false_negative_rate(&self) -> Option<f64> {
        self.rate(self.false_negative)
    }

    /// Share of tallied reviews the classifier got right.
    pub fn accuracy(&self) -> Option<f64> {
        self.rate(self.true_positive + self.true_negative)
    }

    fn rate(&self, count: u64) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(count as f64 / total as f64),
        }
    }
}

/// Tally `classifier` over every eligible review.
pub fn evaluate<C>(reviews: &ReviewSet, classifier: &C) -> Tally
where
    C: SentimentClassifier + ?Sized,
{
    let mut tally = Tally::default();
    for review in reviews.values() {
        let Some(truth) = review.polarity() else {
            continue;
        };
        tally.record(truth, classifier.classify(&review.text));
    }
    debug!(total = tally.total(), "evaluation complete");
    tally
}

/// Like [`evaluate`], calling `observe` with each eligible review's key, the
/// review, and its full analysis.
pub fn evaluate_with<C, F>(reviews: &ReviewSet, classifier: &C, mut observe: F) -> Tally
where
    C: SentimentClassifier + ?Sized,
    F: FnMut(&str, &Review, &Analysis),
{
    let mut tally = Tally::default();
    for (key, review) in reviews {
        let Some(truth) = review.polarity() else {
            continue;
        };
        let analysis = classifier.analyze(&review.text);
        observe(key, review, &analysis);
        tally.record(truth, analysis.sentiment);
    }
    debug!(total = tally.total(), "evaluation complete");
    tally
}

/// Positive/negative counts from scoring unlabelled texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCounts {
    pub positive: u64,
    pub negative: u64,
}

impl ScoreCounts {
    pub fn total(&self) -> u64 {
        self.positive + self.negative
    }
}

/// Classify each `(name, text)` and count labels, calling `observe` with the
/// name and label of each.
pub fn score_texts<'a, C, I, F>(classifier: &C, texts: I, mut observe: F) -> ScoreCounts
where
    C: SentimentClassifier + ?Sized,
    I: IntoIterator<Item = (&'a str, &'a str)>,
    F: FnMut(&str, Sentiment),
{
    let mut counts = ScoreCounts::default();
    for (name, text) in texts {
        let sentiment = classifier.classify(text);
        observe(name, sentiment);
        match sentiment {
            Sentiment::Positive => counts.positive += 1,
            Sentiment::Negative => counts.negative += 1,
        }
    }
    counts
}
