//! Sentiment inference: a trainable Naive Bayes text classifier and its
//! evaluation against star-rating ground truth.

mod error;
pub use error::ModelError;

pub mod classifier;
pub mod evaluate;
pub mod model;

pub use classifier::{Analysis, SentenceScore, SentimentClassifier, WordScore};
pub use evaluate::{ScoreCounts, Tally, evaluate, evaluate_with, score_texts};
pub use model::{ModelMeta, SentimentModel};
