//! Multinomial Naive Bayes sentiment model.
//!
//! Trained from labelled texts, persisted as a JSON artifact, and restored
//! for classification. Word likelihoods use Laplace (add-one) smoothing over
//! the training vocabulary; words never seen in training are ignored.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use yelpsent_core::Sentiment;

use crate::ModelError;
use crate::classifier::{
    Analysis, SentenceScore, SentimentClassifier, WordScore, split_sentences, tokenize,
};

/// Metadata stored alongside the model parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    /// RFC 3339 timestamp string.
    pub trained_at: String,
    pub positive_docs: u64,
    pub negative_docs: u64,
    pub vocabulary: usize,
}

/// Per-class counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ClassCounts {
    positive: u64,
    negative: u64,
}

impl ClassCounts {
    fn add(&mut self, sentiment: Sentiment, n: u64) {
        match sentiment {
            Sentiment::Positive => self.positive += n,
            Sentiment::Negative => self.negative += n,
        }
    }
}

/// Trained two-class Naive Bayes model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentModel {
    pub meta: ModelMeta,
    docs: ClassCounts,
    tokens: ClassCounts,
    words: HashMap<String, ClassCounts>,
}

impl SentimentModel {
    /// Train on `(text, label)` examples.
    ///
    /// Both classes need at least one example.
    pub fn train<'a, I>(examples: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (&'a str, Sentiment)>,
    {
        let mut docs = ClassCounts::default();
        let mut tokens = ClassCounts::default();
        let mut words: HashMap<String, ClassCounts> = HashMap::new();

        for (text, label) in examples {
            docs.add(label, 1);
            for word in tokenize(text) {
                tokens.add(label, 1);
                words.entry(word).or_default().add(label, 1);
            }
        }

        if docs.positive == 0 {
            return Err(ModelError::EmptyTrainingSet(Sentiment::Positive));
        }
        if docs.negative == 0 {
            return Err(ModelError::EmptyTrainingSet(Sentiment::Negative));
        }

        let meta = ModelMeta {
            trained_at: chrono::Utc::now().to_rfc3339(),
            positive_docs: docs.positive,
            negative_docs: docs.negative,
            vocabulary: words.len(),
        };
        info!(
            positive = docs.positive,
            negative = docs.negative,
            vocabulary = meta.vocabulary,
            "trained sentiment model"
        );

        Ok(Self {
            meta,
            docs,
            tokens,
            words,
        })
    }

    /// Restore a model previously written with [`persist`](Self::persist).
    pub fn restore(path: &Path) -> Result<Self, ModelError> {
        let data = std::fs::read(path).map_err(|source| ModelError::Restore {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&data).map_err(|source| ModelError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            vocabulary = model.meta.vocabulary,
            trained_at = %model.meta.trained_at,
            "restored sentiment model"
        );
        Ok(model)
    }

    /// Write the model as JSON to `path`, replacing any existing file.
    pub fn persist(&self, path: &Path) -> Result<(), ModelError> {
        let data = serde_json::to_vec(self)?;
        std::fs::write(path, data).map_err(|source| ModelError::Persist {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "persisted sentiment model");
        Ok(())
    }

    /// Vocabulary size.
    pub fn vocabulary(&self) -> usize {
        self.words.len()
    }

    /// Log-posterior (unnormalised) of each class for the given tokens.
    fn log_scores<S: AsRef<str>>(&self, tokens: &[S]) -> (f64, f64) {
        let total_docs = (self.docs.positive + self.docs.negative) as f64;
        let vocab = self.words.len() as f64;
        let pos_denom = self.tokens.positive as f64 + vocab;
        let neg_denom = self.tokens.negative as f64 + vocab;

        let mut pos = (self.docs.positive as f64 / total_docs).ln();
        let mut neg = (self.docs.negative as f64 / total_docs).ln();

        for token in tokens {
            if let Some(counts) = self.words.get(token.as_ref()) {
                pos += ((counts.positive as f64 + 1.0) / pos_denom).ln();
                neg += ((counts.negative as f64 + 1.0) / neg_denom).ln();
            }
        }

        (pos, neg)
    }

    fn label<S: AsRef<str>>(&self, tokens: &[S]) -> Sentiment {
        let (pos, neg) = self.log_scores(tokens);
        if pos > neg {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

impl SentimentClassifier for SentimentModel {
    fn analyze(&self, text: &str) -> Analysis {
        let sentences = split_sentences(text)
            .into_iter()
            .map(|sentence| SentenceScore {
                sentence: sentence.to_string(),
                sentiment: self.label(&tokenize(sentence)),
            })
            .collect();

        let mut seen = HashSet::new();
        let words = tokenize(text)
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .map(|word| {
                let sentiment = self.label(std::slice::from_ref(&word));
                WordScore { word, sentiment }
            })
            .collect();

        Analysis {
            sentiment: self.classify(text),
            sentences,
            words,
        }
    }

    fn classify(&self, text: &str) -> Sentiment {
        self.label(&tokenize(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_set() -> Vec<(&'static str, Sentiment)> {
        vec![
            ("Great food and friendly staff. I love this place!", Sentiment::Positive),
            ("Amazing tacos, great value, love it.", Sentiment::Positive),
            ("Friendly service and delicious coffee.", Sentiment::Positive),
            ("Terrible service. The food was cold and awful.", Sentiment::Negative),
            ("Rude staff, awful wait, never again.", Sentiment::Negative),
            ("Cold fries and terrible burgers.", Sentiment::Negative),
        ]
    }

    fn trained() -> SentimentModel {
        SentimentModel::train(training_set()).unwrap()
    }

    #[test]
    fn train_records_counts() {
        let model = trained();
        assert_eq!(model.meta.positive_docs, 3);
        assert_eq!(model.meta.negative_docs, 3);
        assert_eq!(model.meta.vocabulary, model.vocabulary());
        assert!(model.vocabulary() > 10);
        assert!(!model.meta.trained_at.is_empty());
    }

    #[test]
    fn train_requires_both_classes() {
        let err = SentimentModel::train(vec![("good", Sentiment::Positive)]).unwrap_err();
        assert!(matches!(err, ModelError::EmptyTrainingSet(Sentiment::Negative)));

        let err = SentimentModel::train(Vec::new()).unwrap_err();
        assert!(matches!(err, ModelError::EmptyTrainingSet(Sentiment::Positive)));
    }

    #[test]
    fn classifies_clear_cases() {
        let model = trained();
        assert_eq!(model.classify("I love the great food"), Sentiment::Positive);
        assert_eq!(model.classify("awful and terrible, so cold"), Sentiment::Negative);
    }

    #[test]
    fn unknown_words_fall_back_to_prior() {
        let model = SentimentModel::train(vec![
            ("good", Sentiment::Positive),
            ("nice", Sentiment::Positive),
            ("bad", Sentiment::Negative),
        ])
        .unwrap();
        assert_eq!(model.classify("zzz qqq"), Sentiment::Positive);
        assert_eq!(model.classify(""), Sentiment::Positive);
    }

    #[test]
    fn analyze_reports_sentences_and_distinct_words() {
        let model = trained();
        let analysis = model.analyze("Great food! Terrible service. Great.");

        assert_eq!(analysis.sentences.len(), 3);
        assert_eq!(analysis.sentences[0].sentence, "Great food");
        assert_eq!(analysis.sentences[0].sentiment, Sentiment::Positive);
        assert_eq!(analysis.sentences[1].sentiment, Sentiment::Negative);

        let words: Vec<&str> = analysis.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["great", "food", "terrible", "service"]);
        assert_eq!(analysis.words[0].sentiment, Sentiment::Positive);
        assert_eq!(analysis.words[2].sentiment, Sentiment::Negative);
        assert_eq!(analysis.sentiment, model.classify("Great food! Terrible service. Great."));
    }

    #[test]
    fn persist_then_restore() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yelp_model.json");

        let model = trained();
        model.persist(&path).unwrap();
        let restored = SentimentModel::restore(&path).unwrap();

        assert_eq!(restored, model);
        assert_eq!(restored.classify("love it"), model.classify("love it"));
    }

    #[test]
    fn restore_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SentimentModel::restore(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ModelError::Restore { .. }));
    }

    #[test]
    fn restore_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{\"meta\": 1}").unwrap();
        let err = SentimentModel::restore(&path).unwrap_err();
        assert!(matches!(err, ModelError::Format { .. }));
    }
}
