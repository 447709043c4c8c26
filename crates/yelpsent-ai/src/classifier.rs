//! The classification capability consumed by evaluation and the CLI.

use yelpsent_core::Sentiment;

/// Sentiment of one sentence within an analysed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceScore {
    pub sentence: String,
    pub sentiment: Sentiment,
}

/// Sentiment of one word taken on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScore {
    pub word: String,
    pub sentiment: Sentiment,
}

/// Full analysis of a text: overall label plus per-sentence and per-word detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub sentiment: Sentiment,
    pub sentences: Vec<SentenceScore>,
    pub words: Vec<WordScore>,
}

impl Analysis {
    /// Analysis with an overall label and no detail.
    pub fn label_only(sentiment: Sentiment) -> Self {
        Self {
            sentiment,
            sentences: Vec::new(),
            words: Vec::new(),
        }
    }

    /// Numeric score of the overall label (1 positive, 0 negative).
    pub fn score(&self) -> u8 {
        self.sentiment.score()
    }
}

/// A binary text sentiment classifier.
pub trait SentimentClassifier {
    /// Classify `text` with per-sentence and per-word detail.
    fn analyze(&self, text: &str) -> Analysis;

    /// Classify `text`, overall label only.
    fn classify(&self, text: &str) -> Sentiment {
        self.analyze(text).sentiment
    }
}

impl<C: SentimentClassifier + ?Sized> SentimentClassifier for &C {
    fn analyze(&self, text: &str) -> Analysis {
        (**self).analyze(text)
    }

    fn classify(&self, text: &str) -> Sentiment {
        (**self).classify(text)
    }
}

/// Split text into sentences on `.`, `!`, `?` and line breaks.
///
/// Sentences are trimmed and empty ones dropped.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?', '\n', '\r'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lowercased word tokens. Apostrophes are kept inside words ("don't").
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_split_on_terminators_and_newlines() {
        let text = "Great food! Slow service.\nWould I return? Maybe";
        assert_eq!(
            split_sentences(text),
            vec!["Great food", "Slow service", "Would I return", "Maybe"]
        );
    }

    #[test]
    fn sentences_of_blank_text() {
        assert!(split_sentences("  ...\n\n").is_empty());
    }

    #[test]
    fn tokenize_lowercases_and_keeps_contractions() {
        assert_eq!(
            tokenize("Don't GO there -- 'seriously', 10/10 Crème"),
            vec!["don't", "go", "there", "seriously", "10", "10", "crème"]
        );
    }

    struct Always(Sentiment);

    impl SentimentClassifier for Always {
        fn analyze(&self, _text: &str) -> Analysis {
            Analysis::label_only(self.0)
        }
    }

    #[test]
    fn default_classify_uses_analyze() {
        let clf = Always(Sentiment::Negative);
        assert_eq!(clf.classify("anything"), Sentiment::Negative);
        assert_eq!((&clf).analyze("x").score(), 0);
    }
}
