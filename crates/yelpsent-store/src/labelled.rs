//! Labelled training examples built from loaded reviews or split files.
//!
//! Only polar examples are produced. Neutral (3 star) reviews and files are
//! left out.

use yelpsent_core::{ReviewSet, Sentiment};

use crate::{TextFile, rating_from_file_name};

/// Examples taken from a directory of split files.
#[derive(Debug, Default, PartialEq)]
pub struct SplitExamples<'a> {
    pub examples: Vec<(&'a str, Sentiment)>,
    /// Files whose name carries no `_<rating>` suffix.
    pub unrated: usize,
}

/// Review texts labelled by star polarity.
pub fn examples_from_reviews(reviews: &ReviewSet) -> Vec<(&str, Sentiment)> {
    reviews
        .values()
        .filter_map(|r| r.polarity().map(|label| (r.text.as_str(), label)))
        .collect()
}

/// File contents labelled by the rating in each file name.
pub fn examples_from_split_files(files: &[TextFile]) -> SplitExamples<'_> {
    let mut out = SplitExamples::default();
    for file in files {
        let Some(rating) = rating_from_file_name(&file.name) else {
            out.unrated += 1;
            continue;
        };
        if let Some(label) = Sentiment::from_stars(rating as f32) {
            out.examples.push((file.content.as_str(), label));
        }
    }
    out
}
