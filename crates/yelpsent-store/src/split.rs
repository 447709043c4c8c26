//! Split a review set into one text file per review.
//!
//! Files are named `{prefix}-{counter:06}_{stars}.txt` so the star rating can
//! be recovered later with [`rating_from_file_name`].

use std::path::{Path, PathBuf};

use tracing::info;
use yelpsent_core::{Review, ReviewSet};

use crate::StoreError;

/// One written split file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Write each review's raw text to its own file in `out_dir`.
///
/// The counter follows the set's iteration order, which is unspecified.
pub fn split_reviews(
    reviews: &ReviewSet,
    out_dir: &Path,
    prefix: &str,
) -> Result<Vec<SplitFile>, StoreError> {
    std::fs::create_dir_all(out_dir).map_err(|source| StoreError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(reviews.len());
    for (counter, review) in reviews.values().enumerate() {
        let path = out_dir.join(split_file_name(prefix, counter, review));
        std::fs::write(&path, review.text.as_bytes()).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(SplitFile {
            path,
            bytes: review.text.len(),
        });
    }

    info!(dir = %out_dir.display(), count = written.len(), "split reviews");
    Ok(written)
}

fn split_file_name(prefix: &str, counter: usize, review: &Review) -> String {
    format!("{prefix}-{counter:06}_{}.txt", review.star_bucket())
}

/// Recover the star rating from a split file name, e.g. `yelp-000042_5.txt` → 5.
pub fn rating_from_file_name(name: &str) -> Option<i64> {
    let stem = name.strip_suffix(".txt")?;
    let (_, rating) = stem.rsplit_once('_')?;
    rating.parse().ok()
}
