//! Review loader: reads a whole review file, gunzips it when the name ends in
//! `.gz`, and decodes the concatenated JSON objects into a [`ReviewSet`].
//!
//! Loading is all-or-nothing. A malformed object anywhere in the stream fails
//! the whole load; no partial set is returned. Besides syntax errors this
//! includes a field of the wrong type, a negative vote counter, and a key
//! repeated within one object. `null` fields decode to their zero value.

use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::{debug, info};
use yelpsent_core::{Review, ReviewSet};

use crate::StoreError;

/// Load every review in `path` into memory, keyed by `review_id`.
pub fn load(path: &Path) -> Result<ReviewSet, StoreError> {
    let data = read_data(path)?;
    let reviews = decode_reviews(&data)?;
    info!(path = %path.display(), count = reviews.len(), "loaded reviews");
    Ok(reviews)
}

/// Read the full content of `path`, decompressing it if it is gzipped.
pub fn read_data(path: &Path) -> Result<Vec<u8>, StoreError> {
    debug!(path = %path.display(), "reading data file");
    let data = std::fs::read(path).map_err(|source| StoreError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if !is_gzip(path) {
        return Ok(data);
    }

    // Whole-file decompression: both buffers are alive until we return.
    let mut decoded = Vec::new();
    MultiGzDecoder::new(data.as_slice())
        .read_to_end(&mut decoded)
        .map_err(|source| StoreError::Decompress {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        compressed = data.len(),
        decompressed = decoded.len(),
        "decompression complete"
    );
    Ok(decoded)
}

/// Decode a stream of concatenated JSON review objects.
///
/// Objects may be separated by any JSON whitespace. Empty input yields an
/// empty set. A later object with an already-seen id replaces the earlier one.
pub fn decode_reviews(data: &[u8]) -> Result<ReviewSet, StoreError> {
    let stream = serde_json::Deserializer::from_slice(data).into_iter::<Review>();
    let mut reviews = ReviewSet::new();

    for (index, item) in stream.enumerate() {
        let review = item.map_err(|source| StoreError::Decode {
            record: index + 1,
            source,
        })?;
        if let Some(previous) = reviews.insert(review) {
            debug!(review_id = %previous.review_id, "duplicate review id, keeping later record");
        }
    }

    Ok(reviews)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    const TWO_REVIEWS: &str = concat!(
        r#"{"review_id":"r1","user_id":"u1","business_id":"b1","stars":5.0,"date":"2016-05-28","text":"Great tacos.","useful":1,"funny":0,"cool":2}"#,
        "\n",
        r#"{"review_id":"r2","user_id":"u2","business_id":"b1","stars":1.0,"date":"2017-01-03","text":"Cold and late.","useful":0,"funny":1,"cool":0}"#,
        "\n",
    );

    fn write_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn gzip(content: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn load_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "reviews.json", TWO_REVIEWS.as_bytes());

        let reviews = load(&path).unwrap();
        assert_eq!(reviews.len(), 2);
        let r1 = reviews.get("r1").unwrap();
        assert_eq!(r1.stars, 5.0);
        assert_eq!(r1.text, "Great tacos.");
        assert_eq!(r1.cool, 2);
        assert_eq!(reviews.get("r2").unwrap().funny, 1);
    }

    #[test]
    fn gzip_matches_plain() {
        let dir = tempfile::tempdir().unwrap();
        let plain = write_file(dir.path(), "reviews.json", TWO_REVIEWS.as_bytes());
        let compressed = write_file(dir.path(), "reviews.json.gz", &gzip(TWO_REVIEWS.as_bytes()));

        assert_eq!(load(&compressed).unwrap(), load(&plain).unwrap());
    }

    #[test]
    fn empty_file_is_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "empty.json", b"");
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn whitespace_only_is_empty_set() {
        assert!(decode_reviews(b"\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn duplicates_collapse_to_last() {
        let data = concat!(
            r#"{"review_id":"a","stars":1,"text":"first"}"#,
            r#"{"review_id":"b","stars":4,"text":"other"}"#,
            "\n",
            r#"{"review_id":"a","stars":5,"text":"second"}"#,
        );
        let reviews = decode_reviews(data.as_bytes()).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews.get("a").unwrap().text, "second");
        assert_eq!(reviews.get("a").unwrap().stars, 5.0);
    }

    #[test]
    fn broken_second_object_fails() {
        let data = concat!(
            r#"{"review_id":"a","stars":1,"text":"fine"}"#,
            "\n",
            r#"{"review_id":"b","stars":"#,
        );
        let err = decode_reviews(data.as_bytes()).unwrap_err();
        match err {
            StoreError::Decode { record, .. } => assert_eq!(record, 2),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_field_type_fails() {
        let err = decode_reviews(br#"{"review_id":"a","stars":"five"}"#).unwrap_err();
        assert!(matches!(err, StoreError::Decode { record: 1, .. }));
    }

    #[test]
    fn null_text_decodes_empty() {
        let reviews = decode_reviews(br#"{"review_id":"a","stars":4,"text":null}"#).unwrap();
        let review = reviews.get("a").unwrap();
        assert!(review.text.is_empty());
        assert_eq!(review.stars, 4.0);
    }

    #[test]
    fn negative_vote_count_fails() {
        let data = concat!(
            r#"{"review_id":"a","stars":4,"useful":2}"#,
            "\n",
            r#"{"review_id":"b","stars":4,"useful":-1}"#,
        );
        let err = decode_reviews(data.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::Decode { record: 2, .. }));
    }

    #[test]
    fn repeated_key_in_object_fails() {
        let err = decode_reviews(br#"{"review_id":"a","text":"x","text":"y"}"#).unwrap_err();
        assert!(matches!(err, StoreError::Decode { record: 1, .. }));
    }

    #[test]
    fn concatenated_gzip_members_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let (first, second) = TWO_REVIEWS.split_at(TWO_REVIEWS.find('\n').unwrap() + 1);
        let mut data = gzip(first.as_bytes());
        data.extend(gzip(second.as_bytes()));
        let path = write_file(dir.path(), "reviews.json.gz", &data);

        assert_eq!(load(&path).unwrap().len(), 2);
    }

    #[test]
    fn json_array_is_rejected() {
        let err = decode_reviews(br#"[{"review_id":"a"}]"#).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[test]
    fn text_preserved_byte_for_byte() {
        let text = "Crème brûlée 🍮 was \"perfect\".\nSecond line\ttabbed.\r\n日本語";
        let review = Review {
            review_id: "u1".into(),
            stars: 4.0,
            text: text.into(),
            ..Default::default()
        };
        let encoded = serde_json::to_vec(&review).unwrap();

        let reviews = decode_reviews(&encoded).unwrap();
        assert_eq!(reviews.get("u1").unwrap().text.as_bytes(), text.as_bytes());
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StoreError::Open { .. }));
    }

    #[test]
    fn corrupt_gzip_is_decompress_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "reviews.json.gz", b"definitely not gzip");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Decompress { .. }));
    }

    #[test]
    fn gz_suffix_detection() {
        assert!(is_gzip(Path::new("data/review.json.gz")));
        assert!(!is_gzip(Path::new("data/review.json")));
        assert!(!is_gzip(Path::new("data/review.gzip")));
    }
}
