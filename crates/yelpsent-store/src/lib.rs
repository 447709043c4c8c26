//! Storage layer: review file loading (plain or gzip JSON), split-file output,
//! and labelled training examples.

mod error;
pub use error::StoreError;

pub mod labelled;
pub mod loader;
pub mod split;
pub mod textdir;

pub use labelled::{SplitExamples, examples_from_reviews, examples_from_split_files};
pub use loader::{decode_reviews, load, read_data};
pub use split::{SplitFile, rating_from_file_name, split_reviews};
pub use textdir::{TextFile, read_text_dir};
