pub mod config;
pub mod review;

pub use config::Config;
pub use review::{Review, ReviewSet, ReviewSummary, Sentiment};
