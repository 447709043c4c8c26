use std::path::PathBuf;

use thiserror::Error;
use yelpsent_core::Sentiment;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("could not restore model from {path}: {source}")]
    Restore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not persist model to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model file {path} is not valid: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("no {} training examples", .0.as_str())]
    EmptyTrainingSet(Sentiment),
}
