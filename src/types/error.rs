//! Error types for the word index.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Occurrence index {index} out of range (list has {len} entries)")]
    OccurrenceOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for IndexError {
    fn from(err: toml::de::Error) -> Self {
        IndexError::Config(err.to_string())
    }
}

pub type IndexResult<T> = Result<T, IndexError>;
