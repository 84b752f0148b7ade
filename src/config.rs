//! Runtime configuration for index builds, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{IndexError, IndexResult, DEFAULT_BUCKET_COUNT};

/// Settings for one indexing run.
///
/// ```toml
/// bucket_count = 26
/// fold_accents = true
/// sort_report = true
/// dedup_keywords = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Number of buckets in the word index.
    pub bucket_count: usize,
    /// Strip diacritics from words and keywords.
    pub fold_accents: bool,
    /// Sort report entries alphabetically by word.
    pub sort_report: bool,
    /// Drop repeated keywords from the report, keeping the first.
    pub dedup_keywords: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            fold_accents: false,
            sort_report: true,
            dedup_keywords: false,
        }
    }
}

impl IndexConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> IndexResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> IndexResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Reject settings the index cannot use.
    pub fn validate(&self) -> IndexResult<()> {
        if self.bucket_count == 0 {
            return Err(IndexError::Config(
                "bucket_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
