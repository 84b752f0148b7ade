//! Core data types: occurrence lists, word entries, and the crate error.

pub mod entry;
pub mod error;
pub mod occurrence;

pub use entry::WordEntry;
pub use error::{IndexError, IndexResult};
pub use occurrence::{LineNumber, OccurrenceList};

/// Default number of buckets in a [`crate::WordIndex`], one per Latin letter.
pub const DEFAULT_BUCKET_COUNT: usize = 26;
