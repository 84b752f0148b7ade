//! Word index: a back-of-book style index built in memory.
//!
//! A document is scanned once; every normalized word is recorded with the
//! line numbers it appears on. A keyword list is then looked up to produce
//! the report.
//!
//! ```
//! use word_index::WordIndex;
//!
//! let mut index = WordIndex::new();
//! index.insert("casa", 1);
//! index.insert("casa", 3);
//! index.insert("carro", 2);
//!
//! let report = index.build_report(["carro", "aviao"]);
//! assert_eq!(report.len(), 1);
//! assert_eq!(report[0].to_string(), "carro: 2");
//! ```

pub mod config;
pub mod engine;
pub mod format;
pub mod index;
pub mod types;

pub use config::IndexConfig;
pub use engine::{IndexBuilder, IndexReport, Normalizer, Tokenizer};
pub use format::{read_keywords, read_lines, write_report, ReportFormat};
pub use index::{BucketStats, IndexStats, WordIndex, WordSearchTree};
pub use types::{IndexError, IndexResult, LineNumber, OccurrenceList, WordEntry};
