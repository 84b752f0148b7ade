//! Indexing pipeline: tokenize, normalize, insert, report.

pub mod builder;
pub mod normalizer;
pub mod report;
pub mod tokenizer;

pub use builder::IndexBuilder;
pub use normalizer::Normalizer;
pub use report::IndexReport;
pub use tokenizer::Tokenizer;
