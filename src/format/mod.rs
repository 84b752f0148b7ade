//! Reading documents and keyword lists, writing reports.

pub mod reader;
pub mod writer;

pub use reader::{read_keywords, read_keywords_from, read_lines, read_lines_from};
pub use writer::{write_report, write_report_to, ReportFormat};
