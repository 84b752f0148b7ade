//! Report writers: plain text (one entry per line) or JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::engine::IndexReport;
use crate::types::IndexResult;

/// Output encoding for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// `word: 1, 2, 3`, one entry per line.
    #[default]
    Text,
    /// Array of `{"word": ..., "lines": [...]}` objects.
    Json,
}

/// Write a report to a file, replacing any existing content.
pub fn write_report(path: &Path, report: &IndexReport, format: ReportFormat) -> IndexResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_report_to(&mut writer, report, format)?;
    writer.flush()?;
    log::debug!("wrote {} entries to {}", report.len(), path.display());
    Ok(())
}

/// Write a report to any writer.
pub fn write_report_to<W: Write>(
    writer: &mut W,
    report: &IndexReport,
    format: ReportFormat,
) -> IndexResult<()> {
    match format {
        ReportFormat::Text => {
            for entry in report.entries() {
                writeln!(writer, "{}", entry)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
