//! The finished index report: one entry per matched keyword.

use std::fmt;

use serde::Serialize;

use crate::types::WordEntry;

/// Entries produced for a keyword list, ready to be written out.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct IndexReport {
    entries: Vec<WordEntry>,
}

impl IndexReport {
    /// Wrap entries in the order given.
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Entries in report order.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keyword matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort entries alphabetically by word. Stable, so repeats stay together.
    pub fn sort(&mut self) {
        self.entries.sort();
    }

    /// Each entry rendered as `word: 1, 2, 3`.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// One rendered entry per line, no trailing newline.
impl fmt::Display for IndexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
