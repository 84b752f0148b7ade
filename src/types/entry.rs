//! A word paired with the lines it occurs on.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::occurrence::{LineNumber, OccurrenceList};

/// One unique word and its occurrence list.
///
/// Equality and ordering consider only the word text, compared byte-wise
/// (which for UTF-8 is codepoint order). The word is stored as received;
/// normalization is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    word: String,
    lines: OccurrenceList,
}

impl WordEntry {
    /// Create an entry with a one-element occurrence list.
    pub fn new(word: impl Into<String>, first_line: LineNumber) -> Self {
        Self {
            word: word.into(),
            lines: OccurrenceList::with_first(first_line),
        }
    }

    /// The normalized word text.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Lines the word occurs on, first-seen order.
    pub fn occurrences(&self) -> &OccurrenceList {
        &self.lines
    }

    /// Record another occurrence. Repeating a line is a no-op.
    pub fn merge_occurrence(&mut self, line: LineNumber) -> bool {
        self.lines.append(line)
    }

    /// Ordinal comparison of the word text against a bare string.
    pub fn compare_word(&self, word: &str) -> Ordering {
        self.word.as_str().cmp(word)
    }
}

impl PartialEq for WordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordEntry {}

impl PartialOrd for WordEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

/// Renders as `word: 1, 3, 8`.
impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.word)?;
        for (i, line) in self.lines.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, line)?;
        }
        Ok(())
    }
}
