//! Deduplicated, insertion-ordered list of line numbers for one word.

use serde::{Deserialize, Serialize};

use super::error::{IndexError, IndexResult};

/// A 1-based line number within the indexed document.
pub type LineNumber = u32;

/// Line numbers on which a word occurs, in the order they were first seen.
///
/// A line number appears at most once. Appending never reorders existing
/// elements, so the list is sorted only when the document was scanned in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceList {
    lines: Vec<LineNumber>,
}

impl OccurrenceList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a list holding a single occurrence.
    pub fn with_first(line: LineNumber) -> Self {
        Self { lines: vec![line] }
    }

    /// Append `line` unless it is already present. Returns whether it was added.
    pub fn append(&mut self, line: LineNumber) -> bool {
        if self.contains(line) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Positional access. Fails when `index` is not in `[0, len)`.
    pub fn get(&self, index: usize) -> IndexResult<LineNumber> {
        self.lines
            .get(index)
            .copied()
            .ok_or(IndexError::OccurrenceOutOfRange {
                index,
                len: self.lines.len(),
            })
    }

    /// Linear containment check.
    pub fn contains(&self, line: LineNumber) -> bool {
        self.lines.contains(&line)
    }

    /// Number of distinct occurrences.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the list has no occurrences.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line numbers as a slice.
    pub fn as_slice(&self) -> &[LineNumber] {
        &self.lines
    }

    /// Iterate line numbers in first-seen order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, LineNumber>> {
        self.lines.iter().copied()
    }
}

impl<'a> IntoIterator for &'a OccurrenceList {
    type Item = LineNumber;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, LineNumber>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_skips_duplicates_and_keeps_order() {
        let mut list = OccurrenceList::new();
        assert!(list.append(5));
        assert!(list.append(2));
        assert!(!list.append(5));
        assert!(list.append(9));
        assert_eq!(list.as_slice(), &[5, 2, 9]);
    }

    #[test]
    fn get_reports_out_of_range() {
        let list = OccurrenceList::with_first(7);
        assert_eq!(list.get(0).unwrap(), 7);
        match list.get(1) {
            Err(IndexError::OccurrenceOutOfRange { index, len }) => {
                assert_eq!(index, 1);
                assert_eq!(len, 1);
            }
            other => panic!("expected out-of-range error, got {:?}", other),
        }
    }
}
