//! Line and keyword readers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::IndexResult;

/// Read every line of a text file, line terminators removed.
pub fn read_lines(path: &Path) -> IndexResult<Vec<String>> {
    let file = File::open(path)?;
    let lines = read_lines_from(BufReader::new(file))?;
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read every line from a buffered reader.
pub fn read_lines_from<R: BufRead>(reader: R) -> IndexResult<Vec<String>> {
    Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
}

/// Read a keyword list: one keyword per line, trimmed, blank lines skipped.
pub fn read_keywords(path: &Path) -> IndexResult<Vec<String>> {
    let file = File::open(path)?;
    let keywords = read_keywords_from(BufReader::new(file))?;
    log::debug!("read {} keywords from {}", keywords.len(), path.display());
    Ok(keywords)
}

/// Read a keyword list from a buffered reader; same rules as [`read_keywords`].
pub fn read_keywords_from<R: BufRead>(reader: R) -> IndexResult<Vec<String>> {
    let mut keywords = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let keyword = line.trim();
        if keyword.is_empty() {
            log::trace!("skipping blank keyword line {}", number + 1);
            continue;
        }
        keywords.push(keyword.to_string());
    }
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_trimmed_and_blank_lines_dropped() {
        let input = "  casa \n\n\t\ncarro\r\n avião\n";
        let keywords = read_keywords_from(input.as_bytes()).unwrap();
        assert_eq!(keywords, vec!["casa", "carro", "avião"]);
    }

    #[test]
    fn lines_keep_blank_entries() {
        let lines = read_lines_from("um\n\ntrês\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["um", "", "três"]);
    }
}
