//! Line tokenizer for index building.

/// Splits a line of text into raw tokens on runs of ASCII whitespace
/// (space, tab, line feed, vertical tab, form feed, carriage return).
///
/// Other separators such as the no-break space stay inside tokens. Tokens
/// keep their punctuation and case; the [`super::Normalizer`] cleans them up
/// before they reach the index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a line into whitespace-separated pieces.
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        pieces(line).collect()
    }

    /// Number of raw tokens on a line.
    pub fn count(&self, line: &str) -> usize {
        pieces(line).count()
    }
}

fn pieces(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|piece| !piece.is_empty())
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{0B}'
}
