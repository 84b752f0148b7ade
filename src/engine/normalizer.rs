//! Word normalization shared by document tokens and keywords.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Cleans a raw token into the form stored in the index.
///
/// 1. Trim and lowercase
/// 2. Strip trailing, then leading, characters that are not letters or
///    decimal digits
/// 3. Optionally fold accents (NFD, then drop combining marks)
///
/// Inner punctuation survives: `"bem-vindo,"` becomes `"bem-vindo"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    fold_accents: bool,
}

impl Normalizer {
    /// Normalizer that keeps diacritics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer that also removes diacritics ("avião" → "aviao").
    pub fn with_accent_folding(fold_accents: bool) -> Self {
        Self { fold_accents }
    }

    /// Whether diacritics are removed.
    pub fn folds_accents(&self) -> bool {
        self.fold_accents
    }

    /// Normalize a token. Returns an empty string when nothing is left.
    pub fn normalize(&self, token: &str) -> String {
        let lowered = token.trim().to_lowercase();
        let cleaned = lowered.trim_matches(|c: char| !is_letter_or_digit(c));

        if self.fold_accents {
            cleaned.nfd().filter(|c| !is_combining_mark(*c)).collect()
        } else {
            cleaned.to_string()
        }
    }
}

/// Letters and decimal digits. Superscripts, fractions and other numeric
/// symbols do not count.
fn is_letter_or_digit(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_edge_punctuation_only() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("\"Casa,"), "casa");
        assert_eq!(n.normalize("(bem-vindo)."), "bem-vindo");
        assert_eq!(n.normalize("d'água"), "d'água");
        assert_eq!(n.normalize("..."), "");
        assert_eq!(n.normalize(""), "");
    }

    #[test]
    fn numeric_symbols_are_not_digits() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("10²"), "10");
        assert_eq!(n.normalize("½"), "");
        assert_eq!(n.normalize("(1984)"), "1984");
    }

    #[test]
    fn folds_accents_when_enabled() {
        assert_eq!(Normalizer::new().normalize("Avião"), "avião");
        assert_eq!(Normalizer::with_accent_folding(true).normalize("Avião!"), "aviao");
        assert_eq!(Normalizer::with_accent_folding(true).normalize("Ênfase"), "enfase");
        assert_eq!(Normalizer::with_accent_folding(true).normalize("Ångström"), "angstrom");
    }
}
