//! Drives a document scan into a [`WordIndex`] and queries it for a report.

use std::collections::HashSet;
use std::io::BufRead;

use crate::config::IndexConfig;
use crate::index::WordIndex;
use crate::types::{IndexResult, LineNumber};

use super::normalizer::Normalizer;
use super::report::IndexReport;
use super::tokenizer::Tokenizer;

/// Builds one [`WordIndex`] per indexing run.
///
/// Lines are numbered from 1 in the order they are fed, across calls.
pub struct IndexBuilder {
    index: WordIndex,
    tokenizer: Tokenizer,
    normalizer: Normalizer,
    config: IndexConfig,
    lines_scanned: LineNumber,
    words_inserted: u64,
}

impl IndexBuilder {
    /// Start a run with an empty index shaped by `config`.
    pub fn new(config: IndexConfig) -> Self {
        Self {
            index: WordIndex::with_buckets(config.bucket_count),
            tokenizer: Tokenizer::new(),
            normalizer: Normalizer::with_accent_folding(config.fold_accents),
            config,
            lines_scanned: 0,
            words_inserted: 0,
        }
    }

    /// Index a single line under the given 1-based line number. Line 0 is
    /// rejected and nothing on it is indexed.
    pub fn index_line(&mut self, line_number: LineNumber, text: &str) {
        if line_number == 0 {
            log::warn!("skipping line 0; line numbers start at 1");
            return;
        }
        for token in self.tokenizer.tokenize(text) {
            let word = self.normalizer.normalize(token);
            if word.is_empty() {
                continue;
            }
            self.index.insert(&word, line_number);
            self.words_inserted += 1;
        }
        self.lines_scanned = self.lines_scanned.max(line_number);
    }

    /// Index lines in document order, continuing the line count.
    pub fn index_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let number = self.lines_scanned + 1;
            self.index_line(number, line.as_ref());
        }
        log::debug!(
            "indexed {} lines, {} words, {} distinct",
            self.lines_scanned,
            self.words_inserted,
            self.index.len()
        );
    }

    /// Index every line read from `reader`.
    pub fn index_reader<R: BufRead>(&mut self, reader: R) -> IndexResult<()> {
        for line in reader.lines() {
            let number = self.lines_scanned + 1;
            self.index_line(number, &line?);
        }
        log::debug!(
            "indexed {} lines, {} words, {} distinct",
            self.lines_scanned,
            self.words_inserted,
            self.index.len()
        );
        Ok(())
    }

    /// Normalize a keyword the same way document words are.
    pub fn normalize_keyword(&self, keyword: &str) -> String {
        self.normalizer.normalize(keyword)
    }

    /// Look up each keyword and assemble the report.
    pub fn report<I, S>(&self, keywords: I) -> IndexReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let normalized: Vec<String> = keywords
            .into_iter()
            .map(|k| self.normalize_keyword(k.as_ref()))
            .filter(|k| !self.config.dedup_keywords || seen.insert(k.clone()))
            .collect();

        let entries = self
            .index
            .build_report(&normalized)
            .into_iter()
            .cloned()
            .collect();

        let mut report = IndexReport::new(entries);
        if self.config.sort_report {
            report.sort();
        }
        report
    }

    /// The index built so far.
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Finish the run and take the index.
    pub fn into_index(self) -> WordIndex {
        self.index
    }

    /// Settings for this run.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Highest line number seen so far.
    pub fn lines_scanned(&self) -> LineNumber {
        self.lines_scanned
    }

    /// Total non-empty words inserted, repeats included.
    pub fn words_inserted(&self) -> u64 {
        self.words_inserted
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}
