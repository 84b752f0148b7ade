//! Fixed-size bucket array of search trees, routed by a word's first letter.

use serde::Serialize;

use crate::types::{LineNumber, WordEntry, DEFAULT_BUCKET_COUNT};

use super::search_tree::WordSearchTree;

/// Word → occurrence-list index.
///
/// Each word lives in exactly one bucket, chosen by [`WordIndex::hash_of`].
/// Within a bucket, words are kept in a [`WordSearchTree`].
pub struct WordIndex {
    buckets: Vec<WordSearchTree>,
}

/// Per-bucket size and shape figures.
#[derive(Debug, Clone, Serialize)]
pub struct BucketStats {
    pub bucket: usize,
    pub words: usize,
    pub height: usize,
}

/// Summary of an index, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub bucket_count: usize,
    pub word_count: usize,
    pub occurrence_count: usize,
    pub buckets: Vec<BucketStats>,
}

impl WordIndex {
    /// Create an index with the default 26 buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create an index with `bucket_count` buckets (at least one).
    pub fn with_buckets(bucket_count: usize) -> Self {
        let buckets = (0..bucket_count.max(1))
            .map(|_| WordSearchTree::new())
            .collect();
        Self { buckets }
    }

    /// Bucket for `word`: the offset of its lower-cased first character from
    /// `'a'` when that character is in `a..=z`, otherwise 0.
    ///
    /// Non-letter leading characters share bucket 0 with `'a'` words.
    pub fn hash_of(&self, word: &str) -> usize {
        let offset = word
            .chars()
            .next()
            .and_then(|c| c.to_lowercase().next())
            .filter(|c| c.is_ascii_lowercase())
            .map(|c| (c as usize) - ('a' as usize))
            .unwrap_or(0);
        offset % self.buckets.len()
    }

    /// Record that `word` occurs on `line`. Empty words are ignored, and so
    /// is line 0 since line numbers start at 1.
    pub fn insert(&mut self, word: &str, line: LineNumber) {
        if word.is_empty() {
            return;
        }
        if line == 0 {
            log::warn!("ignoring {:?} on line 0; line numbers start at 1", word);
            return;
        }
        let bucket = self.hash_of(word);
        log::trace!("insert {:?} line {} -> bucket {}", word, line, bucket);
        self.buckets[bucket].insert(word, line);
    }

    /// Look up `word` in its bucket.
    pub fn search(&self, word: &str) -> Option<&WordEntry> {
        if word.is_empty() {
            return None;
        }
        self.buckets[self.hash_of(word)].search(word)
    }

    /// Whether `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// Visit every entry, bucket by bucket in index order, each bucket in
    /// sorted word order.
    ///
    /// This is not a global alphabetical order: bucket 0 mixes `'a'` words
    /// with words that start with a non-letter.
    pub fn traverse_ordered<F>(&self, mut visit: F)
    where
        F: FnMut(&WordEntry),
    {
        for tree in &self.buckets {
            tree.inorder_traverse(&mut visit);
        }
    }

    /// Iterator with the same order as [`WordIndex::traverse_ordered`].
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> + '_ {
        self.buckets.iter().flat_map(|tree| tree.iter())
    }

    /// Look up each keyword in turn and collect the entries that exist.
    ///
    /// Output follows keyword order, repeats included; missing keywords are
    /// skipped. Keywords are used verbatim.
    pub fn build_report<I, S>(&self, keywords: I) -> Vec<&WordEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = Vec::new();
        let mut missed = 0usize;
        for keyword in keywords {
            let keyword = keyword.as_ref();
            match self.search(keyword) {
                Some(entry) => report.push(entry),
                None => {
                    log::trace!("keyword {:?} not in index", keyword);
                    missed += 1;
                }
            }
        }
        log::debug!(
            "report built: {} entries, {} keywords not found",
            report.len(),
            missed
        );
        report
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The tree in bucket `index`, if the bucket exists.
    pub fn bucket(&self, index: usize) -> Option<&WordSearchTree> {
        self.buckets.get(index)
    }

    /// Number of distinct words across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(WordSearchTree::len).sum()
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(WordSearchTree::is_empty)
    }

    /// Word, occurrence and per-bucket counts.
    pub fn stats(&self) -> IndexStats {
        let buckets: Vec<BucketStats> = self
            .buckets
            .iter()
            .enumerate()
            .map(|(bucket, tree)| BucketStats {
                bucket,
                words: tree.len(),
                height: tree.height(),
            })
            .collect();

        IndexStats {
            bucket_count: self.buckets.len(),
            word_count: buckets.iter().map(|b| b.words).sum(),
            occurrence_count: self.iter().map(|e| e.occurrences().len()).sum(),
            buckets,
        }
    }
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}
