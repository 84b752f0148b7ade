//! Unbalanced binary search tree of word entries, keyed by word text.

use std::cmp::Ordering;

use crate::types::{LineNumber, WordEntry};

type Link = Option<Box<Node>>;

struct Node {
    entry: WordEntry,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(word: &str, line: LineNumber) -> Box<Self> {
        Box::new(Self {
            entry: WordEntry::new(word, line),
            left: None,
            right: None,
        })
    }
}

/// Binary search tree holding at most one [`WordEntry`] per word.
///
/// Everything in a node's left subtree sorts before its word, everything in
/// the right subtree after. No rebalancing is done: the shape follows
/// insertion order.
#[derive(Default)]
pub struct WordSearchTree {
    root: Link,
    len: usize,
}

impl WordSearchTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `word` seen on `line`, merging into the existing entry when the
    /// word is already present. Empty words are ignored.
    pub fn insert(&mut self, word: &str, line: LineNumber) {
        if word.is_empty() {
            return;
        }

        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            match word.cmp(node.entry.word()) {
                Ordering::Equal => {
                    node.entry.merge_occurrence(line);
                    return;
                }
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
            }
        }

        *cursor = Some(Node::leaf(word, line));
        self.len += 1;
    }

    /// Look up the entry for `word`.
    pub fn search(&self, word: &str) -> Option<&WordEntry> {
        if word.is_empty() {
            return None;
        }

        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match word.cmp(node.entry.word()) {
                Ordering::Equal => return Some(&node.entry),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether `word` has an entry in this tree.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// Visit every entry in increasing word order.
    pub fn inorder_traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&WordEntry),
    {
        for entry in self.iter() {
            visit(entry);
        }
    }

    /// In-order iterator over the entries.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|n| [n.left.as_deref(), n.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }
}

impl Drop for WordSearchTree {
    // Tear down iteratively; a degenerate tree is as deep as it is long.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a WordSearchTree {
    type Item = &'a WordEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`WordSearchTree`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a WordEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_merges_repeated_word() {
        let mut tree = WordSearchTree::new();
        tree.insert("casa", 1);
        tree.insert("casa", 3);
        tree.insert("casa", 1);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.search("casa").unwrap().occurrences().as_slice(), &[1, 3]);
    }

    #[test]
    fn height_follows_insertion_order() {
        let mut degenerate = WordSearchTree::new();
        for w in ["a", "b", "c", "d"] {
            degenerate.insert(w, 1);
        }
        assert_eq!(degenerate.height(), 4);

        let mut bushy = WordSearchTree::new();
        for w in ["b", "a", "c"] {
            bushy.insert(w, 1);
        }
        assert_eq!(bushy.height(), 2);
        assert_eq!(WordSearchTree::new().height(), 0);
    }

    #[test]
    fn deep_tree_drops_without_overflow() {
        let mut tree = WordSearchTree::new();
        for i in 0..5_000u32 {
            tree.insert(&format!("w{:05}", i), i + 1);
        }
        assert_eq!(tree.len(), 5_000);
        assert_eq!(tree.height(), 5_000);

        // A recursive teardown of a 5,000-deep chain would not fit in 64 KiB.
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn(move || drop(tree))
            .unwrap();
        handle.join().unwrap();
    }
}
