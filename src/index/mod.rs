//! Index structures: per-bucket search trees and the bucketed word index.

pub mod search_tree;
pub mod word_index;

pub use search_tree::WordSearchTree;
pub use word_index::{BucketStats, IndexStats, WordIndex};
