//! Phase 1 tests: occurrence lists, word entries, and the per-bucket search tree.

use rand::seq::SliceRandom;
use rand::SeedableRng;

use word_index::{IndexError, OccurrenceList, WordEntry, WordSearchTree};

// ==================== OccurrenceList ====================

#[test]
fn test_occurrences_first_seen_order() {
    let mut list = OccurrenceList::new();
    for line in [4, 2, 4, 9, 2, 1] {
        list.append(line);
    }
    assert_eq!(list.as_slice(), &[4, 2, 9, 1]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_occurrences_append_idempotent() {
    let mut once = OccurrenceList::new();
    once.append(3);

    let mut twice = OccurrenceList::new();
    twice.append(3);
    twice.append(3);

    assert_eq!(once, twice);
}

#[test]
fn test_occurrences_get_boundary() {
    let mut list = OccurrenceList::new();
    list.append(10);
    list.append(20);
    list.append(10);

    assert_eq!(list.get(list.len() - 1).unwrap(), 20);
    assert!(matches!(
        list.get(list.len()),
        Err(IndexError::OccurrenceOutOfRange { index: 2, len: 2 })
    ));
    assert!(OccurrenceList::new().get(0).is_err());
}

// ==================== WordEntry ====================

#[test]
fn test_entry_merge_and_render() {
    let mut entry = WordEntry::new("casa", 1);
    entry.merge_occurrence(3);
    entry.merge_occurrence(3);
    assert_eq!(entry.word(), "casa");
    assert_eq!(entry.occurrences().as_slice(), &[1, 3]);
    assert_eq!(entry.to_string(), "casa: 1, 3");
    assert_eq!(WordEntry::new("só", 12).to_string(), "só: 12");
}

#[test]
fn test_entry_ordering_is_ordinal() {
    use std::cmp::Ordering;

    let casa = WordEntry::new("casa", 1);
    assert_eq!(casa.compare_word("carro"), Ordering::Greater);
    assert_eq!(casa.compare_word("casa"), Ordering::Equal);
    assert_eq!(casa.compare_word("casamento"), Ordering::Less);
    // Uppercase sorts before lowercase; accented letters after ASCII.
    assert!(WordEntry::new("Casa", 1) < casa);
    assert!(WordEntry::new("zebra", 1) < WordEntry::new("água", 1));
}

// ==================== WordSearchTree ====================

#[test]
fn test_tree_insert_and_search() {
    let mut tree = WordSearchTree::new();
    assert!(tree.is_empty());

    tree.insert("casa", 1);
    tree.insert("casa", 3);
    tree.insert("carro", 2);

    assert!(!tree.is_empty());
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.search("casa").unwrap().occurrences().as_slice(), &[1, 3]);
    assert_eq!(tree.search("carro").unwrap().occurrences().as_slice(), &[2]);
    assert!(tree.search("cavalo").is_none());
    assert!(tree.contains("carro"));
    assert!(!tree.contains("car"));
}

#[test]
fn test_tree_ignores_empty_word() {
    let mut tree = WordSearchTree::new();
    tree.insert("", 1);
    assert!(tree.is_empty());
    assert!(tree.search("").is_none());
    assert!(!tree.contains(""));
}

#[test]
fn test_tree_inorder_sorted() {
    let mut tree = WordSearchTree::new();
    for (i, w) in ["mar", "casa", "zinco", "barco", "nuvem", "casa", "ar"]
        .iter()
        .enumerate()
    {
        tree.insert(w, i as u32 + 1);
    }

    let mut words = Vec::new();
    tree.inorder_traverse(|e| words.push(e.word().to_string()));
    assert_eq!(words, vec!["ar", "barco", "casa", "mar", "nuvem", "zinco"]);

    // Restartable: a second walk yields the same sequence.
    let again: Vec<&str> = tree.iter().map(|e| e.word()).collect();
    assert_eq!(words, again);
}

#[test]
fn test_tree_random_insertion_order() {
    let mut words: Vec<String> = (0..500).map(|i| format!("w{:04}", i * 7 % 500)).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for round in 0..5 {
        words.shuffle(&mut rng);
        let mut tree = WordSearchTree::new();
        for (line, word) in words.iter().enumerate() {
            tree.insert(word, line as u32 + 1);
            tree.insert(word, line as u32 + 1);
        }

        assert_eq!(tree.len(), 500, "round {}", round);
        let walked: Vec<&str> = tree.iter().map(|e| e.word()).collect();
        for pair in walked.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
        for entry in tree.iter() {
            assert_eq!(entry.occurrences().len(), 1);
        }
    }
}

#[test]
fn test_tree_merges_many_lines() {
    let mut tree = WordSearchTree::new();
    let lines = [5, 1, 5, 8, 1, 2, 8, 13];
    for line in lines {
        tree.insert("rio", line);
        tree.insert("margem", line + 100);
    }
    assert_eq!(tree.search("rio").unwrap().occurrences().as_slice(), &[5, 1, 8, 2, 13]);
    assert_eq!(tree.len(), 2);
}
