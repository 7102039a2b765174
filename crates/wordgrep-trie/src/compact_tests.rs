use wordgrep_core::{Letter, LetterSet};

use crate::{BuildTrie, CompactTrie};

const WORDS: [&str; 8] = [
    "FELIX", "HBOMB", "HECTOR", "HELIX", "HELL", "HELLO", "HELP", "WORLD",
];

fn sample() -> (BuildTrie, CompactTrie) {
    let mut build = BuildTrie::new();
    for (id, word) in (1..).zip(WORDS) {
        build.insert(word, id);
    }
    let compact = CompactTrie::from(&build);
    (build, compact)
}

fn letter(c: char) -> Letter {
    Letter::from_char(c).unwrap()
}

#[test]
fn lookups_mirror_build_trie() {
    let (build, compact) = sample();

    for word in WORDS {
        assert_eq!(compact.lookup(word), build.lookup(word), "{word}");
        assert_ne!(compact.lookup(word), 0);
    }
    for word in ["", "H", "HEL", "HELPS", "ZEBRA", "HEL1"] {
        assert_eq!(compact.lookup(word), 0, "{word}");
    }
}

#[test]
fn size_is_three_words_per_node_minus_one() {
    let (build, compact) = sample();

    assert_eq!(compact.len(), 3 * build.node_count() - 1);
}

#[test]
fn root_is_last_node() {
    let (_, compact) = sample();
    let root = compact.root();

    assert_eq!(root as usize + 2 + compact.fingerprint(root).len(), compact.len());
}

#[test]
fn root_fingerprint_lists_first_letters() {
    let (_, compact) = sample();

    let expected: LetterSet = ['F', 'H', 'W'].into_iter().map(letter).collect();
    assert_eq!(compact.fingerprint(compact.root()), expected);
    assert_eq!(compact.data(compact.root()), 0);
}

#[test]
fn child_offsets_point_below_parent() {
    let (_, compact) = sample();
    let root = compact.root();

    let h = compact.child(root, letter('H')).unwrap();
    assert!(h < root);
    assert_eq!(compact.child(root, letter('A')), None);

    let children: Vec<char> = compact.children(h).map(|(l, _)| l.to_char()).collect();
    assert_eq!(children, vec!['B', 'E']);
}

#[test]
fn iter_lists_words_alphabetically() {
    let (_, compact) = sample();

    let words: Vec<(String, u32)> = compact.iter().collect();
    let expected: Vec<(String, u32)> = (1..).zip(WORDS).map(|(id, w)| (w.to_string(), id)).collect();
    assert_eq!(words, expected);
}

#[test]
fn empty_trie_is_a_bare_root() {
    let compact = CompactTrie::from(&BuildTrie::new());

    assert_eq!(compact.words(), &[0, 0]);
    assert_eq!(compact.root(), 0);
    assert_eq!(compact.lookup("A"), 0);
    assert_eq!(compact.iter().count(), 0);
}

#[test]
fn very_long_word_compacts_without_recursion() {
    let long = "A".repeat(300_000);
    let mut build = BuildTrie::new();
    build.insert(&long, 7);
    build.insert("AB", 3);

    let compact = CompactTrie::from(&build);

    assert_eq!(compact.len(), 3 * build.node_count() - 1);
    assert_eq!(compact.lookup(&long), 7);
    assert_eq!(compact.lookup("AB"), 3);
    assert_eq!(compact.lookup(&long[..1000]), 0);
    let words: Vec<(String, u32)> = compact.iter().collect();
    assert_eq!(words, vec![(long, 7), ("AB".to_string(), 3)]);
}
