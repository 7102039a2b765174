//! Shared fixtures.

use crate::{Dictionary, Entry};

pub const SAMPLE: [(&str, u64); 8] = [
    ("FELIX", 363),
    ("HBOMB", 12),
    ("HECTOR", 900),
    ("HELIX", 1),
    ("HELL", 19),
    ("HELLO", 24),
    ("HELP", 16),
    ("WORLD", 111),
];

pub fn sample() -> Dictionary {
    Dictionary::new(SAMPLE.map(|(word, freq)| Entry::new(word, freq)))
}

pub fn words(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.word.as_str()).collect()
}

/// Every word over `ABC` of length 1 to 4, with scrambled frequencies that
/// include some ties.
pub fn abc_words() -> Dictionary {
    let mut layer = vec![String::new()];
    let mut entries = Vec::new();
    for _ in 0..4 {
        layer = layer
            .iter()
            .flat_map(|prefix| ['A', 'B', 'C'].map(|c| format!("{prefix}{c}")))
            .collect();
        entries.extend(layer.iter().cloned());
    }
    Dictionary::new(
        (0u64..)
            .zip(entries)
            .map(|(i, word)| Entry::new(word, (i * 37) % 101 + 1)),
    )
}
