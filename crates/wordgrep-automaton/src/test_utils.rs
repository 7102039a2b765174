//! Test utilities for comparing automata by language.

use crate::Automaton;

/// Every word over `alphabet` of length `0..=max_len`, shortest first.
pub fn words_up_to(alphabet: &str, max_len: usize) -> Vec<String> {
    let mut words = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix| alphabet.chars().map(move |c| format!("{prefix}{c}")))
            .collect();
        words.extend(layer.iter().cloned());
    }
    words
}

/// Words over `ABC` of length at most 4 accepted by `automaton`.
pub fn accepted(automaton: &Automaton) -> Vec<String> {
    words_up_to("ABC", 4)
        .into_iter()
        .filter(|w| automaton.accepts(w))
        .collect()
}

pub fn regex(source: &str) -> Automaton {
    Automaton::from_regex(source).unwrap_or_else(|e| panic!("{source:?} should compile: {e}"))
}

#[track_caller]
pub fn assert_same_language(a: &Automaton, b: &Automaton) {
    assert_eq!(accepted(a), accepted(b));
}
