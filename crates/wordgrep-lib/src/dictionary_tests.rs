use wordgrep_automaton::{Automaton, SpecError};

use crate::test_utils::{sample, words};
use crate::{Dictionary, Entry};

const FEL_HEL: &str = "(f|h)el(i|t|l).*";

#[test]
fn grep_returns_matches_in_spelling_order() {
    let dict = sample();

    let found = dict.grep(FEL_HEL).unwrap();

    assert_eq!(words(&found), ["FELIX", "HELIX", "HELL", "HELLO"]);
}

#[test]
fn grep_freq_sorted_ranks_by_frequency() {
    let dict = sample();

    let listing = dict
        .grep_freq_sorted(FEL_HEL)
        .unwrap()
        .iter()
        .map(|e| format!("{} {}", e.word, e.freq))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(listing, @r"
    FELIX 363
    HELLO 24
    HELL 19
    HELIX 1
    ");
}

#[test]
fn total_and_best() {
    let dict = sample();

    assert_eq!(dict.total_freq(FEL_HEL).unwrap(), 363 + 24 + 19 + 1);
    assert_eq!(dict.best_match(FEL_HEL).unwrap(), Entry::new("FELIX", 363));
    assert_eq!(dict.best_match("h.*").unwrap(), Entry::new("HECTOR", 900));
}

#[test]
fn help_needs_its_own_branch() {
    let dict = sample();

    assert!(!words(&dict.grep(FEL_HEL).unwrap()).contains(&"HELP"));
    assert_eq!(words(&dict.grep("hel(i|p|l).*").unwrap()), ["HELIX", "HELL", "HELLO", "HELP"]);
}

#[test]
fn no_matches() {
    let dict = sample();

    assert!(dict.grep(".").unwrap().is_empty());
    assert!(dict.grep_freq_sorted(".").unwrap().is_empty());
    assert_eq!(dict.total_freq(".").unwrap(), 0);
    assert_eq!(dict.best_match(".").unwrap(), Entry::default());
    assert_eq!(Entry::default(), Entry::new("", 0));
}

#[test]
fn regex_errors_propagate() {
    let dict = sample();

    assert_eq!(dict.grep("hel("), Err(SpecError::MissingClose { pos: 3 }));
    assert_eq!(dict.total_freq("x)"), Err(SpecError::UnexpectedClose { pos: 1 }));
    assert_eq!(
        dict.best_match("he!"),
        Err(SpecError::InvalidCharacter { ch: '!', pos: 2 })
    );
}

#[test]
fn ties_go_to_the_first_spelling() {
    let dict = Dictionary::new([
        Entry::new("AD", 1),
        Entry::new("AC", 5),
        Entry::new("AB", 5),
    ]);

    assert_eq!(dict.best_match("a.").unwrap(), Entry::new("AB", 5));
    assert_eq!(words(&dict.grep_freq_sorted("a.").unwrap()), ["AB", "AC", "AD"]);
}

#[test]
fn entries_are_canonicalized_and_merged() {
    let dict = Dictionary::new([
        Entry::new("hello", 2),
        Entry::new("HELLO", 3),
        Entry::new("don't", 4),
        Entry::new("zero", 0),
        Entry::new("1984", 7),
        Entry::new("Ab", 1),
    ]);

    let all: Vec<_> = dict.iter().cloned().collect();
    assert_eq!(
        all,
        [Entry::new("AB", 1), Entry::new("DONT", 4), Entry::new("HELLO", 5)]
    );
    assert_eq!(dict.len(), 3);
}

#[test]
fn ids_follow_spelling_order() {
    let dict = sample();

    assert_eq!(dict.word_to_id("FELIX"), 1);
    assert_eq!(dict.word_to_id("world"), 8);
    assert_eq!(dict.word_to_id("HEL"), 0);
    assert_eq!(dict.word_to_id("NOPE"), 0);
    assert_eq!(dict.entry(6), Some(&Entry::new("HELLO", 24)));
    assert_eq!(dict.entry(0), None);
    assert_eq!(dict.entry(9), None);
}

#[test]
fn empty_dictionary() {
    let dict = Dictionary::new(Vec::new());

    assert!(dict.is_empty());
    assert!(dict.grep(".*").unwrap().is_empty());
    assert_eq!(dict.best_match(".*").unwrap(), Entry::default());
}

#[test]
fn automaton_queries_compose() {
    let dict = sample();
    let starts_hel = Automaton::from_regex("hel.*").unwrap();
    let ends_o = Automaton::from_regex(".*o").unwrap();

    let both = starts_hel.tensor_product(&ends_o);
    assert_eq!(words(&dict.grep_automaton(&both)), ["HELLO"]);

    let either = starts_hel.alternation(&Automaton::from_regex("w.*").unwrap());
    assert_eq!(dict.total_freq_automaton(&either), 1 + 19 + 24 + 16 + 111);
    assert_eq!(dict.best_match_automaton(&either), Entry::new("WORLD", 111));
    assert_eq!(
        words(&dict.grep_freq_sorted_automaton(&either)),
        ["WORLD", "HELLO", "HELL", "HELP", "HELIX"]
    );
}

#[test]
fn interleaving_query() {
    let dict = sample();

    // HELLO is HEL interleaved with LO.
    assert_eq!(words(&dict.grep("hel#lo").unwrap()), ["HELLO"]);
}

#[test]
fn entry_serializes_as_object() {
    let json = serde_json::to_string(&Entry::new("FELIX", 363)).unwrap();

    assert_eq!(json, r#"{"word":"FELIX","freq":363}"#);
}

#[test]
fn very_long_word_builds_and_matches() {
    let long = "a".repeat(300_000);
    let dict = Dictionary::new([Entry::new(long.as_str(), 3), Entry::new("ab", 1)]);

    assert_eq!(dict.len(), 2);
    assert_eq!(dict.word_to_id(&long), 1);
    assert_eq!(dict.total_freq("a*").unwrap(), 3);
    assert_eq!(dict.best_match("a.*").unwrap().freq, 3);
}
