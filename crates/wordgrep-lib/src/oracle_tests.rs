//! Cross-checks queries against `regex-automata` on small dictionaries.

use std::cmp::Reverse;

use regex_automata::meta::Regex;

use crate::test_utils::{abc_words, sample};
use crate::{Dictionary, Entry};

const PATTERNS: &[&str] = &[
    "a",
    ".",
    "..",
    ".*",
    "a*",
    "a+b",
    "ab?c",
    "(ab)*",
    "(a|b)*c",
    "a(b|c)+",
    "(a?)*b",
    "((a|b)c)+",
    "a.*a",
    "c.?c.?",
    "(a*b*)*c",
    "b+|c+",
    "a|b|c",
    "ab|ba|ca*",
    "(a(b(c)?)?)?",
    ".*(aa|bb|cc).*",
];

fn oracle(pattern: &str) -> Regex {
    Regex::new(&format!("(?i)^(?:{pattern})$")).unwrap()
}

/// What every query should return, computed by brute force.
fn expected(dict: &Dictionary, pattern: &str) -> Vec<Entry> {
    let re = oracle(pattern);
    dict.iter()
        .filter(|entry| re.is_match(&entry.word))
        .cloned()
        .collect()
}

fn check(dict: &Dictionary, pattern: &str) {
    let want = expected(dict, pattern);

    assert_eq!(dict.grep(pattern).unwrap(), want, "grep {pattern:?}");

    let mut by_freq = want.clone();
    by_freq.sort_by_key(|entry| Reverse(entry.freq));
    assert_eq!(
        dict.grep_freq_sorted(pattern).unwrap(),
        by_freq,
        "grep_freq_sorted {pattern:?}"
    );

    let total: u64 = want.iter().map(|entry| entry.freq).sum();
    assert_eq!(dict.total_freq(pattern).unwrap(), total, "total_freq {pattern:?}");

    let best = by_freq.first().cloned().unwrap_or_default();
    assert_eq!(dict.best_match(pattern).unwrap(), best, "best_match {pattern:?}");
}

#[test]
fn abc_words_agree_with_regex_automata() {
    let dict = abc_words();
    assert_eq!(dict.len(), 3 + 9 + 27 + 81);

    for pattern in PATTERNS {
        check(&dict, pattern);
    }
}

#[test]
fn sample_agrees_with_regex_automata() {
    let dict = sample();

    for pattern in [
        "(f|h)el(i|t|l).*",
        "h.*",
        ".*l.*",
        "....",
        "hel+(o|p)?",
        "(w|f).*(d|x)",
        "h(e|b)(l|c|o).*",
    ] {
        check(&dict, pattern);
    }
}

#[test]
fn automaton_accepts_agrees_with_regex_automata() {
    let dict = abc_words();

    for pattern in PATTERNS {
        let automaton = crate::Automaton::from_regex(pattern).unwrap();
        let re = oracle(pattern);
        for entry in dict.iter() {
            assert_eq!(
                automaton.accepts(&entry.word),
                re.is_match(&entry.word),
                "{pattern:?} on {:?}",
                entry.word
            );
        }
    }
}

#[test]
fn grep_agrees_with_accepts_for_product_operators() {
    let dict = abc_words();

    for pattern in [
        "ab#c",
        "(a|b)*&.*c",
        "(a#b)*",
        "((a|b)#c)&.*b.*",
        "a*#b*",
        "(ab)*&(a|b)*",
        ".*a.*&.*b.*&.*c.*",
        "(a#bc)|(c&c*)",
    ] {
        let automaton = crate::Automaton::from_regex(pattern).unwrap();
        let want: Vec<Entry> = dict
            .iter()
            .filter(|entry| automaton.accepts(&entry.word))
            .cloned()
            .collect();

        assert_eq!(dict.grep(pattern).unwrap(), want, "{pattern:?}");
        assert_eq!(
            dict.total_freq(pattern).unwrap(),
            want.iter().map(|entry| entry.freq).sum::<u64>(),
            "{pattern:?}"
        );
    }
}
