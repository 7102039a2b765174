//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use wordgrep_core::Letter;

pub(crate) fn ensure_letter(c: char, word: &str) -> Letter {
    Letter::from_char(c).unwrap_or_else(|| {
        panic!("BuildTrie: {c:?} in {word:?} is not a letter (words must be canonicalized first)")
    })
}
