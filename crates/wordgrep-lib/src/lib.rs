//! wordgrep: regex queries over a frequency-ranked word list.
//!
//! # Example
//!
//! ```
//! use wordgrep_lib::{Dictionary, Entry};
//!
//! let dict = Dictionary::new([
//!     Entry::new("hello", 24),
//!     Entry::new("help", 16),
//!     Entry::new("world", 111),
//! ]);
//!
//! let words: Vec<_> = dict.grep("hel.*").unwrap().into_iter().map(|e| e.word).collect();
//! assert_eq!(words, ["HELLO", "HELP"]);
//! assert_eq!(dict.best_match("hel.*").unwrap().word, "HELLO");
//! assert_eq!(dict.total_freq(".....").unwrap(), 135);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod dictionary;
mod error;
mod persist;
pub mod traverse;
pub mod wordlist;

#[cfg(test)]
mod dictionary_tests;
#[cfg(test)]
mod oracle_tests;
#[cfg(test)]
mod test_utils;

pub use dictionary::{Dictionary, Entry, EntryId};
pub use error::LoadError;
pub use persist::MAGIC;
pub use traverse::Traversal;

pub use wordgrep_automaton::{Automaton, SpecError, SpecErrorPrinter};
pub use wordgrep_trie::{BuildTrie, CompactTrie, FormatError};
