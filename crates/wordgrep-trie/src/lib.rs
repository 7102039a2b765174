#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Tries keyed by uppercase words, in two stages.
//!
//! A [`BuildTrie`] accepts insertions. Once complete it is flattened into a
//! [`CompactTrie`]: one `u32` array where each node stores a 26-bit child
//! fingerprint, its data value, and only the child offsets that exist. Child
//! lookup is a bit test plus a popcount, and the fingerprint can be
//! intersected directly with an automaton node's letter set.
//!
//! Data value 0 means "no word ends here".

mod build;
mod compact;
mod error;
pub mod format;
mod invariants;

#[cfg(test)]
mod compact_tests;

pub use build::BuildTrie;
pub use compact::{CompactTrie, TrieOffset};
pub use error::FormatError;
