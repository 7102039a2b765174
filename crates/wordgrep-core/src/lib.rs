#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Primitives shared by every wordgrep layer.
//!
//! - [`Letter`] / [`LetterSet`]: the fixed 26-letter alphabet and its bitset form
//!   (the "fingerprint" carried by automaton nodes and trie nodes alike).
//! - [`Weight`]: a positive quantity kept on a log scale, attached to automaton edges.

mod alphabet;
mod weight;


pub use alphabet::{ALPHABET_SIZE, Letter, LetterSet, LetterSetIter, canonical_word};
pub use weight::Weight;
