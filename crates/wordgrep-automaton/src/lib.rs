#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Nondeterministic automata over the letters `A`..=`Z`.
//!
//! Automata are immutable values. They are built from single characters or
//! regex strings and combined with the operations in [`algebra`]; every
//! operation returns a new automaton that has already been through the
//! [`simplify`] passes.
//!
//! ```text
//! "(f|h)el.*"  ──regex──▶  Automaton  ──concat / alternation / ...──▶  Automaton
//!                              │
//!                              └──dot──▶  Graphviz source
//! ```

pub mod algebra;
mod automaton;
pub mod dump;
mod error;
mod invariants;
mod printer;
pub mod regex;
pub mod simplify;

#[cfg(test)]
mod algebra_tests;
#[cfg(test)]
mod test_utils;

pub use automaton::{Automaton, Edge, Node, StateId};
pub use dump::DotPrinter;
pub use error::SpecError;
pub use printer::SpecErrorPrinter;
pub use regex::Operator;
