//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Automaton, StateId};

impl Automaton {
    pub(crate) fn ensure_valid(&self) {
        debug_assert!(
            self.check_rep(),
            "Automaton: state reference out of range ({} nodes, start {}, accept {})",
            self.nodes.len(),
            self.start,
            self.accept
        );
    }
}

/// Looks up a surviving state after a renumbering pass.
pub(crate) fn ensure_mapped(map: &[Option<StateId>], id: StateId) -> StateId {
    map[id as usize].unwrap_or_else(|| {
        panic!("simplify: state {id} was dropped but is still referenced as start or accept")
    })
}
