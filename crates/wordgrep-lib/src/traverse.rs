//! Joint traversal of an automaton and a compact trie.
//!
//! The walk explores pairs `(automaton state, trie node)` depth-first from
//! `(start, root)`. Following a letter moves both sides at once, and only
//! letters present in both fingerprints are tried. Following an epsilon moves
//! the automaton alone. A trie node's data is reported when it is reached in
//! the accept state.
//!
//! Each pair is expanded at most once. Epsilon cycles survive simplification
//! (`(a?)*` has one), so the visited set is what guarantees termination. It
//! also means every matching word is reported exactly once.

use std::collections::HashSet;

use tracing::debug;
use wordgrep_automaton::{Automaton, StateId};
use wordgrep_trie::{CompactTrie, TrieOffset};

/// Counters from one traversal, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Distinct `(state, trie node)` pairs expanded.
    pub visited: usize,
    pub matches: usize,
}

pub struct Traversal<'a> {
    automaton: &'a Automaton,
    trie: &'a CompactTrie,
}

impl<'a> Traversal<'a> {
    pub fn new(automaton: &'a Automaton, trie: &'a CompactTrie) -> Self {
        Self { automaton, trie }
    }

    /// Calls `visit` once with the data of every accepted word.
    pub fn for_each_match(&self, mut visit: impl FnMut(u32)) -> TraversalStats {
        let accept = self.automaton.accept();
        let mut stats = TraversalStats::default();
        let mut visited: HashSet<(StateId, TrieOffset)> = HashSet::new();
        let mut stack = vec![(self.automaton.start(), self.trie.root())];

        while let Some(pair) = stack.pop() {
            if !visited.insert(pair) {
                continue;
            }
            let (state, offset) = pair;
            let node = self.automaton.node(state);

            if state == accept {
                let data = self.trie.data(offset);
                if data != 0 {
                    stats.matches += 1;
                    visit(data);
                }
            }

            for letter in node.fingerprint() & self.trie.fingerprint(offset) {
                let edge = node.letter(letter);
                let child = self.trie.child(offset, letter);
                if let (Some(edge), Some(child)) = (edge, child) {
                    stack.push((edge.dest, child));
                }
            }
            stack.extend(node.epsilons().iter().map(|edge| (edge.dest, offset)));
        }

        stats.visited = visited.len();
        debug!(
            states = self.automaton.len(),
            visited = stats.visited,
            matches = stats.matches,
            "traversal finished"
        );
        stats
    }

    /// Data of every accepted word, ascending.
    pub fn matching_ids(&self) -> Vec<u32> {
        let mut ids = Vec::new();
        self.for_each_match(|id| ids.push(id));
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// The accepted id with the largest key; ties go to the smallest id.
    pub fn best_by_key<K: Ord>(&self, mut key: impl FnMut(u32) -> K) -> Option<u32> {
        let mut best: Option<(K, u32)> = None;
        self.for_each_match(|id| {
            let k = key(id);
            let better = match &best {
                None => true,
                Some((best_key, best_id)) => k > *best_key || (k == *best_key && id < *best_id),
            };
            if better {
                best = Some((k, id));
            }
        });
        best.map(|(_, id)| id)
    }

    /// Sum of `value` over every accepted id.
    pub fn sum(&self, mut value: impl FnMut(u32) -> u64) -> u64 {
        let mut total = 0u64;
        self.for_each_match(|id| total = total.saturating_add(value(id)));
        total
    }
}
