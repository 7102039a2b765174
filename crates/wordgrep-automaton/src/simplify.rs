//! Size-reduction passes.
//!
//! Both passes preserve the accepted language and renumber surviving nodes
//! in their original relative order:
//!
//! - **Epsilon-chain collapse**: a node with no letter edges and a single
//!   epsilon (other than the accept state) is only a detour. Every reference
//!   into such a chain is redirected to the node the chain drains into.
//! - **Dead-end pruning**: nodes unreachable from start, or that cannot reach
//!   accept, are dropped.

use tracing::debug;

use crate::invariants::ensure_mapped;
use crate::{Automaton, StateId};

impl Automaton {
    /// Alternates both passes until the node count stops shrinking.
    pub fn simplify(self) -> Automaton {
        let before = self.len();
        let mut current = self;
        loop {
            let size = current.len();
            current = current.collapse_epsilon_chains().prune_dead_ends();
            if current.len() >= size {
                break;
            }
        }
        debug!(before, after = current.len(), "simplified automaton");
        current
    }

    pub(crate) fn collapse_epsilon_chains(&self) -> Automaton {
        let n = self.nodes.len();
        let mut visited = vec![false; n];
        let mut drains_to: Vec<usize> = (0..n).collect();
        let mut chain = Vec::new();

        for first in 0..n {
            if visited[first] {
                continue;
            }
            let mut id = first;
            chain.push(id);
            while !visited[id] {
                visited[id] = true;
                drains_to[id] = id;
                if !self.is_transparent(id) {
                    break;
                }
                id = self.nodes[id].epsilons()[0].dest as usize;
                chain.push(id);
            }
            // `id` is either the end of this chain, a node revisited through
            // a cycle, or a node settled by an earlier chain.
            let end = drains_to[id];
            chain.pop();
            for link in chain.drain(..) {
                drains_to[link] = end;
            }
        }

        let keep: Vec<bool> = (0..n).map(|id| drains_to[id] == id).collect();
        let mut map = numbering(&keep);
        for id in 0..n {
            map[id] = map[drains_to[id]];
        }

        self.renumber(&keep, &map)
    }

    fn is_transparent(&self, id: usize) -> bool {
        id != self.accept as usize && self.nodes[id].is_lone_epsilon()
    }

    pub(crate) fn prune_dead_ends(&self) -> Automaton {
        let n = self.nodes.len();
        let mut predecessors: Vec<Vec<StateId>> = vec![Vec::new(); n];
        for (id, node) in (0..).zip(&self.nodes) {
            for dest in node.successors() {
                predecessors[dest as usize].push(id);
            }
        }

        let from_start = mark_reachable(n, self.start, |id| self.nodes[id].successors());
        let to_accept = mark_reachable(n, self.accept, |id| predecessors[id].iter().copied());

        if !from_start[self.accept as usize] {
            return Automaton::nothing();
        }

        let keep: Vec<bool> = (0..n).map(|id| from_start[id] && to_accept[id]).collect();
        let map = numbering(&keep);

        self.renumber(&keep, &map)
    }

    /// Keeps the flagged nodes in order, rewriting every reference through
    /// `map`.
    fn renumber(&self, keep: &[bool], map: &[Option<StateId>]) -> Automaton {
        let nodes = self
            .nodes
            .iter()
            .zip(keep)
            .filter(|(_, keep)| **keep)
            .map(|(node, _)| node.retain_mapped(map))
            .collect();

        Automaton::from_parts(
            nodes,
            ensure_mapped(map, self.start),
            ensure_mapped(map, self.accept),
        )
    }
}

/// Consecutive new indices for the kept nodes.
fn numbering(keep: &[bool]) -> Vec<Option<StateId>> {
    let mut next: StateId = 0;
    keep.iter()
        .map(|&keep| {
            keep.then(|| {
                next += 1;
                next - 1
            })
        })
        .collect()
}

fn mark_reachable<I>(n: usize, root: StateId, mut next: impl FnMut(usize) -> I) -> Vec<bool>
where
    I: IntoIterator<Item = StateId>,
{
    let mut seen = vec![false; n];
    let mut stack = vec![root as usize];
    while let Some(id) = stack.pop() {
        if seen[id] {
            continue;
        }
        seen[id] = true;
        stack.extend(next(id).into_iter().map(|dest| dest as usize));
    }
    seen
}
