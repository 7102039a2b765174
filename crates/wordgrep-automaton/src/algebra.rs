//! Algebraic composition of automata.
//!
//! Each combinator copies its operands into a fresh node vector, shifting or
//! transforming their indices, wires the copies together with epsilon edges,
//! and simplifies the result. Operands are never modified.

use crate::automaton::Node;
use crate::{Automaton, Edge, StateId};

/// Copies `nodes` into `into` with every destination shifted by the current
/// length of `into`, returning that offset.
fn append_shifted(into: &mut Vec<Node>, nodes: &[Node]) -> StateId {
    let offset = into.len() as StateId;
    into.extend(nodes.iter().map(|node| node.map_states(|dest| dest + offset)));
    offset
}

impl Automaton {
    /// Words of `self` followed by words of `other`.
    ///
    /// ```text
    /// start ─→ [self] ─ε→ [other] ─→ accept
    /// ```
    pub fn concat(&self, other: &Automaton) -> Automaton {
        let mut nodes = self.nodes.clone();
        let offset = append_shifted(&mut nodes, &other.nodes);
        nodes[self.accept as usize].add_epsilon(Edge::new(offset + other.start));

        Automaton::from_parts(nodes, self.start, offset + other.accept).simplify()
    }

    /// Words of either operand.
    pub fn alternation(&self, other: &Automaton) -> Automaton {
        Automaton::alternation_of([self, other])
    }

    /// Words of any operand. No operands yields [`Automaton::nothing`].
    ///
    /// ```text
    ///          ┌─ε→ [a] ─ε─┐
    /// start(0) ┼─ε→ [b] ─ε─┼─→ accept(1)
    ///          └─ε→ [c] ─ε─┘
    /// ```
    pub fn alternation_of<'a>(options: impl IntoIterator<Item = &'a Automaton>) -> Automaton {
        let mut nodes = vec![Node::default(), Node::default()];
        for option in options {
            let offset = append_shifted(&mut nodes, &option.nodes);
            nodes[0].add_epsilon(Edge::new(offset + option.start));
            nodes[(offset + option.accept) as usize].add_epsilon(Edge::new(1));
        }

        Automaton::from_parts(nodes, 0, 1).simplify()
    }

    /// Zero or more repetitions.
    ///
    /// ```text
    ///        ┌──────ε──────┐
    ///        ↓             │
    ///      hub ─ε→ [self] ─┘
    /// ```
    ///
    /// The hub is both start and accept.
    pub fn kleene_star(&self) -> Automaton {
        let mut nodes = self.nodes.clone();
        let hub = nodes.len() as StateId;
        let mut hub_node = Node::default();
        hub_node.add_epsilon(Edge::new(self.start));
        nodes.push(hub_node);
        nodes[self.accept as usize].add_epsilon(Edge::new(hub));

        Automaton::from_parts(nodes, hub, hub).simplify()
    }

    pub fn one_or_more(&self) -> Automaton {
        self.concat(&self.kleene_star())
    }

    pub fn zero_or_one(&self) -> Automaton {
        self.alternation(&Automaton::empty())
    }

    /// Interleavings of a word of `self` with a word of `other`.
    ///
    /// Every pair `(i, j)` of operand states owns three nodes. The junction
    /// `3(i·|other| + j)` chooses which side moves next: the node after it
    /// carries `self`'s edges out of `i` (leaving `j` fixed), the one after
    /// that carries `other`'s edges out of `j` (leaving `i` fixed).
    pub fn cartesian_product(&self, other: &Automaton) -> Automaton {
        let width = other.nodes.len() as StateId;
        let junction = |i: StateId, j: StateId| 3 * (i * width + j);

        let mut nodes = Vec::with_capacity(3 * self.nodes.len() * other.nodes.len());
        for (i, left) in (0..).zip(&self.nodes) {
            for (j, right) in (0..).zip(&other.nodes) {
                let p = junction(i, j);
                let mut hub = Node::default();
                hub.add_epsilon(Edge::new(p + 1));
                hub.add_epsilon(Edge::new(p + 2));
                nodes.push(hub);
                nodes.push(left.map_states(|dest| junction(dest, j)));
                nodes.push(right.map_states(|dest| junction(i, dest)));
            }
        }

        let start = junction(self.start, other.start);
        let accept = junction(self.accept, other.accept);
        Automaton::from_parts(nodes, start, accept).simplify()
    }

    /// Words accepted by both operands, read in lockstep.
    ///
    /// Pair `(i, j)` becomes node `i·|other| + j`. A letter edge exists only
    /// where both operands have one, and its weight is the product of theirs.
    /// Epsilons move one side at a time.
    pub fn tensor_product(&self, other: &Automaton) -> Automaton {
        let width = other.nodes.len() as StateId;
        let pair = |i: StateId, j: StateId| i * width + j;

        let mut nodes = Vec::with_capacity(self.nodes.len() * other.nodes.len());
        for (i, left) in (0..).zip(&self.nodes) {
            for (j, right) in (0..).zip(&other.nodes) {
                let mut node = Node::default();
                for letter in left.fingerprint() & right.fingerprint() {
                    if let (Some(a), Some(b)) = (left.letter(letter), right.letter(letter)) {
                        let edge = Edge::weighted(pair(a.dest, b.dest), a.weight * b.weight);
                        node.set_letter(letter, edge);
                    }
                }
                for edge in left.epsilons() {
                    node.add_epsilon(Edge::weighted(pair(edge.dest, j), edge.weight));
                }
                for edge in right.epsilons() {
                    node.add_epsilon(Edge::weighted(pair(i, edge.dest), edge.weight));
                }
                nodes.push(node);
            }
        }

        let start = pair(self.start, other.start);
        let accept = pair(self.accept, other.accept);
        Automaton::from_parts(nodes, start, accept).simplify()
    }
}
