//! Core automaton representation.
//!
//! Nodes live in a flat vector and refer to each other by index. A node has at
//! most one edge per letter, recorded in a fixed array and flagged in the node's
//! fingerprint, plus any number of epsilon edges that consume no input.

use std::str::FromStr;

use wordgrep_core::{ALPHABET_SIZE, Letter, LetterSet, Weight};

use crate::SpecError;

/// Index into [`Automaton::nodes`].
pub type StateId = u32;

/// A weighted edge to another node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edge {
    pub dest: StateId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(dest: StateId) -> Self {
        Self {
            dest,
            weight: Weight::ONE,
        }
    }

    pub fn weighted(dest: StateId, weight: Weight) -> Self {
        Self { dest, weight }
    }

    fn map(self, f: impl Fn(StateId) -> StateId) -> Self {
        Self {
            dest: f(self.dest),
            ..self
        }
    }
}

/// One automaton state with its outgoing edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    fingerprint: LetterSet,
    /// Entry `i` is meaningful only when bit `i` of the fingerprint is set.
    letters: [Edge; ALPHABET_SIZE],
    epsilons: Vec<Edge>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            fingerprint: LetterSet::EMPTY,
            letters: [Edge::default(); ALPHABET_SIZE],
            epsilons: Vec::new(),
        }
    }
}

impl Node {
    pub fn fingerprint(&self) -> LetterSet {
        self.fingerprint
    }

    pub fn letter(&self, letter: Letter) -> Option<Edge> {
        self.fingerprint
            .contains(letter)
            .then(|| self.letters[letter.index()])
    }

    pub fn letter_edges(&self) -> impl Iterator<Item = (Letter, Edge)> + '_ {
        self.fingerprint
            .iter()
            .map(|letter| (letter, self.letters[letter.index()]))
    }

    pub fn epsilons(&self) -> &[Edge] {
        &self.epsilons
    }

    /// Destinations of every outgoing edge, letters first.
    pub fn successors(&self) -> impl Iterator<Item = StateId> + '_ {
        self.letter_edges()
            .map(|(_, edge)| edge.dest)
            .chain(self.epsilons.iter().map(|edge| edge.dest))
    }

    /// No letter edges and exactly one epsilon.
    pub(crate) fn is_lone_epsilon(&self) -> bool {
        self.fingerprint.is_empty() && self.epsilons.len() == 1
    }

    pub(crate) fn set_letter(&mut self, letter: Letter, edge: Edge) {
        self.fingerprint.insert(letter);
        self.letters[letter.index()] = edge;
    }

    pub(crate) fn add_epsilon(&mut self, edge: Edge) {
        self.epsilons.push(edge);
    }

    /// Copy with every destination rewritten by `f`.
    pub(crate) fn map_states(&self, f: impl Fn(StateId) -> StateId) -> Node {
        let mut node = Node {
            fingerprint: self.fingerprint,
            letters: self.letters,
            epsilons: self.epsilons.iter().map(|edge| edge.map(&f)).collect(),
        };
        for letter in self.fingerprint {
            node.letters[letter.index()] = self.letters[letter.index()].map(&f);
        }
        node
    }

    /// Copy with destinations renumbered through `map`; edges into unmapped
    /// states are dropped.
    pub(crate) fn retain_mapped(&self, map: &[Option<StateId>]) -> Node {
        let mut node = Node::default();
        for (letter, edge) in self.letter_edges() {
            if let Some(dest) = map[edge.dest as usize] {
                node.set_letter(letter, Edge { dest, ..edge });
            }
        }
        for edge in &self.epsilons {
            if let Some(dest) = map[edge.dest as usize] {
                node.add_epsilon(Edge { dest, ..*edge });
            }
        }
        node
    }
}

/// An immutable automaton with a single start and a single accept state.
#[derive(Clone, Debug, PartialEq)]
pub struct Automaton {
    pub(crate) nodes: Vec<Node>,
    pub(crate) start: StateId,
    pub(crate) accept: StateId,
}

impl Automaton {
    /// Accepts exactly the empty word.
    pub fn empty() -> Self {
        Self::from_parts(vec![Node::default()], 0, 0)
    }

    /// Accepts nothing at all.
    pub fn nothing() -> Self {
        Self::from_parts(vec![Node::default(), Node::default()], 0, 1)
    }

    /// Accepts the single one-letter word `letter`.
    pub fn letter(letter: Letter) -> Self {
        Self::letters(LetterSet::from_iter([letter]))
    }

    /// Accepts every one-letter word.
    pub fn any_letter() -> Self {
        Self::letters(LetterSet::ALL)
    }

    fn letters(set: LetterSet) -> Self {
        let mut start = Node::default();
        for letter in set {
            start.set_letter(letter, Edge::new(1));
        }
        Self::from_parts(vec![start, Node::default()], 0, 1)
    }

    /// A letter (either case) or `.` for any letter.
    pub fn from_char(c: char) -> Result<Self, SpecError> {
        Self::from_char_at(c, 0)
    }

    pub(crate) fn from_char_at(c: char, pos: usize) -> Result<Self, SpecError> {
        if c == '.' {
            return Ok(Self::any_letter());
        }
        Letter::from_char(c)
            .map(Self::letter)
            .ok_or(SpecError::InvalidCharacter { ch: c, pos })
    }

    /// Compiles a regex; see [`crate::regex`] for the grammar.
    pub fn from_regex(regex: &str) -> Result<Self, SpecError> {
        crate::regex::parse(regex)
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, start: StateId, accept: StateId) -> Self {
        let automaton = Self {
            nodes,
            start,
            accept,
        };
        automaton.ensure_valid();
        automaton
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: StateId) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| node.fingerprint.len() + node.epsilons.len())
            .sum()
    }

    /// At least one node, and every state reference in range.
    pub fn check_rep(&self) -> bool {
        let n = self.nodes.len();
        let in_range = |id: StateId| (id as usize) < n;
        n > 0
            && in_range(self.start)
            && in_range(self.accept)
            && self.nodes.iter().all(|node| node.successors().all(in_range))
    }

    /// Runs `word` through the automaton by tracking the set of live states.
    ///
    /// Independent of the trie traversal; characters outside the alphabet
    /// reject the word.
    pub fn accepts(&self, word: &str) -> bool {
        let mut live = vec![false; self.nodes.len()];
        live[self.start as usize] = true;
        self.close_over_epsilons(&mut live);

        for c in word.chars() {
            let Some(letter) = Letter::from_char(c) else {
                return false;
            };
            let mut next = vec![false; self.nodes.len()];
            for (node, _) in self.nodes.iter().zip(&live).filter(|(_, on)| **on) {
                if let Some(edge) = node.letter(letter) {
                    next[edge.dest as usize] = true;
                }
            }
            self.close_over_epsilons(&mut next);
            live = next;
        }

        live[self.accept as usize]
    }

    fn close_over_epsilons(&self, live: &mut [bool]) {
        let mut stack: Vec<usize> = (0..live.len()).filter(|&id| live[id]).collect();
        while let Some(id) = stack.pop() {
            for edge in &self.nodes[id].epsilons {
                let dest = edge.dest as usize;
                if !live[dest] {
                    live[dest] = true;
                    stack.push(dest);
                }
            }
        }
    }
}

impl FromStr for Automaton {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, SpecError> {
        Self::from_regex(s)
    }
}
