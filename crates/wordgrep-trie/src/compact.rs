//! The packed, read-only trie.
//!
//! Node layout inside `words`, at offset `p`:
//!
//! ```text
//! p + 0        child fingerprint (bit i set iff letter i has a child)
//! p + 1        data (0 = no word ends here)
//! p + 2 ..     one offset per child, in letter order
//! ```
//!
//! Nodes are laid out in post-order, so every child offset is smaller than
//! its parent's and the root comes last. A trie with `n` nodes takes
//! `3n - 1` words: two per node plus one per parent-child link.

use tracing::debug;
use wordgrep_core::{Letter, LetterSet};

use crate::BuildTrie;

/// Offset of a node's first word inside [`CompactTrie::words`].
pub type TrieOffset = u32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactTrie {
    words: Vec<u32>,
    root: TrieOffset,
}

impl From<&BuildTrie> for CompactTrie {
    fn from(trie: &BuildTrie) -> Self {
        let mut words = Vec::with_capacity(3 * trie.node_count() - 1);
        let root = flatten(trie, trie.root(), &mut words);
        debug!(nodes = trie.node_count(), words = words.len(), "compacted trie");
        Self { words, root }
    }
}

/// A node whose children are still being written.
struct Pending {
    node: usize,
    /// Letter index to resume the child scan from.
    next: usize,
    fingerprint: LetterSet,
    children: Vec<TrieOffset>,
}

impl Pending {
    fn new(node: usize) -> Self {
        Self {
            node,
            next: 0,
            fingerprint: LetterSet::EMPTY,
            children: Vec::new(),
        }
    }
}

/// Writes the subtree at `root` post-order, returning the root's offset.
///
/// Uses an explicit stack: words can be far longer than the call stack is deep.
fn flatten(trie: &BuildTrie, root: usize, words: &mut Vec<u32>) -> TrieOffset {
    let mut stack = vec![Pending::new(root)];
    loop {
        let top = stack.last_mut().expect("stack holds the root until it is written");
        if let Some((letter, child)) = trie.children_from(top.node, top.next).next() {
            top.next = letter.index() + 1;
            top.fingerprint.insert(letter);
            stack.push(Pending::new(child));
            continue;
        }

        let done = stack.pop().expect("stack holds the root until it is written");
        let offset = words.len() as TrieOffset;
        words.push(done.fingerprint.bits());
        words.push(trie.data(done.node));
        words.extend(done.children);

        match stack.last_mut() {
            Some(parent) => parent.children.push(offset),
            None => return offset,
        }
    }
}

impl CompactTrie {
    /// Wraps an array read from storage. Callers validate it first.
    pub(crate) fn from_raw(words: Vec<u32>, root: TrieOffset) -> Self {
        Self { words, root }
    }

    pub fn root(&self) -> TrieOffset {
        self.root
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Length of the packed array in `u32` words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn fingerprint(&self, node: TrieOffset) -> LetterSet {
        LetterSet::from_bits(self.words[node as usize]).unwrap_or(LetterSet::EMPTY)
    }

    pub fn data(&self, node: TrieOffset) -> u32 {
        self.words[node as usize + 1]
    }

    pub fn child(&self, node: TrieOffset, letter: Letter) -> Option<TrieOffset> {
        let fingerprint = self.fingerprint(node);
        fingerprint
            .contains(letter)
            .then(|| self.words[node as usize + 2 + fingerprint.rank(letter)])
    }

    /// Children of `node` in letter order.
    pub fn children(&self, node: TrieOffset) -> impl Iterator<Item = (Letter, TrieOffset)> + '_ {
        let first = node as usize + 2;
        self.fingerprint(node)
            .iter()
            .zip(&self.words[first..])
            .map(|(letter, &child)| (letter, child))
    }

    /// Data stored for `word`, or 0 if absent.
    pub fn lookup(&self, word: &str) -> u32 {
        let mut node = self.root;
        for c in word.chars() {
            let Some(child) = Letter::from_char(c).and_then(|l| self.child(node, l)) else {
                return 0;
            };
            node = child;
        }
        self.data(node)
    }

    /// Every stored word with its data, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (String, u32)> + '_ {
        // (prefix length before this node's letter, letter, node)
        let mut stack: Vec<(usize, Option<Letter>, TrieOffset)> = vec![(0, None, self.root)];
        let mut word = String::new();
        std::iter::from_fn(move || {
            while let Some((depth, letter, node)) = stack.pop() {
                word.truncate(depth);
                word.extend(letter.map(Letter::to_char));

                let first = stack.len();
                let len = word.len();
                stack.extend(self.children(node).map(|(l, child)| (len, Some(l), child)));
                stack[first..].reverse();

                let data = self.data(node);
                if data != 0 {
                    return Some((word.clone(), data));
                }
            }
            None
        })
    }
}
