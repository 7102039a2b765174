use wordgrep_core::{ALPHABET_SIZE, Letter};

use crate::invariants::ensure_letter;

/// Index into `BuildTrie::nodes`. The root is 0 and can never be a child,
/// so 0 also marks an absent child.
type NodeIndex = u32;

#[derive(Clone, Debug, Default)]
struct BuildNode {
    data: u32,
    children: [NodeIndex; ALPHABET_SIZE],
}

/// Mutable trie used while loading a word list.
#[derive(Clone, Debug)]
pub struct BuildTrie {
    nodes: Vec<BuildNode>,
}

impl Default for BuildTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![BuildNode::default()],
        }
    }

    /// Sets the data stored at the end of `word`, creating nodes as needed.
    ///
    /// # Panics
    ///
    /// If `word` contains anything other than ASCII letters.
    pub fn insert(&mut self, word: &str, data: u32) {
        let mut node = 0usize;
        for c in word.chars() {
            let letter = ensure_letter(c, word);
            let child = self.nodes[node].children[letter.index()];
            node = if child == 0 {
                let index = self.nodes.len();
                self.nodes[node].children[letter.index()] = index as NodeIndex;
                self.nodes.push(BuildNode::default());
                index
            } else {
                child as usize
            };
        }
        self.nodes[node].data = data;
    }

    /// Data stored for `word`, or 0 if absent.
    pub fn lookup(&self, word: &str) -> u32 {
        let mut node = 0usize;
        for c in word.chars() {
            let Some(letter) = Letter::from_char(c) else {
                return 0;
            };
            match self.nodes[node].children[letter.index()] {
                0 => return 0,
                child => node = child as usize,
            }
        }
        self.nodes[node].data
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn root(&self) -> usize {
        0
    }

    pub(crate) fn data(&self, node: usize) -> u32 {
        self.nodes[node].data
    }

    /// Present children of `node` in letter order, starting at letter index `from`.
    pub(crate) fn children_from(
        &self,
        node: usize,
        from: usize,
    ) -> impl Iterator<Item = (Letter, usize)> + '_ {
        Letter::all()
            .skip(from)
            .filter_map(move |letter| match self.nodes[node].children[letter.index()] {
                0 => None,
                child => Some((letter, child as usize)),
            })
    }
}
