//! The 26-letter alphabet.
//!
//! Letters are case-insensitive: `a` and `A` are the same [`Letter`]. Sets of
//! letters pack into the low 26 bits of a `u32`, bit `i` standing for the
//! `i`-th letter, which lets automaton and trie fingerprints be intersected
//! with a single `&`.

use std::fmt;
use std::ops::{BitAnd, BitOr};

pub const ALPHABET_SIZE: usize = 26;

/// A letter `A`..=`Z`, stored as its alphabet index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_SIZE).then_some(Self(index as u8))
    }

    /// Case-folds ASCII letters; anything else is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A'..='Z' => Some(Self(c as u8 - b'A')),
            'a'..='z' => Some(Self(c as u8 - b'a')),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }

    fn bit(self) -> u32 {
        1 << self.0
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A set of letters.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);
    pub const ALL: LetterSet = LetterSet((1 << ALPHABET_SIZE) - 1);

    /// Returns `None` if any bit above the alphabet is set.
    pub fn from_bits(bits: u32) -> Option<Self> {
        (bits & !Self::ALL.0 == 0).then_some(Self(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    pub fn insert(&mut self, letter: Letter) {
        self.0 |= letter.bit();
    }

    pub fn remove(&mut self, letter: Letter) {
        self.0 &= !letter.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Number of members strictly below `letter`.
    ///
    /// This is the slot of `letter` among the children of a packed trie node.
    pub fn rank(self, letter: Letter) -> usize {
        (self.0 & (letter.bit() - 1)).count_ones() as usize
    }

    pub fn iter(self) -> LetterSetIter {
        LetterSetIter(self.0)
    }
}

impl BitAnd for LetterSet {
    type Output = LetterSet;

    fn bitand(self, rhs: LetterSet) -> LetterSet {
        LetterSet(self.0 & rhs.0)
    }
}

impl BitOr for LetterSet {
    type Output = LetterSet;

    fn bitor(self, rhs: LetterSet) -> LetterSet {
        LetterSet(self.0 | rhs.0)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl IntoIterator for LetterSet {
    type Item = Letter;
    type IntoIter = LetterSetIter;

    fn into_iter(self) -> LetterSetIter {
        self.iter()
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        f.write_str("}")
    }
}

/// Members of a [`LetterSet`] in alphabet order.
#[derive(Clone, Debug)]
pub struct LetterSetIter(u32);

impl Iterator for LetterSetIter {
    type Item = Letter;

    fn next(&mut self) -> Option<Letter> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(Letter(index as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LetterSetIter {}

/// Uppercases the ASCII letters of `text` and drops every other character.
pub fn canonical_word(text: &str) -> String {
    text.chars()
        .filter_map(Letter::from_char)
        .map(Letter::to_char)
        .collect()
}
