use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;
use wordgrep_automaton::{Automaton, SpecError};
use wordgrep_core::canonical_word;
use wordgrep_trie::{BuildTrie, CompactTrie};

use crate::Traversal;

/// Position of an entry in the dictionary. 0 is the `("", 0)` sentinel;
/// real entries are numbered from 1 in spelling order.
pub type EntryId = u32;

/// A word and its frequency.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub freq: u64,
}

impl Entry {
    pub fn new(word: impl Into<String>, freq: u64) -> Self {
        Self {
            word: word.into(),
            freq,
        }
    }
}

/// A frequency-ranked word list answering regex queries.
///
/// Built once, then immutable. Queries compile the regex and walk it against
/// the packed trie; see [`Traversal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    /// Index is the [`EntryId`]; slot 0 holds the sentinel.
    entries: Vec<Entry>,
    trie: CompactTrie,
}

impl Dictionary {
    /// Builds a dictionary from raw entries.
    ///
    /// Spellings are reduced to their letters and uppercased. Entries with
    /// the same spelling are merged by summing frequencies; entries whose
    /// spelling or frequency ends up empty are dropped.
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut merged: BTreeMap<String, u64> = BTreeMap::new();
        let mut raw = 0usize;
        for entry in entries {
            raw += 1;
            let word = canonical_word(&entry.word);
            if word.is_empty() {
                continue;
            }
            let freq = merged.entry(word).or_default();
            *freq = freq.saturating_add(entry.freq);
        }
        merged.retain(|_, freq| *freq > 0);

        let mut build = BuildTrie::new();
        let mut kept = Vec::with_capacity(merged.len() + 1);
        kept.push(Entry::default());
        for (id, (word, freq)) in (1..).zip(merged) {
            build.insert(&word, id);
            kept.push(Entry { word, freq });
        }

        let dict = Self {
            trie: CompactTrie::from(&build),
            entries: kept,
        };
        info!(raw, entries = dict.len(), trie_words = dict.trie.len(), "built dictionary");
        dict
    }

    /// Reassembles a dictionary whose entries and trie were validated by the caller.
    pub(crate) fn from_parts(entries: Vec<Entry>, trie: CompactTrie) -> Self {
        Self { entries, trie }
    }

    /// Number of real entries (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Real entries in id order, which is alphabetical.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries[1..].iter()
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        match id {
            0 => None,
            id => self.entries.get(id as usize),
        }
    }

    /// Id of `word` (either case), or 0 if it is not in the dictionary.
    pub fn word_to_id(&self, word: &str) -> EntryId {
        self.trie.lookup(word)
    }

    pub fn trie(&self) -> &CompactTrie {
        &self.trie
    }

    fn freq(&self, id: EntryId) -> u64 {
        self.entries[id as usize].freq
    }

    fn traversal<'a>(&'a self, automaton: &'a Automaton) -> Traversal<'a> {
        Traversal::new(automaton, &self.trie)
    }

    fn collect(&self, ids: impl IntoIterator<Item = EntryId>) -> Vec<Entry> {
        ids.into_iter()
            .map(|id| self.entries[id as usize].clone())
            .collect()
    }

    /// Matching entries in spelling order.
    pub fn grep(&self, regex: &str) -> Result<Vec<Entry>, SpecError> {
        Ok(self.grep_automaton(&Automaton::from_regex(regex)?))
    }

    pub fn grep_automaton(&self, automaton: &Automaton) -> Vec<Entry> {
        self.collect(self.traversal(automaton).matching_ids())
    }

    /// Matching entries, most frequent first; equal frequencies in spelling order.
    pub fn grep_freq_sorted(&self, regex: &str) -> Result<Vec<Entry>, SpecError> {
        Ok(self.grep_freq_sorted_automaton(&Automaton::from_regex(regex)?))
    }

    pub fn grep_freq_sorted_automaton(&self, automaton: &Automaton) -> Vec<Entry> {
        let mut ids = self.traversal(automaton).matching_ids();
        ids.sort_by_key(|&id| (Reverse(self.freq(id)), id));
        self.collect(ids)
    }

    /// Sum of the frequencies of every match.
    pub fn total_freq(&self, regex: &str) -> Result<u64, SpecError> {
        Ok(self.total_freq_automaton(&Automaton::from_regex(regex)?))
    }

    pub fn total_freq_automaton(&self, automaton: &Automaton) -> u64 {
        self.traversal(automaton).sum(|id| self.freq(id))
    }

    /// The most frequent match, or the `("", 0)` sentinel if nothing matches.
    /// Ties go to the alphabetically first word.
    pub fn best_match(&self, regex: &str) -> Result<Entry, SpecError> {
        Ok(self.best_match_automaton(&Automaton::from_regex(regex)?))
    }

    pub fn best_match_automaton(&self, automaton: &Automaton) -> Entry {
        let best = self
            .traversal(automaton)
            .best_by_key(|id| self.freq(id))
            .unwrap_or(0);
        self.entries[best as usize].clone()
    }
}
