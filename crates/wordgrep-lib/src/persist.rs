//! Dictionary file format.
//!
//! ```text
//! 0..8    magic b"WGDICT1."
//! 8..12   entry count n (u32 LE)
//! then n entries, in id order starting at 1:
//!         word length (u32 LE), word bytes (uppercase ASCII), frequency (u64 LE)
//! then the trie block (see wordgrep_trie::format)
//! ```
//!
//! The sentinel entry 0 is not stored.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{info, warn};
use wordgrep_trie::CompactTrie;

use crate::{Dictionary, Entry, LoadError};

pub const MAGIC: [u8; 8] = *b"WGDICT1.";

fn read_exact(r: &mut impl Read, buf: &mut [u8]) -> Result<(), LoadError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => LoadError::Truncated,
        _ => LoadError::Io(e),
    })
}

fn read_u32(r: &mut impl Read) -> Result<u32, LoadError> {
    let mut buf = [0u8; 4];
    read_exact(r, &mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64(r: &mut impl Read) -> Result<u64, LoadError> {
    let mut buf = [0u8; 8];
    read_exact(r, &mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_entry(r: &mut impl Read, index: usize) -> Result<Entry, LoadError> {
    let len = read_u32(r)? as usize;
    if len == 0 {
        return Err(LoadError::InvalidWord {
            index,
            word: String::new(),
        });
    }
    // Grows with the bytes actually present, so a corrupt length cannot
    // force a huge allocation.
    let mut bytes = Vec::new();
    r.by_ref().take(len as u64).read_to_end(&mut bytes)?;
    if bytes.len() != len {
        return Err(LoadError::Truncated);
    }
    let word = String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 { index })?;
    if !word.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(LoadError::InvalidWord { index, word });
    }
    let freq = read_u64(r)?;
    Ok(Entry { word, freq })
}

/// Every trie word must carry its own entry id, and every entry must be in
/// the trie.
fn check_ids(entries: &[Entry], trie: &CompactTrie) -> Result<(), LoadError> {
    let mut found = 0usize;
    for (word, id) in trie.iter() {
        let matches = entries
            .get(id as usize)
            .is_some_and(|entry| id != 0 && entry.word == word);
        if !matches {
            return Err(LoadError::IdMismatch {
                reason: format!("trie maps {word:?} to id {id}"),
            });
        }
        found += 1;
    }
    if found != entries.len() - 1 {
        return Err(LoadError::IdMismatch {
            reason: format!("{} entries but {found} trie words", entries.len() - 1),
        });
    }
    Ok(())
}

impl Dictionary {
    pub fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&(self.len() as u32).to_le_bytes())?;
        for entry in self.iter() {
            w.write_all(&(entry.word.len() as u32).to_le_bytes())?;
            w.write_all(entry.word.as_bytes())?;
            w.write_all(&entry.freq.to_le_bytes())?;
        }
        self.trie().write_to(w)
    }

    pub fn read_from(r: &mut impl Read) -> Result<Self, LoadError> {
        let mut magic = [0u8; 8];
        read_exact(r, &mut magic)?;
        if magic != MAGIC {
            return Err(LoadError::InvalidMagic);
        }

        let count = read_u32(r)? as usize;
        let mut entries = vec![Entry::default()];
        for index in 1..=count {
            entries.push(read_entry(r, index)?);
        }

        let trie = CompactTrie::read_from(r)?;
        check_ids(&entries, &trie)?;
        Ok(Dictionary::from_parts(entries, trie))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let mut w = BufWriter::new(File::create(path)?);
        self.write_to(&mut w)?;
        w.flush()?;
        info!(path = %path.display(), entries = self.len(), "saved dictionary");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let dict = Self::read_from(&mut BufReader::new(File::open(path)?))?;
        info!(path = %path.display(), entries = dict.len(), "loaded dictionary");
        Ok(dict)
    }

    /// Loads `cache` if it holds a valid dictionary; otherwise builds one from
    /// the word list at `wordlist` and writes it to `cache`.
    pub fn load_or_build(
        wordlist: impl AsRef<Path>,
        cache: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let cache = cache.as_ref();
        if cache.exists() {
            match Self::load(cache) {
                Ok(dict) => return Ok(dict),
                Err(e) => warn!(path = %cache.display(), error = %e, "ignoring unreadable cache"),
            }
        }

        let dict = Self::from_wordlist(wordlist)?;
        dict.save(cache)?;
        Ok(dict)
    }
}
