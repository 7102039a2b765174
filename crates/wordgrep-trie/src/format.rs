//! Binary trie format.
//!
//! ```text
//! 0..8    magic b"WGTRIE1."
//! 8..12   word count (u32 LE)
//! 12..16  root offset (u32 LE)
//! 16..20  CRC32 of the array bytes (u32 LE)
//! 20..    array, word count × u32 LE
//! ```
//!
//! Readers consume exactly the header plus the array, so a trie block can be
//! embedded in a larger stream.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use wordgrep_core::LetterSet;

use crate::{CompactTrie, FormatError, TrieOffset};

pub const MAGIC: [u8; 8] = *b"WGTRIE1.";
pub const HEADER_SIZE: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 8],
    /// Array length in `u32` words.
    pub len: u32,
    pub root: u32,
    pub checksum: u32,
}

impl Header {
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let mut magic = [0u8; 8];
        magic.copy_from_slice(&bytes[0..8]);

        Self {
            magic,
            len: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            root: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
            checksum: u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..8].copy_from_slice(&self.magic);
        bytes[8..12].copy_from_slice(&self.len.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.root.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.checksum.to_le_bytes());
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }
}

fn array_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// `read_exact` that reports a short read as [`FormatError::Truncated`].
pub(crate) fn read_exact(r: &mut impl Read, buf: &mut [u8]) -> Result<(), FormatError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => FormatError::Truncated,
        _ => FormatError::Io(e),
    })
}

impl CompactTrie {
    pub fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        let body = array_bytes(self.words());
        let header = Header {
            magic: MAGIC,
            len: self.len() as u32,
            root: self.root(),
            checksum: crc32fast::hash(&body),
        };
        w.write_all(&header.to_bytes())?;
        w.write_all(&body)
    }

    pub fn read_from(r: &mut impl Read) -> Result<Self, FormatError> {
        let mut head = [0u8; HEADER_SIZE];
        read_exact(r, &mut head)?;
        let header = Header::from_bytes(&head);
        if !header.validate_magic() {
            return Err(FormatError::InvalidMagic);
        }

        let expected = header.len as usize * 4;
        let mut body = Vec::new();
        r.by_ref().take(expected as u64).read_to_end(&mut body)?;
        if body.len() != expected {
            return Err(FormatError::Truncated);
        }

        let actual = crc32fast::hash(&body);
        if actual != header.checksum {
            return Err(FormatError::ChecksumMismatch {
                expected: header.checksum,
                actual,
            });
        }

        let words: Vec<u32> = body
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        validate(&words, header.root)?;
        Ok(CompactTrie::from_raw(words, header.root))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + 4 * self.len());
        self.write_to(&mut out).expect("Vec write never fails");
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        Self::read_from(&mut &bytes[..])
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FormatError> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write_to(&mut w)?;
        w.flush()?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        Self::read_from(&mut BufReader::new(File::open(path)?))
    }
}

/// Walks every node reachable from `root`, checking that it fits in the
/// array, that its fingerprint only uses alphabet bits, and that each child
/// offset points strictly below its parent.
fn validate(words: &[u32], root: TrieOffset) -> Result<(), FormatError> {
    if root as usize + 2 > words.len() {
        return Err(FormatError::InvalidRoot {
            root,
            len: words.len(),
        });
    }

    let mut seen = vec![false; words.len()];
    let mut stack = vec![root];
    while let Some(offset) = stack.pop() {
        let at = offset as usize;
        if seen[at] {
            continue;
        }
        seen[at] = true;

        let fingerprint =
            LetterSet::from_bits(words[at]).ok_or(FormatError::InvalidOffset { offset })?;
        let first = at + 2;
        let Some(children) = words.get(first..first + fingerprint.len()) else {
            return Err(FormatError::InvalidOffset { offset });
        };
        for &child in children {
            if child >= offset || child as usize + 2 > words.len() {
                return Err(FormatError::InvalidOffset { offset });
            }
            stack.push(child);
        }
    }
    Ok(())
}
