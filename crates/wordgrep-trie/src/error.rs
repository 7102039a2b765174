use std::io;

use crate::TrieOffset;

/// Errors from reading a serialized [`CompactTrie`](crate::CompactTrie).
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid magic: expected WGTRIE1.")]
    InvalidMagic,
    #[error("trie data truncated")]
    Truncated,
    #[error("checksum mismatch: header says {expected:#010x}, data hashes to {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("root offset {root} out of range for {len} words")]
    InvalidRoot { root: TrieOffset, len: usize },
    #[error("malformed node at offset {offset}")]
    InvalidOffset { offset: TrieOffset },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
