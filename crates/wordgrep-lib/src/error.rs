use std::io;

use wordgrep_trie::FormatError;

/// Errors from loading a dictionary file or a word list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid trie block: {0}")]
    Format(#[from] FormatError),
    #[error("invalid magic: expected WGDICT1.")]
    InvalidMagic,
    #[error("dictionary data truncated")]
    Truncated,
    #[error("entry {index} is not valid UTF-8")]
    InvalidUtf8 { index: usize },
    #[error("entry {index} is not an uppercase word: {word:?}")]
    InvalidWord { index: usize, word: String },
    #[error("trie does not match the entry table: {reason}")]
    IdMismatch { reason: String },
    #[error("line {line}: invalid frequency {text:?}")]
    InvalidLine { line: usize, text: String },
}
