//! Plain-text word lists.
//!
//! One entry per line, either `WORD` (frequency 1) or `WORD,FREQ`. Blank
//! lines and lines starting with `#` are skipped. Words are reduced to their
//! letters and uppercased when the dictionary is built, and entries whose
//! frequency is zero or negative are dropped then.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::{Dictionary, Entry, LoadError};

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Parses one non-blank, non-comment line. `line_no` is 1-based.
pub fn parse_line(line: &str, line_no: usize) -> Result<Entry, LoadError> {
    let Some((word, freq)) = line.rsplit_once(',') else {
        return Ok(Entry::new(line.trim(), 1));
    };
    let text = freq.trim();
    let invalid = || LoadError::InvalidLine {
        line: line_no,
        text: text.to_string(),
    };
    // Non-positive frequencies become 0 and are dropped when the dictionary is built.
    let freq = text.parse::<i128>().map_err(|_| invalid())?;
    let freq = u64::try_from(freq.max(0)).map_err(|_| invalid())?;
    Ok(Entry::new(word.trim(), freq))
}

pub fn read_entries(mut reader: impl BufRead) -> Result<Vec<Entry>, LoadError> {
    let mut entries = Vec::new();
    let mut buf = String::with_capacity(80);
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.trim().is_empty() || is_comment(line) {
            continue;
        }
        entries.push(parse_line(line, line_no)?);
    }
    debug!(lines = line_no, entries = entries.len(), "read word list");
    Ok(entries)
}

pub fn parse_entries(text: &str) -> Result<Vec<Entry>, LoadError> {
    read_entries(text.as_bytes())
}

impl Dictionary {
    pub fn from_wordlist(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(Dictionary::new(read_entries(reader)?))
    }
}
