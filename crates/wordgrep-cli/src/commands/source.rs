use std::path::{Path, PathBuf};

use wordgrep_lib::{Dictionary, LoadError};

/// Where a query command gets its dictionary from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DictSource {
    /// A file written by `wordgrep build`.
    Dict(PathBuf),
    /// A plain word list, optionally cached as a dictionary file.
    Wordlist { path: PathBuf, cache: Option<PathBuf> },
}

impl DictSource {
    /// The file named on the command line, for error messages.
    pub fn path(&self) -> &Path {
        match self {
            DictSource::Dict(path) | DictSource::Wordlist { path, .. } => path,
        }
    }

    pub fn load(&self) -> Result<Dictionary, LoadError> {
        match self {
            DictSource::Dict(path) => Dictionary::load(path),
            DictSource::Wordlist { path, cache: None } => Dictionary::from_wordlist(path),
            DictSource::Wordlist {
                path,
                cache: Some(cache),
            } => Dictionary::load_or_build(path, cache),
        }
    }
}
