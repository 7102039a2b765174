use std::fs;
use std::path::PathBuf;

use wordgrep_lib::{Dictionary, Entry, LoadError};

use super::build::{self, BuildArgs};
use super::logging::default_filter;
use super::source::DictSource;

const WORDS: &str = "hello,24\nhelp,16\nworld,111\n";

#[test]
fn loads_each_source_kind() {
    let dir = tempfile::tempdir().unwrap();
    let wordlist = dir.path().join("words.txt");
    let dict_path = dir.path().join("words.wgd");
    let cache = dir.path().join("cache.wgd");
    fs::write(&wordlist, WORDS).unwrap();

    build::run(BuildArgs {
        wordlist: wordlist.clone(),
        output: dict_path.clone(),
    });

    let from_dict = DictSource::Dict(dict_path).load().unwrap();
    let from_list = DictSource::Wordlist {
        path: wordlist.clone(),
        cache: None,
    }
    .load()
    .unwrap();
    let from_cache = DictSource::Wordlist {
        path: wordlist,
        cache: Some(cache.clone()),
    }
    .load()
    .unwrap();

    assert_eq!(from_dict, from_list);
    assert_eq!(from_cache, from_list);
    assert!(cache.exists());
    assert_eq!(from_dict.best_match("h.*").unwrap(), Entry::new("HELLO", 24));
}

#[test]
fn missing_dictionary_is_a_load_error() {
    let source = DictSource::Dict(PathBuf::from("/nonexistent/words.wgd"));

    assert!(matches!(source.load(), Err(LoadError::Io(_))));
    assert_eq!(source.path(), PathBuf::from("/nonexistent/words.wgd"));
}

#[test]
fn wordlist_path_is_reported() {
    let source = DictSource::Wordlist {
        path: PathBuf::from("list.txt"),
        cache: Some(PathBuf::from("list.wgd")),
    };

    assert_eq!(source.path(), PathBuf::from("list.txt"));
}

#[test]
fn verbosity_raises_default_filter() {
    assert_eq!(default_filter(0), "warn");
    assert_eq!(default_filter(1), "debug");
    assert_eq!(default_filter(5), "trace");
}

#[test]
fn built_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let wordlist = dir.path().join("words.txt");
    let output = dir.path().join("words.wgd");
    fs::write(&wordlist, WORDS).unwrap();

    build::run(BuildArgs {
        wordlist: wordlist.clone(),
        output: output.clone(),
    });

    assert_eq!(
        Dictionary::load(&output).unwrap(),
        Dictionary::from_wordlist(&wordlist).unwrap()
    );
}
