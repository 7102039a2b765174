//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so query commands can share the same
//! dictionary-source and output flags.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgGroup, value_parser};

/// Regex to evaluate (positional).
pub fn regex_arg() -> Arg {
    Arg::new("regex")
        .value_name("REGEX")
        .required(true)
        .help("Regex over letters: . * + ? | # & and parentheses")
}

/// Plain-text word list to build from (positional).
pub fn wordlist_path_arg() -> Arg {
    Arg::new("wordlist_path")
        .value_name("WORDLIST")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Word list, one WORD or WORD,FREQ per line")
}

/// Dictionary file to write (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DICT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Write the dictionary to this file")
}

/// Prebuilt dictionary (-d/--dict).
pub fn dict_arg() -> Arg {
    Arg::new("dict")
        .short('d')
        .long("dict")
        .value_name("DICT")
        .value_parser(value_parser!(PathBuf))
        .help("Dictionary file written by `wordgrep build`")
}

/// Word list to query directly (-w/--wordlist).
pub fn wordlist_arg() -> Arg {
    Arg::new("wordlist")
        .short('w')
        .long("wordlist")
        .value_name("WORDLIST")
        .value_parser(value_parser!(PathBuf))
        .help("Word list to build the dictionary from on the fly")
}

/// Dictionary cache for --wordlist (--cache).
pub fn cache_arg() -> Arg {
    Arg::new("cache")
        .long("cache")
        .value_name("DICT")
        .requires("wordlist")
        .value_parser(value_parser!(PathBuf))
        .help("Reuse this dictionary file, rebuilding it from --wordlist when missing or stale")
}

/// Exactly one of --dict / --wordlist.
pub fn source_group() -> ArgGroup {
    ArgGroup::new("source")
        .args(["dict", "wordlist"])
        .required(true)
        .multiple(false)
}

/// Result order (--sort).
pub fn sort_arg() -> Arg {
    Arg::new("sort")
        .long("sort")
        .value_name("ORDER")
        .default_value("alpha")
        .value_parser(["alpha", "freq"])
        .help("Order matches alphabetically or by descending frequency")
}

/// Maximum number of matches to print (--limit).
pub fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .short('n')
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Print at most N matches")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print results as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .global(true)
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log progress to stderr (-v for debug, -vv for trace); RUST_LOG overrides")
}
