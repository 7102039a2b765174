//! Helpers shared by the query commands.
//!
//! Failures print to stderr and exit: 2 for a bad regex, 1 for anything that
//! goes wrong reading or writing files.

use std::path::Path;

use wordgrep_lib::{Automaton, Dictionary, LoadError, SpecErrorPrinter};

use super::source::DictSource;

pub const EXIT_LOAD_ERROR: i32 = 1;
pub const EXIT_REGEX_ERROR: i32 = 2;

/// Compile `regex`, or render the error under the offending character and exit.
pub fn compile_or_exit(regex: &str, color: bool) -> Automaton {
    Automaton::from_regex(regex).unwrap_or_else(|e| {
        let report = SpecErrorPrinter::new(&e)
            .source(regex)
            .path("<regex>")
            .colored(color)
            .render();
        eprintln!("{}", report);
        std::process::exit(EXIT_REGEX_ERROR);
    })
}

pub fn load_or_exit(source: &DictSource) -> Dictionary {
    source
        .load()
        .unwrap_or_else(|e| exit_with_load_error(source.path(), &e))
}

pub fn exit_with_load_error(path: &Path, e: &LoadError) -> ! {
    eprintln!("error: {}: {}", path.display(), e);
    std::process::exit(EXIT_LOAD_ERROR);
}
