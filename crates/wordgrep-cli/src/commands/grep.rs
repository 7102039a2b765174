use wordgrep_lib::Entry;

use super::run_common::{compile_or_exit, load_or_exit};
use super::source::DictSource;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Spelling order.
    #[default]
    Alpha,
    /// Most frequent first, ties in spelling order.
    Freq,
}

pub struct GrepArgs {
    pub regex: String,
    pub source: DictSource,
    pub sort: SortOrder,
    pub limit: Option<usize>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: GrepArgs) {
    let automaton = compile_or_exit(&args.regex, args.color);
    let dict = load_or_exit(&args.source);

    let mut entries = match args.sort {
        SortOrder::Alpha => dict.grep_automaton(&automaton),
        SortOrder::Freq => dict.grep_freq_sorted_automaton(&automaton),
    };
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    print!("{}", render(&entries, args.json));
}

/// One `WORD FREQ` line per entry, or a pretty JSON array.
pub fn render(entries: &[Entry], json: bool) -> String {
    if json {
        let mut out = serde_json::to_string_pretty(entries).expect("entries always serialize");
        out.push('\n');
        return out;
    }
    entries
        .iter()
        .map(|e| format!("{} {}\n", e.word, e.freq))
        .collect()
}
