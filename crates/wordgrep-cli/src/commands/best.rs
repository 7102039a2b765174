use wordgrep_lib::Entry;

use super::run_common::{compile_or_exit, load_or_exit};
use super::source::DictSource;

pub struct BestArgs {
    pub regex: String,
    pub source: DictSource,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: BestArgs) {
    let automaton = compile_or_exit(&args.regex, args.color);
    let dict = load_or_exit(&args.source);
    print!("{}", render(&dict.best_match_automaton(&automaton), args.json));
}

/// Prints nothing (or `null`) when only the empty sentinel came back.
pub fn render(best: &Entry, json: bool) -> String {
    let found = (best.freq > 0).then_some(best);
    match (found, json) {
        (found, true) => {
            format!("{}\n", serde_json::to_string(&found).expect("entries always serialize"))
        }
        (Some(e), false) => format!("{} {}\n", e.word, e.freq),
        (None, false) => String::new(),
    }
}
