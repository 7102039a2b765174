use serde::Serialize;

use super::run_common::{compile_or_exit, load_or_exit};
use super::source::DictSource;

pub struct TotalArgs {
    pub regex: String,
    pub source: DictSource,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct TotalReport<'a> {
    regex: &'a str,
    total: u64,
}

pub fn run(args: TotalArgs) {
    let automaton = compile_or_exit(&args.regex, args.color);
    let dict = load_or_exit(&args.source);
    print!("{}", render(&args.regex, dict.total_freq_automaton(&automaton), args.json));
}

pub fn render(regex: &str, total: u64, json: bool) -> String {
    if !json {
        return format!("{total}\n");
    }
    let report = TotalReport { regex, total };
    format!("{}\n", serde_json::to_string(&report).expect("report always serializes"))
}
