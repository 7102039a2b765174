//! Command builders for the CLI.
//!
//! Query commands (`grep`, `best`, `total`) share the dictionary-source
//! flags; `--color` and `-v` are global.

use clap::Command;

use super::args::*;

/// Add the `--dict` / `--wordlist [--cache]` source flags.
fn with_source_args(cmd: Command) -> Command {
    cmd.arg(dict_arg())
        .arg(wordlist_arg())
        .arg(cache_arg())
        .group(source_group())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("wordgrep")
        .about("Regex queries over frequency-ranked word lists")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .arg(color_arg())
        .subcommand(build_command())
        .subcommand(grep_command())
        .subcommand(best_command())
        .subcommand(total_command())
        .subcommand(dot_command())
}

/// Build a dictionary file from a word list.
pub fn build_command() -> Command {
    Command::new("build")
        .about("Build a dictionary file from a word list")
        .after_help(
            r#"EXAMPLES:
  wordgrep build words.txt -o words.wgd"#,
        )
        .arg(wordlist_path_arg())
        .arg(output_file_arg())
}

/// List matching words.
pub fn grep_command() -> Command {
    let cmd = Command::new("grep")
        .about("List the words matching a regex")
        .after_help(
            r#"EXAMPLES:
  wordgrep grep '(f|h)el(i|t|l).*' -d words.wgd
  wordgrep grep 'h.*o' -w words.txt --sort freq -n 10
  wordgrep grep 'hel#lo' -w words.txt --cache words.wgd --json"#,
        )
        .arg(regex_arg())
        .arg(sort_arg())
        .arg(limit_arg())
        .arg(json_arg());
    with_source_args(cmd)
}

/// Print the most frequent match.
pub fn best_command() -> Command {
    let cmd = Command::new("best")
        .about("Print the most frequent word matching a regex")
        .after_help(
            r#"EXAMPLES:
  wordgrep best 'h.*' -d words.wgd"#,
        )
        .arg(regex_arg())
        .arg(json_arg());
    with_source_args(cmd)
}

/// Print the summed frequency of all matches.
pub fn total_command() -> Command {
    let cmd = Command::new("total")
        .about("Print the total frequency of the words matching a regex")
        .after_help(
            r#"EXAMPLES:
  wordgrep total '.....' -d words.wgd"#,
        )
        .arg(regex_arg())
        .arg(json_arg());
    with_source_args(cmd)
}

/// Print the compiled automaton as Graphviz.
pub fn dot_command() -> Command {
    Command::new("dot")
        .about("Print the automaton for a regex in Graphviz DOT format")
        .after_help(
            r#"EXAMPLES:
  wordgrep dot 'ab*' | dot -Tsvg > ab.svg"#,
        )
        .arg(regex_arg())
}
