use std::path::PathBuf;

use wordgrep_lib::Dictionary;

use super::run_common::exit_with_load_error;

pub struct BuildArgs {
    pub wordlist: PathBuf,
    pub output: PathBuf,
}

pub fn run(args: BuildArgs) {
    let dict = Dictionary::from_wordlist(&args.wordlist)
        .unwrap_or_else(|e| exit_with_load_error(&args.wordlist, &e));
    if let Err(e) = dict.save(&args.output) {
        exit_with_load_error(&args.output, &e);
    }
    println!("{} entries written to {}", dict.len(), args.output.display());
}
