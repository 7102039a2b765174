use super::run_common::compile_or_exit;

pub struct DotArgs {
    pub regex: String,
    pub color: bool,
}

pub fn run(args: DotArgs) {
    let automaton = compile_or_exit(&args.regex, args.color);
    print!("{}", automaton.dot());
}
