mod cli;
mod commands;

use tracing::debug;

use cli::{BestParams, BuildParams, DotParams, GrepParams, TotalParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    commands::logging::init(m.get_count("verbose"));
    debug!(command = name, "running");

    match name {
        "build" => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into());
        }
        "grep" => {
            let params = GrepParams::from_matches(m);
            commands::grep::run(params.into());
        }
        "best" => {
            let params = BestParams::from_matches(m);
            commands::best::run(params.into());
        }
        "total" => {
            let params = TotalParams::from_matches(m);
            commands::total::run(params.into());
        }
        "dot" => {
            let params = DotParams::from_matches(m);
            commands::dot::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
