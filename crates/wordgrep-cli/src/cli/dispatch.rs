//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `from_matches()` pulls the fields each command uses
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::best::BestArgs;
use crate::commands::build::BuildArgs;
use crate::commands::dot::DotArgs;
use crate::commands::grep::{GrepArgs, SortOrder};
use crate::commands::source::DictSource;
use crate::commands::total::TotalArgs;

pub struct BuildParams {
    pub wordlist: PathBuf,
    pub output: PathBuf,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            wordlist: required_path(m, "wordlist_path"),
            output: required_path(m, "output"),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            wordlist: p.wordlist,
            output: p.output,
        }
    }
}

pub struct GrepParams {
    pub regex: String,
    pub source: DictSource,
    pub sort: SortOrder,
    pub limit: Option<usize>,
    pub json: bool,
    pub color: ColorChoice,
}

impl GrepParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let sort = match m.get_one::<String>("sort").map(String::as_str) {
            Some("freq") => SortOrder::Freq,
            _ => SortOrder::Alpha,
        };
        Self {
            regex: parse_regex(m),
            source: parse_source(m),
            sort,
            limit: m.get_one::<usize>("limit").copied(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<GrepParams> for GrepArgs {
    fn from(p: GrepParams) -> Self {
        Self {
            regex: p.regex,
            source: p.source,
            sort: p.sort,
            limit: p.limit,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct BestParams {
    pub regex: String,
    pub source: DictSource,
    pub json: bool,
    pub color: ColorChoice,
}

impl BestParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            regex: parse_regex(m),
            source: parse_source(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<BestParams> for BestArgs {
    fn from(p: BestParams) -> Self {
        Self {
            regex: p.regex,
            source: p.source,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TotalParams {
    pub regex: String,
    pub source: DictSource,
    pub json: bool,
    pub color: ColorChoice,
}

impl TotalParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            regex: parse_regex(m),
            source: parse_source(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TotalParams> for TotalArgs {
    fn from(p: TotalParams) -> Self {
        Self {
            regex: p.regex,
            source: p.source,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DotParams {
    pub regex: String,
    pub color: ColorChoice,
}

impl DotParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            regex: parse_regex(m),
            color: parse_color(m),
        }
    }
}

impl From<DotParams> for DotArgs {
    fn from(p: DotParams) -> Self {
        Self {
            regex: p.regex,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_regex(m: &ArgMatches) -> String {
    m.get_one::<String>("regex")
        .cloned()
        .expect("regex is a required argument")
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id)
        .cloned()
        .unwrap_or_else(|| panic!("{id} is a required argument"))
}

/// `--dict` wins; otherwise clap guarantees `--wordlist`.
fn parse_source(m: &ArgMatches) -> DictSource {
    if let Some(path) = m.get_one::<PathBuf>("dict") {
        return DictSource::Dict(path.clone());
    }
    DictSource::Wordlist {
        path: required_path(m, "wordlist"),
        cache: m.get_one::<PathBuf>("cache").cloned(),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
