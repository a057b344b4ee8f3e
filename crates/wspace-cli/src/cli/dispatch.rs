//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use wspace_bytecode::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::program_loader::ProgramInput;
use crate::commands::trace::TraceArgs;

pub struct ExecParams {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub notation: bool,
    pub input: Option<PathBuf>,
    pub fuel: Option<u64>,
    pub debug: bool,
    pub color: ColorChoice,
    // Note: verbose, json, compact are parsed but not extracted (unified flags)
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: m.get_one::<PathBuf>("program_path").cloned(),
            program_text: m.get_one::<String>("program_text").cloned(),
            notation: m.get_flag("notation"),
            input: m.get_one::<PathBuf>("input").cloned(),
            fuel: m.get_one::<u64>("fuel").copied(),
            debug: m.get_flag("debug"),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            program: ProgramInput {
                path: p.program_path,
                text: p.program_text,
                notation: p.notation,
            },
            input: p.input,
            fuel: p.fuel,
            debug: p.debug,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub notation: bool,
    pub input: Option<PathBuf>,
    pub fuel: Option<u64>,
    pub verbose: u8,
    pub color: ColorChoice,
    // Note: debug, json, compact are parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: m.get_one::<PathBuf>("program_path").cloned(),
            program_text: m.get_one::<String>("program_text").cloned(),
            notation: m.get_flag("notation"),
            input: m.get_one::<PathBuf>("input").cloned(),
            fuel: m.get_one::<u64>("fuel").copied(),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            program: ProgramInput {
                path: p.program_path,
                text: p.program_text,
                notation: p.notation,
            },
            input: p.input,
            fuel: p.fuel,
            verbosity: verbosity_from_count(p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub notation: bool,
    pub json: bool,
    pub compact: bool,
    pub color: ColorChoice,
    // Note: input, fuel, verbose, debug are parsed but not extracted (unified flags)
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: m.get_one::<PathBuf>("program_path").cloned(),
            program_text: m.get_one::<String>("program_text").cloned(),
            notation: m.get_flag("notation"),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            program: ProgramInput {
                path: p.program_path,
                text: p.program_text,
                notation: p.notation,
            },
            json: p.json,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub program_path: Option<PathBuf>,
    pub program_text: Option<String>,
    pub notation: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: m.get_one::<PathBuf>("program_path").cloned(),
            program_text: m.get_one::<String>("program_text").cloned(),
            notation: m.get_flag("notation"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            program: ProgramInput {
                path: p.program_path,
                text: p.program_text,
                notation: p.notation,
            },
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Map a `-v` count onto a trace verbosity level.
pub(super) fn verbosity_from_count(count: u8) -> Verbosity {
    match count {
        0 => Verbosity::Default,
        1 => Verbosity::Verbose,
        _ => Verbosity::VeryVerbose,
    }
}
