//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! This allows the same arg definition to be reused across commands with
//! different visibility settings (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Program file (positional).
pub fn program_path_arg() -> Arg {
    Arg::new("program_path")
        .value_name("PROGRAM")
        .value_parser(value_parser!(PathBuf))
        .help("Program file (use \"-\" for stdin)")
}

/// Inline program text (-s/--source).
pub fn program_text_arg() -> Arg {
    Arg::new("program_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("program_path")
        .help("Inline program text")
}

/// Read the program as S/T/L letters (--notation).
pub fn notation_arg() -> Arg {
    Arg::new("notation")
        .long("notation")
        .action(ArgAction::SetTrue)
        .help("Read the program as S/T/L letters (space, tab, line feed)")
}

/// Program input file (--input).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read program input from a file instead of stdin")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .value_parser(value_parser!(u64))
        .help("Stop after executing N instructions (default: unlimited)")
}

/// Debug trace on stderr (-d/--debug).
pub fn debug_arg() -> Arg {
    Arg::new("debug")
        .short('d')
        .long("debug")
        .action(ArgAction::SetTrue)
        .help("Print an execution trace to stderr")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// JSON listing (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output instructions as JSON")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}
