//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! All commands accept every flag so that switching between `exec`, `trace`
//! and `dump` only means changing the subcommand; flags a command does not
//! use are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Program input args shared by every command.
fn with_program_args(cmd: Command) -> Command {
    cmd.arg(program_path_arg())
        .arg(program_text_arg())
        .arg(notation_arg())
}

/// Add hidden run args (for commands that don't execute).
fn with_hidden_run_args(cmd: Command) -> Command {
    cmd.arg(input_arg().hide(true)).arg(fuel_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true)).arg(debug_arg().hide(true))
}

/// Add hidden dump output args (for commands that don't list instructions).
fn with_hidden_dump_args(cmd: Command) -> Command {
    cmd.arg(json_arg().hide(true)).arg(compact_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("wspace")
        .about("Interpreter for the Whitespace programming language")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(exec_command())
        .subcommand(trace_command())
        .subcommand(dump_command())
        .subcommand(check_command())
}

/// Run a program.
///
/// Accepts dump and trace-level flags for a unified CLI experience, but ignores them.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Run a program")
        .override_usage(
            "\
  wspace exec <PROGRAM>
  wspace exec <PROGRAM> --input <FILE>
  wspace exec -s <TEXT> --notation",
        )
        .after_help(
            r#"EXAMPLES:
  wspace exec hello.ws                   # run a program file
  wspace exec hello.ws --input data.txt  # program input from a file
  cat hello.ws | wspace exec -           # program from stdin
  wspace exec -s 'SSSTL TLST LLL' --notation  # inline letter notation
  wspace exec loop.ws --fuel 10000 -d    # bounded run with a trace"#,
        )
        .arg(input_arg())
        .arg(fuel_arg())
        .arg(debug_arg())
        .arg(color_arg())
        .arg(verbose_arg().hide(true));

    with_hidden_dump_args(with_program_args(cmd))
}

/// Run a program with an execution trace on stderr.
///
/// Accepts dump flags and `-d` for a unified CLI experience, but ignores them.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Run a program and trace execution to stderr")
        .override_usage(
            "\
  wspace trace <PROGRAM> [-v|-vv]
  wspace trace -s <TEXT> --notation",
        )
        .after_help(
            r#"EXAMPLES:
  wspace trace hello.ws                  # instructions, calls and returns
  wspace trace hello.ws -v               # plus labels and taken jumps
  wspace trace hello.ws -vv              # plus decoding and stack snapshots"#,
        )
        .arg(input_arg())
        .arg(fuel_arg())
        .arg(verbose_arg())
        .arg(color_arg())
        .arg(debug_arg().hide(true));

    with_hidden_dump_args(with_program_args(cmd))
}

/// Show the tokenized instruction listing.
///
/// Accepts run and trace flags for a unified CLI experience, but ignores them.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the decoded instruction listing")
        .override_usage(
            "\
  wspace dump <PROGRAM>
  wspace dump <PROGRAM> --json",
        )
        .after_help(
            r#"EXAMPLES:
  wspace dump hello.ws                   # labels and instructions
  wspace dump hello.ws --json --compact  # one-line JSON"#,
        )
        .arg(json_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_hidden_trace_args(with_hidden_run_args(with_program_args(cmd)))
}

/// Validate a program.
///
/// Only tokenizes. Every other flag is accepted and hidden.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check that a program decodes")
        .override_usage(
            "\
  wspace check <PROGRAM>
  wspace check -s <TEXT> --notation",
        )
        .arg(color_arg().hide(true));

    with_hidden_dump_args(with_hidden_trace_args(with_hidden_run_args(
        with_program_args(cmd),
    )))
}
