//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: exec/trace/dump/check accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use wspace_bytecode::Verbosity;

use super::dispatch::verbosity_from_count;
use super::*;
use crate::cli::commands::{check_command, dump_command, exec_command, trace_command};

fn render_help(mut cmd: clap::Command) -> String {
    cmd.render_help().to_string()
}

#[test]
fn exec_extracts_params() {
    let m = exec_command()
        .try_get_matches_from([
            "exec", "hello.ws", "--input", "in.txt", "--fuel", "500", "-d",
        ])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.program_path, Some(PathBuf::from("hello.ws")));
    assert_eq!(params.program_text, None);
    assert_eq!(params.input, Some(PathBuf::from("in.txt")));
    assert_eq!(params.fuel, Some(500));
    assert!(params.debug);
    assert!(!params.notation);
}

#[test]
fn exec_fuel_defaults_to_unlimited() {
    let m = exec_command()
        .try_get_matches_from(["exec", "hello.ws"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.fuel, None);
    assert!(!params.debug);
    assert!(matches!(params.color, ColorChoice::Auto));
}

#[test]
fn exec_accepts_dump_and_trace_flags() {
    let result = exec_command().try_get_matches_from([
        "exec",
        "hello.ws",
        "--json",
        "--compact",
        "-vv",
    ]);
    assert!(
        result.is_ok(),
        "exec should accept dump and trace flags: {:?}",
        result.err()
    );
}

#[test]
fn exec_rejects_negative_fuel() {
    let result = exec_command().try_get_matches_from(["exec", "hello.ws", "--fuel", "-1"]);
    assert!(result.is_err());
}

#[test]
fn source_text_conflicts_with_path() {
    let result =
        exec_command().try_get_matches_from(["exec", "hello.ws", "-s", "SSSTL TLST LLL"]);
    assert!(result.is_err());
}

#[test]
fn source_text_with_notation() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-s", "SSSTL TLST LLL", "--notation"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.program_path, None);
    assert_eq!(params.program_text.as_deref(), Some("SSSTL TLST LLL"));
    assert!(params.notation);
}

#[test]
fn trace_extracts_verbosity() {
    let m = trace_command()
        .try_get_matches_from(["trace", "hello.ws", "-vv", "--color", "never"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.verbose, 2);
    assert!(matches!(params.color, ColorChoice::Never));
}

#[test]
fn trace_accepts_debug_flag() {
    let result = trace_command().try_get_matches_from(["trace", "hello.ws", "-d"]);
    assert!(
        result.is_ok(),
        "trace should accept -d: {:?}",
        result.err()
    );
}

#[test]
fn verbosity_mapping() {
    assert_eq!(verbosity_from_count(0), Verbosity::Default);
    assert_eq!(verbosity_from_count(1), Verbosity::Verbose);
    assert_eq!(verbosity_from_count(2), Verbosity::VeryVerbose);
    assert_eq!(verbosity_from_count(7), Verbosity::VeryVerbose);
}

#[test]
fn dump_accepts_run_and_trace_flags() {
    let m = dump_command()
        .try_get_matches_from([
            "dump", "hello.ws", "--input", "in.txt", "--fuel", "10", "-v", "-d",
        ])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.program_path, Some(PathBuf::from("hello.ws")));
    assert!(!params.json);
}

#[test]
fn dump_extracts_json_flags() {
    let m = dump_command()
        .try_get_matches_from(["dump", "hello.ws", "--json", "--compact"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert!(params.json);
    assert!(params.compact);
}

#[test]
fn check_accepts_everything() {
    let m = check_command()
        .try_get_matches_from([
            "check", "hello.ws", "--json", "--fuel", "3", "-vv", "--color", "always",
        ])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.program_path, Some(PathBuf::from("hello.ws")));
}

#[test]
fn exec_help_hides_unified_flags() {
    let help = render_help(exec_command());

    assert!(help.contains("--fuel"));
    assert!(help.contains("--debug"));
    assert!(!help.contains("--json"));
    assert!(!help.contains("--compact"));
}

#[test]
fn dump_help_hides_run_flags() {
    let help = render_help(dump_command());

    assert!(help.contains("--json"));
    assert!(!help.contains("--fuel"));
    assert!(!help.contains("--input"));
    assert!(!help.contains("--debug"));
}

#[test]
fn check_help_shows_program_args_only() {
    let help = render_help(check_command());

    assert!(help.contains("--source"));
    assert!(help.contains("--notation"));
    assert!(!help.contains("--color"));
    assert!(!help.contains("--fuel"));
}

#[test]
fn missing_subcommand_is_an_error() {
    let result = build_cli().try_get_matches_from(["wspace"]);
    assert!(result.is_err());
}
