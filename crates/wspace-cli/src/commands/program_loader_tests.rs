use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use wspace_bytecode::{Instruction, NoopTracer, StackOp};

use super::program_loader::{LoadError, ProgramInput, load_program, load_program_source};

fn program_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn inline_text_wins() {
    let input = ProgramInput {
        text: Some("  \t\n".to_owned()),
        ..Default::default()
    };

    assert_eq!(load_program_source(&input).unwrap(), "  \t\n");
}

#[test]
fn inline_notation_is_converted() {
    let input = ProgramInput {
        text: Some("SSSTL push 1".to_owned()),
        notation: true,
        ..Default::default()
    };

    assert_eq!(load_program_source(&input).unwrap(), "   \t\n");
}

#[test]
fn reads_program_file() {
    let file = program_file("PUSH1   \t\nEND\n\n\n");
    let input = ProgramInput {
        path: Some(file.path().to_owned()),
        ..Default::default()
    };

    let program = load_program(&input, &mut NoopTracer).unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program[0], Instruction::push(1));
}

#[test]
fn reads_notation_file() {
    let file = program_file("SSSTL\nSLS\nLLL\n");
    let input = ProgramInput {
        path: Some(file.path().to_owned()),
        notation: true,
        ..Default::default()
    };

    let program = load_program(&input, &mut NoopTracer).unwrap();
    assert_eq!(program.len(), 3);
    assert_eq!(program[1], Instruction::from(StackOp::Duplicate));
}

#[test]
fn missing_program() {
    let err = load_program_source(&ProgramInput::default()).unwrap_err();

    assert!(matches!(err, LoadError::Missing));
    insta::assert_snapshot!(err, @"program is required: use a positional argument or -s/--source");
}

#[test]
fn unreadable_file() {
    let input = ProgramInput {
        path: Some(PathBuf::from("/nonexistent/wspace/program.ws")),
        ..Default::default()
    };
    let err = load_program_source(&input).unwrap_err();

    assert!(matches!(err, LoadError::File { .. }));
    assert!(
        err.to_string()
            .starts_with("failed to read '/nonexistent/wspace/program.ws': ")
    );
}

#[test]
fn tokenize_error_is_passed_through() {
    let input = ProgramInput {
        text: Some("\t".to_owned()),
        ..Default::default()
    };
    let err = load_program(&input, &mut NoopTracer).unwrap_err();

    assert!(matches!(err, LoadError::Tokenize(_)));
}
