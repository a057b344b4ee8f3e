//! Tests for the program dump.

use super::colors::Colors;
use super::dump::{dump, dump_json};
use super::instructions::{FlowOp, Instruction, IoOp};
use super::program::Program;

#[test]
fn dump_straight_line() {
    let program = Program::new(vec![
        Instruction::push(72),
        IoOp::OutputChar.into(),
        FlowOp::End.into(),
    ]);

    let res = dump(&program, Colors::PLAIN);

    insta::assert_snapshot!(res, @r"
    [code]
      0       push 72
      1       outc
      2   ◼   end
    ");
}

#[test]
fn dump_resolves_labels() {
    let program = Program::new(vec![
        Instruction::mark(1),
        Instruction::push(1),
        Instruction::jump(1),
        Instruction::call(5),
        FlowOp::End.into(),
    ]);

    let res = dump(&program, Colors::PLAIN);

    insta::assert_snapshot!(res, @r"
    [labels]
    L1 = 1

    [code]
      0   ●   mark 1
      1       push 1
      2   ▷   jump 1                    1
      3   ▶   call 5                    ?
      4   ◼   end
    ");
}

#[test]
fn dump_first_mark_wins() {
    let program = Program::new(vec![
        Instruction::mark(7),
        Instruction::mark(7),
        Instruction::jump(7),
    ]);

    let res = dump(&program, Colors::PLAIN);

    assert!(res.starts_with("[labels]\nL7 = 1\n"));
}

#[test]
fn dump_empty_program() {
    assert_eq!(dump(&Program::default(), Colors::PLAIN), "[code]\n");
}

#[test]
fn dump_json_records() {
    let program = Program::new(vec![Instruction::push(-2), IoOp::OutputNumber.into()]);

    let res = dump_json(&program, false).unwrap();

    assert_eq!(
        res,
        r#"[{"index":0,"category":"stack","operation":"push","parameter":"TTS","value":-2},{"index":1,"category":"io","operation":"outn"}]"#
    );
}
