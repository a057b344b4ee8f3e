//! Tests for lazy label resolution.

use wspace_bytecode::{FlowOp, Instruction, Literal, LiteralError, NoopTracer, Opcode, Program};

use super::labels::LabelTable;

fn marks(labels: &[i64]) -> Program {
    labels.iter().copied().map(Instruction::mark).collect()
}

#[test]
fn record_keeps_first_target() {
    let mut table = LabelTable::new();

    assert!(table.record(4, 10, &mut NoopTracer));
    assert!(!table.record(4, 20, &mut NoopTracer));
    assert_eq!(table.get(4), Some(10));
}

#[test]
fn resolve_known_label_skips_scan() {
    let program = marks(&[1]);
    let mut table = LabelTable::new();
    table.record(1, 7, &mut NoopTracer);

    assert_eq!(table.resolve(&program, 1, &mut NoopTracer), Ok(Some(7)));
}

#[test]
fn scan_stops_at_requested_label() {
    let program = marks(&[5, 6, 7]);
    let mut table = LabelTable::new();

    assert_eq!(table.resolve(&program, 6, &mut NoopTracer), Ok(Some(2)));
    assert_eq!(table.get(5), Some(1));
    assert_eq!(table.get(7), None);
}

#[test]
fn scan_resumes_where_it_stopped() {
    let program = marks(&[5, 6, 5, 7]);
    let mut table = LabelTable::new();

    table.resolve(&program, 6, &mut NoopTracer).unwrap();
    assert_eq!(table.resolve(&program, 7, &mut NoopTracer), Ok(Some(4)));

    // The duplicate mark at index 2 did not move label 5
    assert_eq!(table.get(5), Some(1));
}

#[test]
fn scan_miss_is_none() {
    let program = marks(&[1, 2]);
    let mut table = LabelTable::new();

    assert_eq!(table.resolve(&program, 3, &mut NoopTracer), Ok(None));
    assert_eq!(table.get(1), Some(1));
    assert_eq!(table.get(2), Some(2));
    assert_eq!(table.resolve(&program, 3, &mut NoopTracer), Ok(None));
}

#[test]
fn scan_ignores_other_instructions() {
    let program = Program::new(vec![
        Instruction::jump(3),
        Instruction::push(3),
        Instruction::call(3),
        Instruction::mark(3),
    ]);
    let mut table = LabelTable::new();

    assert_eq!(table.resolve(&program, 3, &mut NoopTracer), Ok(Some(4)));
}

#[test]
fn scan_reports_malformed_mark() {
    let raw = format!("\t{}", "\t".repeat(70));
    let mark = Instruction::new(Opcode::Flow(FlowOp::Mark), Some(Literal::new(raw).unwrap()));
    let program = Program::new(vec![mark]);
    let mut table = LabelTable::new();

    assert_eq!(
        table.resolve(&program, 1, &mut NoopTracer),
        Err(LiteralError::Overflow { bits: 70 })
    );
}
