//! Human-readable program dump for debugging.
//!
//! Two sections:
//! - `[labels]`: every marked label and the index execution resumes at
//! - `[code]`: one line per instruction, jump-like lines show their resolved target

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::colors::Colors;
use crate::format::{LineBuilder, Symbol, trace, width_for_count};
use crate::instructions::{Category, FlowOp, Instruction, Opcode};
use crate::literal::Literal;
use crate::program::Program;

/// Generate a human-readable dump of the program.
pub fn dump(program: &Program, colors: Colors) -> String {
    let mut out = String::new();
    let ctx = DumpContext::new(program, colors);

    dump_labels(&mut out, &ctx);
    dump_code(&mut out, program, &ctx);

    out
}

/// Serialize the program as a JSON array of instruction records.
pub fn dump_json(program: &Program, pretty: bool) -> Result<String, serde_json::Error> {
    let records: Vec<InstructionRecord<'_>> = program
        .iter()
        .enumerate()
        .map(|(index, instr)| InstructionRecord::new(index, instr))
        .collect();

    if pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    }
}

#[derive(Serialize)]
struct InstructionRecord<'p> {
    index: usize,
    category: Category,
    operation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<&'p Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
}

impl<'p> InstructionRecord<'p> {
    fn new(index: usize, instr: &'p Instruction) -> Self {
        let parameter = instr.parameter();
        Self {
            index,
            category: instr.category(),
            operation: instr.opcode().mnemonic(),
            parameter,
            value: parameter.and_then(|p| p.decode().ok()),
        }
    }
}

/// Context for dump formatting, precomputes label lookups.
struct DumpContext {
    /// Label id to the index after its first `mark`.
    labels: BTreeMap<i64, usize>,
    step_width: usize,
    colors: Colors,
}

impl DumpContext {
    fn new(program: &Program, colors: Colors) -> Self {
        let mut labels = BTreeMap::new();
        for (index, instr) in program.iter().enumerate() {
            if instr.opcode() != Opcode::Flow(FlowOp::Mark) {
                continue;
            }
            if let Some(Ok(label)) = instr.parameter().map(|p| p.decode()) {
                labels.entry(label).or_insert(index + 1);
            }
        }

        Self {
            labels,
            step_width: width_for_count(program.len() + 1),
            colors,
        }
    }

    fn target_for(&self, instr: &Instruction) -> Option<String> {
        if !instr.opcode().targets_label() {
            return None;
        }
        let target = instr
            .parameter()
            .and_then(|p| p.decode().ok())
            .and_then(|label| self.labels.get(&label));
        Some(match target {
            Some(index) => format!("{:0sw$}", index, sw = self.step_width),
            None => "?".to_string(),
        })
    }
}

fn dump_labels(out: &mut String, ctx: &DumpContext) {
    if ctx.labels.is_empty() {
        return;
    }
    let c = &ctx.colors;

    writeln!(out, "{}", c.paint(c.section, "[labels]")).unwrap();
    for (label, index) in &ctx.labels {
        let name = c.paint(c.label, format_args!("L{label}"));
        writeln!(out, "{name} = {index:0sw$}", sw = ctx.step_width).unwrap();
    }
    out.push('\n');
}

fn dump_code(out: &mut String, program: &Program, ctx: &DumpContext) {
    let c = &ctx.colors;
    let builder = LineBuilder::new(ctx.step_width);

    writeln!(out, "{}", c.paint(c.section, "[code]")).unwrap();
    for (index, instr) in program.iter().enumerate() {
        let prefix = builder.instruction_prefix(index, symbol_for(instr.opcode()));
        let prefix = c.paint(c.gutter, prefix);
        let content = match instr.parameter() {
            Some(literal) => format!("{} {}", instr.opcode(), c.paint(c.operand, literal)),
            None => instr.opcode().to_string(),
        };
        let target = ctx.target_for(instr).unwrap_or_default();
        let line = builder.pad_target(format!("{prefix}{content}"), &target);
        writeln!(out, "{line}").unwrap();
    }
}

fn symbol_for(opcode: Opcode) -> Symbol {
    match opcode {
        Opcode::Flow(FlowOp::Mark) => trace::LABEL,
        Opcode::Flow(FlowOp::Jump | FlowOp::JumpIfZero | FlowOp::JumpIfNegative) => trace::JUMP,
        Opcode::Flow(FlowOp::Call) => trace::CALL,
        Opcode::Flow(FlowOp::Return) => trace::RETURN,
        Opcode::Flow(FlowOp::End) => trace::HALT,
        _ => Symbol::EMPTY,
    }
}
