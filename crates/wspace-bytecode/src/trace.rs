//! Tracing infrastructure for debugging tokenization and execution.
//!
//! There is no global logger. A `Tracer` is handed explicitly to the tokenizer and to
//! the VM, and each hook is called at a fixed point:
//! - `trace_decode` - after the tokenizer produces an instruction
//! - `trace_program` - once, before the first instruction executes
//! - `trace_instruction` - before executing an instruction
//! - `trace_stack` - after an instruction completes
//! - `trace_label` - when a label is recorded in the label table
//! - `trace_jump` - when control transfers to a label
//! - `trace_call` / `trace_return` - subroutine entry and exit
//! - `trace_halt` - when the run stops cleanly
//!
//! `NoopTracer` methods are `#[inline(always)]` empty functions, so an untraced run pays
//! nothing. `PrintTracer` formats lines and writes them to any `Write` sink.

use std::io::Write;

use crate::colors::Colors;
use crate::format::{LineBuilder, Symbol, format_stack, trace, width_for_count};
use crate::instructions::Instruction;
use crate::program::Program;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Default: executed instructions, calls, returns and halts.
    #[default]
    Default,
    /// Verbose (-v): plus label recording and taken jumps.
    Verbose,
    /// Very verbose (-vv): plus tokenizer output and stack snapshots.
    VeryVerbose,
}

/// Tracer trait for tokenizer and VM instrumentation.
pub trait Tracer {
    /// Called after the tokenizer decodes an instruction starting at byte `offset`.
    fn trace_decode(&mut self, index: usize, offset: usize, instr: &Instruction);

    /// Called once before execution starts.
    fn trace_program(&mut self, program: &Program);

    /// Called before executing the instruction at `pc`.
    fn trace_instruction(&mut self, pc: usize, instr: &Instruction);

    /// Called after an instruction completes, with the operand stack (bottom first).
    fn trace_stack(&mut self, stack: &[i64]);

    /// Called when `label` is recorded as resuming at `target`.
    fn trace_label(&mut self, label: i64, target: usize);

    /// Called when a jump to `label` is taken.
    fn trace_jump(&mut self, label: i64, target: usize);

    /// Called when entering a subroutine.
    fn trace_call(&mut self, label: i64, target: usize);

    /// Called when returning to `target`.
    fn trace_return(&mut self, target: usize);

    /// Called on a clean halt. `explicit` is false when execution fell off the end.
    fn trace_halt(&mut self, pc: usize, explicit: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_decode(&mut self, _index: usize, _offset: usize, _instr: &Instruction) {}

    #[inline(always)]
    fn trace_program(&mut self, _program: &Program) {}

    #[inline(always)]
    fn trace_instruction(&mut self, _pc: usize, _instr: &Instruction) {}

    #[inline(always)]
    fn trace_stack(&mut self, _stack: &[i64]) {}

    #[inline(always)]
    fn trace_label(&mut self, _label: i64, _target: usize) {}

    #[inline(always)]
    fn trace_jump(&mut self, _label: i64, _target: usize) {}

    #[inline(always)]
    fn trace_call(&mut self, _label: i64, _target: usize) {}

    #[inline(always)]
    fn trace_return(&mut self, _target: usize) {}

    #[inline(always)]
    fn trace_halt(&mut self, _pc: usize, _explicit: bool) {}
}

/// Tracer that writes formatted trace lines to a sink (typically stderr).
///
/// Write failures are ignored: tracing never changes the outcome of a run.
pub struct PrintTracer<W: Write> {
    sink: W,
    verbosity: Verbosity,
    builder: LineBuilder,
    colors: Colors,
}

impl<W: Write> PrintTracer<W> {
    pub fn new(sink: W, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            sink,
            verbosity,
            builder: LineBuilder::new(1),
            colors,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Give back the sink, e.g. to inspect a buffered trace.
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn format_target(&self, target: usize) -> String {
        format!("{:0sw$}", target, sw = self.builder.step_width())
    }

    fn label_name(&self, label: i64) -> String {
        self.colors.paint(self.colors.label, format_args!("L{label}"))
    }

    fn add_instruction(&mut self, pc: usize, symbol: Symbol, content: &str) {
        let c = self.colors;
        let prefix = self.builder.instruction_prefix(pc, symbol);
        let line = format!("{}{content}", c.paint(c.gutter, prefix));
        self.emit(&line);
    }

    fn add_subline(&mut self, symbol: Symbol, content: &str, target: &str) {
        let prefix = self.builder.subline_prefix(symbol);
        let line = self.builder.pad_target(format!("{prefix}{content}"), target);
        self.emit(&line);
    }

    fn emit(&mut self, line: &str) {
        let _ = writeln!(self.sink, "{line}");
    }
}

impl<W: Write> Tracer for PrintTracer<W> {
    fn trace_decode(&mut self, index: usize, offset: usize, instr: &Instruction) {
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let content = format!("{instr} {}", c.paint(c.gutter, format_args!("@{offset}")));
        let line = self.builder.instruction_prefix(index, trace::DECODE);
        self.emit(&format!("{line}{content}"));
    }

    fn trace_program(&mut self, program: &Program) {
        self.builder = LineBuilder::new(width_for_count(program.len() + 1));
    }

    fn trace_instruction(&mut self, pc: usize, instr: &Instruction) {
        let c = self.colors;
        let content = match instr.parameter() {
            Some(literal) => format!("{} {}", instr.opcode(), c.paint(c.operand, literal)),
            None => instr.opcode().to_string(),
        };
        self.add_instruction(pc, Symbol::EMPTY, &content);
    }

    fn trace_stack(&mut self, stack: &[i64]) {
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let content = c.paint(c.gutter, format_stack(stack));
        self.add_subline(trace::STACK, &content, "");
    }

    fn trace_label(&mut self, label: i64, target: usize) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let target = self.format_target(target);
        let name = self.label_name(label);
        self.add_subline(trace::LABEL, &name, &target);
    }

    fn trace_jump(&mut self, label: i64, target: usize) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let target = self.format_target(target);
        let name = self.label_name(label);
        self.add_subline(trace::JUMP, &name, &target);
    }

    fn trace_call(&mut self, label: i64, target: usize) {
        let target = self.format_target(target);
        let name = self.label_name(label);
        self.add_subline(trace::CALL, &name, &target);
    }

    fn trace_return(&mut self, target: usize) {
        let target = self.format_target(target);
        self.add_subline(trace::RETURN, "", &target);
    }

    fn trace_halt(&mut self, pc: usize, explicit: bool) {
        let c = self.colors;
        let reason = if explicit { "end" } else { "end of program" };
        let content = c.paint(c.halt, reason);
        if explicit {
            self.add_subline(trace::HALT, &content, "");
        } else {
            self.add_instruction(pc, trace::HALT, &content);
        }
    }
}
