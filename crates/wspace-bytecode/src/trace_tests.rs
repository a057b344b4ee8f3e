//! Tests for the print tracer.

use super::colors::Colors;
use super::instructions::{ArithmeticOp, Instruction};
use super::program::Program;
use super::trace::{PrintTracer, Tracer, Verbosity};

fn sample_program() -> Program {
    // 12 instructions, so indices render two digits wide
    (0..12).map(Instruction::push).collect()
}

fn run_hooks(verbosity: Verbosity) -> Vec<String> {
    let mut tracer = PrintTracer::new(Vec::new(), verbosity, Colors::PLAIN);
    let program = sample_program();

    tracer.trace_decode(0, 0, &program[0]);
    tracer.trace_program(&program);
    tracer.trace_instruction(3, &program[3]);
    tracer.trace_stack(&[1, 2, 3]);
    tracer.trace_label(4, 5);
    tracer.trace_jump(4, 5);
    tracer.trace_call(9, 11);
    tracer.trace_instruction(11, &ArithmeticOp::Add.into());
    tracer.trace_return(4);
    tracer.trace_halt(12, false);

    let out = String::from_utf8(tracer.into_sink()).unwrap();
    out.lines().map(str::to_string).collect()
}

#[test]
fn default_verbosity() {
    let lines = run_hooks(Verbosity::Default);

    assert_eq!(
        lines,
        [
            "  03       push 3",
            "       ▶   L9                       11",
            "  11       add",
            "       ◀                            04",
            "  12   ◼   end of program",
        ]
    );
}

#[test]
fn verbose_adds_labels_and_jumps() {
    let lines = run_hooks(Verbosity::Verbose);

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[1], "       ●   L4                       05");
    assert_eq!(lines[2], "       ▷   L4                       05");
}

#[test]
fn very_verbose_adds_decode_and_stack() {
    let lines = run_hooks(Verbosity::VeryVerbose);

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "  0   ⬦   push 0 @0");
    assert_eq!(lines[2], "       ⬥   [1 2 3]");
}

#[test]
fn explicit_halt_is_a_subline() {
    let mut tracer = PrintTracer::new(Vec::new(), Verbosity::Default, Colors::PLAIN);
    tracer.trace_program(&sample_program());
    tracer.trace_halt(4, true);

    let out = String::from_utf8(tracer.into_sink()).unwrap();
    assert_eq!(out, "       ◼   end\n");
}

#[test]
fn colors_wrap_operands() {
    let mut tracer = PrintTracer::new(Vec::new(), Verbosity::Default, Colors::ANSI);
    tracer.trace_instruction(0, &Instruction::push(5));

    let out = String::from_utf8(tracer.into_sink()).unwrap();
    assert_eq!(out, "\x1b[2m  0       \x1b[0mpush \x1b[36m5\x1b[0m\n");
}

#[test]
fn colors_wrap_labels_and_halts() {
    let mut tracer = PrintTracer::new(Vec::new(), Verbosity::Verbose, Colors::ANSI);
    tracer.trace_program(&sample_program());
    tracer.trace_jump(3, 7);
    tracer.trace_halt(4, true);

    let out = String::from_utf8(tracer.into_sink()).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert!(lines[0].contains("\x1b[33mL3\x1b[0m"));
    assert!(lines[0].ends_with("07"));
    assert!(lines[1].contains("\x1b[32mend\x1b[0m"));
}

#[test]
fn plain_colors_leave_text_untouched() {
    assert_eq!(Colors::PLAIN.paint(Colors::PLAIN.label, "L1"), "L1");
    let plain = Colors::new(false);
    assert_eq!(plain.paint(plain.halt, "end"), "end");
    assert_eq!(Colors::ANSI.paint(Colors::ANSI.section, "[code]"), "\x1b[1m[code]\x1b[0m");
}
