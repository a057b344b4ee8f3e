//! Trace program execution for debugging.

use std::io;
use std::path::PathBuf;

use wspace_bytecode::{Colors, PrintTracer, Verbosity};

use super::program_loader::ProgramInput;
use super::run_common::{prepare_program, run_program};

pub struct TraceArgs {
    pub program: ProgramInput,
    pub input: Option<PathBuf>,
    pub fuel: Option<u64>,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    // Program output stays on stdout; the trace goes to stderr so the two can be split.
    let mut tracer = PrintTracer::new(io::stderr(), args.verbosity, Colors::new(args.color));

    let program = prepare_program(&args.program, &mut tracer);
    run_program(&program, args.input.as_deref(), args.fuel, &mut tracer);
}
