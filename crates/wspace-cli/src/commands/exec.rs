//! Run a program.

use std::io;
use std::path::PathBuf;

use wspace_bytecode::{Colors, NoopTracer, PrintTracer, Verbosity};

use super::program_loader::ProgramInput;
use super::run_common::{prepare_program, run_program};

pub struct ExecArgs {
    pub program: ProgramInput,
    pub input: Option<PathBuf>,
    pub fuel: Option<u64>,
    pub debug: bool,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    if args.debug {
        let colors = Colors::new(args.color);
        let mut tracer = PrintTracer::new(io::stderr(), Verbosity::Default, colors);
        let program = prepare_program(&args.program, &mut tracer);
        run_program(&program, args.input.as_deref(), args.fuel, &mut tracer);
        return;
    }

    let program = prepare_program(&args.program, &mut NoopTracer);
    run_program(&program, args.input.as_deref(), args.fuel, &mut NoopTracer);
}
