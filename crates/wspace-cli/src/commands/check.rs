use wspace_bytecode::NoopTracer;

use super::program_loader::{ProgramInput, load_program};

pub struct CheckArgs {
    pub program: ProgramInput,
}

/// Tokenize the program. Silent on success.
pub fn run(args: CheckArgs) {
    if let Err(e) = load_program(&args.program, &mut NoopTracer) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
