//! Shared logic for exec and trace commands.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use wspace_bytecode::{Program, Tracer};
use wspace_vm::VM;

use super::program_loader::{ProgramInput, load_program};

/// Load and tokenize the program, exiting on failure.
pub fn prepare_program<T: Tracer>(input: &ProgramInput, tracer: &mut T) -> Program {
    load_program(input, tracer).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// Open the program's input: a file if given, stdin otherwise.
pub fn open_input(path: Option<&Path>) -> Box<dyn BufRead> {
    let Some(path) = path else {
        return Box::new(io::stdin().lock());
    };
    match File::open(path) {
        Ok(file) => Box::new(BufReader::new(file)),
        Err(e) => {
            eprintln!("error: failed to open '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

/// Run the program against stdin/stdout (or `input_path`), exiting on a runtime error.
pub fn run_program<T: Tracer>(
    program: &Program,
    input_path: Option<&Path>,
    fuel: Option<u64>,
    tracer: &mut T,
) {
    let mut builder = VM::builder(program)
        .input(open_input(input_path))
        .output(io::stdout().lock());
    if let Some(fuel) = fuel {
        builder = builder.exec_fuel(fuel);
    }
    let mut vm = builder.build();

    if let Err(e) = vm.execute_with(tracer) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
