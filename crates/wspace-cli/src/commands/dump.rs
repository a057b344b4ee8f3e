//! Show the decoded instruction listing.

use std::io::IsTerminal;

use wspace_bytecode::{Colors, NoopTracer, dump, dump_json};

use super::program_loader::ProgramInput;
use super::run_common::prepare_program;

pub struct DumpArgs {
    pub program: ProgramInput,
    pub json: bool,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let program = prepare_program(&args.program, &mut NoopTracer);

    if args.json {
        let pretty = !args.compact && std::io::stdout().is_terminal();
        match dump_json(&program, pretty) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", dump(&program, Colors::new(args.color)));
}
