//! Loading program text from a file, stdin, or the command line.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use wspace_bytecode::{Program, Tracer};
use wspace_compiler::{TokenizeError, from_notation, tokenize_with};

/// Where the program comes from.
#[derive(Clone, Debug, Default)]
pub struct ProgramInput {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
    /// The text is written in `S`/`T`/`L` letter notation.
    pub notation: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("program is required: use a positional argument or -s/--source")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

/// Read the raw program source, converting letter notation if requested.
pub fn load_program_source(input: &ProgramInput) -> Result<String, LoadError> {
    let text = match (&input.text, &input.path) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) if path.as_os_str() == "-" => load_stdin()?,
        (None, Some(path)) => load_file(path)?,
        (None, None) => return Err(LoadError::Missing),
    };

    if input.notation {
        return Ok(from_notation(&text));
    }
    Ok(text)
}

/// Read and tokenize the program.
pub fn load_program<T: Tracer>(
    input: &ProgramInput,
    tracer: &mut T,
) -> Result<Program, LoadError> {
    let source = load_program_source(input)?;
    Ok(tokenize_with(&source, tracer)?)
}

fn load_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_owned(),
        source,
    })
}
