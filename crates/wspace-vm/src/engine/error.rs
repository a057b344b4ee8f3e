//! Errors that can occur during program execution.
//!
//! Every runtime error is fatal. `RuntimeError` pairs the failure with the index and
//! text of the instruction that raised it.

use std::io;

use wspace_bytecode::{Instruction, LiteralError};

/// A fatal execution error, located at the instruction that raised it.
#[derive(Debug, thiserror::Error)]
#[error("instruction {index} `{instruction}`: {kind}")]
pub struct RuntimeError {
    index: usize,
    instruction: Instruction,
    kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub fn new(index: usize, instruction: Instruction, kind: RuntimeErrorKind) -> Self {
        Self {
            index,
            instruction,
            kind,
        }
    }

    /// Index of the faulting instruction.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn instruction(&self) -> &Instruction {
        &self.instruction
    }

    pub fn kind(&self) -> &RuntimeErrorKind {
        &self.kind
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RuntimeErrorKind {
    #[error("stack underflow: needs {required} value(s), stack holds {available}")]
    StackUnderflow { required: usize, available: usize },

    /// Negative `copy` or `slide` operand.
    #[error("invalid stack index {0}")]
    InvalidStackIndex(i64),

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    #[error("uninitialized heap address {0}")]
    UninitializedHeapAddress(i64),

    #[error("undefined label {0}")]
    UndefinedLabel(i64),

    #[error("return without call")]
    ReturnWithoutCall,

    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("{0} is not a valid character")]
    InvalidCharacter(i64),

    #[error("invalid number input {0:?}")]
    InvalidNumber(String),

    /// Operand that does not fit in an `i64`.
    #[error(transparent)]
    MalformedLiteral(#[from] LiteralError),

    /// Execution fuel exhausted (too many instructions executed).
    #[error("execution limit of {0} steps exceeded")]
    ExecFuelExhausted(u64),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
