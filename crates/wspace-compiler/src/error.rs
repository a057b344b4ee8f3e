//! Errors that abort tokenization.
//!
//! Every error names the stage that failed (category, operation or parameter), the
//! index of the instruction being decoded and the byte offset in the original source.

use wspace_bytecode::{Category, LiteralError, Opcode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("instruction {index}: unknown category marker {} at byte {offset}", describe(.found))]
    UnknownCategoryMarker {
        index: usize,
        offset: usize,
        found: String,
    },

    #[error(
        "instruction {index}: unknown {category} operation marker {} at byte {offset}",
        describe(.found)
    )]
    UnknownOperationMarker {
        index: usize,
        offset: usize,
        category: Category,
        found: String,
    },

    #[error("instruction {index}: `{operation}` parameter at byte {offset} has no line-feed terminator")]
    MissingParameterTerminator {
        index: usize,
        offset: usize,
        operation: Opcode,
    },

    #[error("instruction {index}: `{operation}` parameter at byte {offset}: {source}")]
    MalformedLiteral {
        index: usize,
        offset: usize,
        operation: Opcode,
        source: LiteralError,
    },
}

impl TokenizeError {
    /// Index of the instruction that failed to decode.
    pub fn index(&self) -> usize {
        match self {
            Self::UnknownCategoryMarker { index, .. }
            | Self::UnknownOperationMarker { index, .. }
            | Self::MissingParameterTerminator { index, .. }
            | Self::MalformedLiteral { index, .. } => *index,
        }
    }

    /// Byte offset in the source where the failing marker or parameter starts.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnknownCategoryMarker { offset, .. }
            | Self::UnknownOperationMarker { offset, .. }
            | Self::MissingParameterTerminator { offset, .. }
            | Self::MalformedLiteral { offset, .. } => *offset,
        }
    }
}

fn describe(found: &str) -> String {
    if found.is_empty() {
        "<end of input>".to_string()
    } else {
        format!("`{found}`")
    }
}

/// Result type for tokenization.
pub type Result<T> = std::result::Result<T, TokenizeError>;
