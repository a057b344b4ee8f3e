#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Instruction model and runtime helpers for wspace.
//!
//! This crate contains:
//! - Glyphs and the static marker tables that map glyph runs to operations
//! - The instruction model (`Instruction`, `Opcode`, `Program`)
//! - The sign-prefixed binary literal codec
//! - Human-readable program dump and the execution `Tracer`

pub mod colors;
pub mod dump;
pub mod format;
pub mod glyph;
pub mod instructions;
pub mod literal;
pub mod program;
pub mod tables;
pub mod trace;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod literal_tests;
#[cfg(test)]
mod trace_tests;

// Re-export commonly used items at crate root
pub use colors::Colors;
pub use dump::{dump, dump_json};
pub use format::{LineBuilder, Symbol, cols, width_for_count};
pub use glyph::Glyph;
pub use instructions::{
    ArithmeticOp, Category, FlowOp, HeapOp, Instruction, IoOp, Opcode, StackOp,
};
pub use literal::{Literal, LiteralError, decode_number, encode_number};
pub use program::Program;
pub use tables::{
    Marker, category_markers, markers_for, match_category, match_operation, operation_markers,
};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
