//! Runtime VM for executing tokenized wspace programs.
//!
//! The VM owns the operand stack, heap, call stack and label table, and runs a
//! `Program` against any `BufRead` input and `Write` output.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{FuelLimits, Halt, RuntimeError, RuntimeErrorKind, VM, VMBuilder};
