//! Runtime engine for executing wspace programs.
//!
//! The VM fetches instructions by index from an immutable `Program`, resolving jump
//! targets lazily through the label table.

mod error;
mod input;
mod labels;
mod vm;

#[cfg(test)]
mod input_tests;
#[cfg(test)]
mod labels_tests;

pub use error::{RuntimeError, RuntimeErrorKind};
pub use vm::{FuelLimits, Halt, VM, VMBuilder};
