pub mod check;
pub mod dump;
pub mod exec;
pub mod program_loader;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod program_loader_tests;
