//! wspace compiler front end: raw source text to an instruction `Program`.
//!
//! - `lexer` - logos-based glyph lexer, every non-glyph character is a comment
//! - `tokenizer` - category / operation / parameter decoding against the marker tables
//! - `notation` - `S`/`T`/`L` letter notation for writing programs by hand

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod lexer;
pub mod notation;
pub mod tokenizer;


pub use error::{Result, TokenizeError};
pub use lexer::{Lexeme, lex};
pub use notation::from_notation;
pub use tokenizer::{Tokenizer, tokenize, tokenize_with};
