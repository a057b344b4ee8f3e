//! Tokenizer: glyph stream to instruction sequence.
//!
//! Each instruction is decoded in three stages:
//! 1. category marker, matched against the complete category table
//! 2. operation marker, matched against the category's operation table
//! 3. for parameterized operations, a sign/bit run closed by a line feed
//!
//! The first failure aborts tokenization. There is no recovery: a program either
//! tokenizes completely or not at all.

use wspace_bytecode::glyph::notation;
use wspace_bytecode::{
    Glyph, Instruction, Literal, NoopTracer, Opcode, Program, Tracer, match_category,
    match_operation,
};

use crate::error::{Result, TokenizeError};
use crate::lexer::lex;

/// Longest marker in any table, used to size the `found` excerpt in errors.
const MAX_MARKER_LEN: usize = 2;

/// Tokenize source text into a program.
pub fn tokenize(source: &str) -> Result<Program> {
    tokenize_with(source, &mut NoopTracer)
}

/// Tokenize source text, reporting each decoded instruction to `tracer`.
pub fn tokenize_with<T: Tracer>(source: &str, tracer: &mut T) -> Result<Program> {
    Tokenizer::new(source, tracer).tokenize()
}

/// Decoder state over the filtered glyph stream.
pub struct Tokenizer<'t, T: Tracer> {
    glyphs: Vec<Glyph>,
    offsets: Vec<usize>,
    /// Byte length of the source, reported as the offset of end-of-input errors.
    source_len: usize,
    pos: usize,
    tracer: &'t mut T,
}

impl<'t, T: Tracer> Tokenizer<'t, T> {
    pub fn new(source: &str, tracer: &'t mut T) -> Self {
        let (glyphs, offsets): (Vec<_>, Vec<_>) = lex(source)
            .into_iter()
            .map(|l| (l.glyph, l.offset))
            .unzip();
        Self {
            glyphs,
            offsets,
            source_len: source.len(),
            pos: 0,
            tracer,
        }
    }

    /// Decode every instruction until the glyph stream is exhausted.
    pub fn tokenize(mut self) -> Result<Program> {
        let mut instructions = Vec::new();

        while !self.at_end() {
            let index = instructions.len();
            let offset = self.offset();
            let instr = self.next_instruction(index)?;
            self.tracer.trace_decode(index, offset, &instr);
            instructions.push(instr);
        }

        Ok(Program::new(instructions))
    }

    fn next_instruction(&mut self, index: usize) -> Result<Instruction> {
        let offset = self.offset();
        let Some((category, len)) = match_category(self.rest()) else {
            return Err(TokenizeError::UnknownCategoryMarker {
                index,
                offset,
                found: self.excerpt(),
            });
        };
        self.pos += len;

        let offset = self.offset();
        let Some((opcode, len)) = match_operation(category, self.rest()) else {
            return Err(TokenizeError::UnknownOperationMarker {
                index,
                offset,
                category,
                found: self.excerpt(),
            });
        };
        self.pos += len;

        let parameter = if opcode.takes_parameter() {
            Some(self.parameter(index, opcode)?)
        } else {
            None
        };

        Ok(Instruction::new(opcode, parameter))
    }

    /// Consume a literal and its line-feed terminator.
    fn parameter(&mut self, index: usize, operation: Opcode) -> Result<Literal> {
        let offset = self.offset();
        let Some(len) = self.rest().iter().position(|&g| g == Glyph::LineFeed) else {
            return Err(TokenizeError::MissingParameterTerminator {
                index,
                offset,
                operation,
            });
        };

        let bits = &self.glyphs[self.pos..self.pos + len];
        let literal =
            Literal::from_glyphs(bits).map_err(|source| TokenizeError::MalformedLiteral {
                index,
                offset,
                operation,
                source,
            })?;

        // Skip the bits and the terminator.
        self.pos += len + 1;
        Ok(literal)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.glyphs.len()
    }

    fn rest(&self) -> &[Glyph] {
        &self.glyphs[self.pos..]
    }

    fn offset(&self) -> usize {
        self.offsets.get(self.pos).copied().unwrap_or(self.source_len)
    }

    fn excerpt(&self) -> String {
        let end = (self.pos + MAX_MARKER_LEN).min(self.glyphs.len());
        notation(&self.glyphs[self.pos..end])
    }
}
