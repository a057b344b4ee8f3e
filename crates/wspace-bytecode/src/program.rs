//! The immutable instruction sequence produced by the tokenizer.

use std::ops::Index;

use crate::glyph::Glyph;
use crate::instructions::Instruction;
use crate::tables::markers_for;

/// Ordered, read-only instruction sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Box<[Instruction]>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions: instructions.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Encode back to canonical source text (markers, literals, terminators only).
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for instr in self.iter() {
            let (category, operation) = markers_for(instr.opcode());
            out.extend(category.iter().chain(operation).map(|g| g.as_char()));
            if let Some(literal) = instr.parameter() {
                out.push_str(literal.as_str());
                out.push(Glyph::LineFeed.as_char());
            }
        }
        out
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Instruction {
        &self.instructions[index]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
