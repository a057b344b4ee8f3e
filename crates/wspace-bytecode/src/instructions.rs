//! Instruction model.
//!
//! An operation is a tagged variant of its category (`Opcode::Stack(StackOp::Push)`),
//! so an operation can never be paired with the wrong category. Parameterized
//! operations carry their raw literal alongside the opcode in [`Instruction`].

use std::fmt;

use serde::Serialize;

use crate::literal::Literal;

/// Instruction family, selected by the category marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Stack,
    Arithmetic,
    Heap,
    Flow,
    Io,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Arithmetic => "arithmetic",
            Self::Heap => "heap",
            Self::Flow => "flow",
            Self::Io => "io",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackOp {
    Push,
    Duplicate,
    /// Copy the n-th element from the top (0 = top).
    Copy,
    Swap,
    Discard,
    /// Keep the top element, drop the n elements beneath it.
    Slide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeapOp {
    Store,
    Retrieve,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOp {
    Mark,
    Call,
    Jump,
    JumpIfZero,
    JumpIfNegative,
    Return,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IoOp {
    OutputChar,
    OutputNumber,
    ReadChar,
    ReadNumber,
}

/// Operation tagged with its category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Stack(StackOp),
    Arithmetic(ArithmeticOp),
    Heap(HeapOp),
    Flow(FlowOp),
    Io(IoOp),
}

impl Opcode {
    pub fn category(self) -> Category {
        match self {
            Self::Stack(_) => Category::Stack,
            Self::Arithmetic(_) => Category::Arithmetic,
            Self::Heap(_) => Category::Heap,
            Self::Flow(_) => Category::Flow,
            Self::Io(_) => Category::Io,
        }
    }

    /// Whether the operation is followed by a literal operand in source.
    pub fn takes_parameter(self) -> bool {
        matches!(
            self,
            Self::Stack(StackOp::Push | StackOp::Copy | StackOp::Slide)
                | Self::Flow(
                    FlowOp::Mark
                        | FlowOp::Call
                        | FlowOp::Jump
                        | FlowOp::JumpIfZero
                        | FlowOp::JumpIfNegative
                )
        )
    }

    /// Short lowercase name used by dump and trace output.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Stack(op) => match op {
                StackOp::Push => "push",
                StackOp::Duplicate => "dup",
                StackOp::Copy => "copy",
                StackOp::Swap => "swap",
                StackOp::Discard => "discard",
                StackOp::Slide => "slide",
            },
            Self::Arithmetic(op) => match op {
                ArithmeticOp::Add => "add",
                ArithmeticOp::Subtract => "sub",
                ArithmeticOp::Multiply => "mul",
                ArithmeticOp::Divide => "div",
                ArithmeticOp::Modulo => "mod",
            },
            Self::Heap(op) => match op {
                HeapOp::Store => "store",
                HeapOp::Retrieve => "retrieve",
            },
            Self::Flow(op) => match op {
                FlowOp::Mark => "mark",
                FlowOp::Call => "call",
                FlowOp::Jump => "jump",
                FlowOp::JumpIfZero => "jz",
                FlowOp::JumpIfNegative => "jn",
                FlowOp::Return => "ret",
                FlowOp::End => "end",
            },
            Self::Io(op) => match op {
                IoOp::OutputChar => "outc",
                IoOp::OutputNumber => "outn",
                IoOp::ReadChar => "readc",
                IoOp::ReadNumber => "readn",
            },
        }
    }

    /// Jump-like operations whose literal names a label rather than a value.
    pub fn targets_label(self) -> bool {
        matches!(
            self,
            Self::Flow(
                FlowOp::Call | FlowOp::Jump | FlowOp::JumpIfZero | FlowOp::JumpIfNegative
            )
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction: opcode plus the raw literal for parameterized operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    opcode: Opcode,
    parameter: Option<Literal>,
}

impl Instruction {
    /// Pair an opcode with its parameter.
    ///
    /// Panics if the parameter's presence disagrees with `opcode.takes_parameter()`.
    pub fn new(opcode: Opcode, parameter: Option<Literal>) -> Self {
        assert_eq!(
            opcode.takes_parameter(),
            parameter.is_some(),
            "parameter mismatch for `{opcode}`"
        );
        Self { opcode, parameter }
    }

    /// Instruction without an operand.
    pub fn bare(opcode: Opcode) -> Self {
        Self::new(opcode, None)
    }

    /// Instruction with an operand encoded from `n`.
    pub fn with_value(opcode: Opcode, n: i64) -> Self {
        Self::new(opcode, Some(Literal::encode(n)))
    }

    pub fn push(n: i64) -> Self {
        Self::with_value(Opcode::Stack(StackOp::Push), n)
    }

    pub fn mark(label: i64) -> Self {
        Self::with_value(Opcode::Flow(FlowOp::Mark), label)
    }

    pub fn jump(label: i64) -> Self {
        Self::with_value(Opcode::Flow(FlowOp::Jump), label)
    }

    pub fn call(label: i64) -> Self {
        Self::with_value(Opcode::Flow(FlowOp::Call), label)
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn category(&self) -> Category {
        self.opcode.category()
    }

    pub fn parameter(&self) -> Option<&Literal> {
        self.parameter.as_ref()
    }
}

impl From<StackOp> for Instruction {
    fn from(op: StackOp) -> Self {
        Self::bare(Opcode::Stack(op))
    }
}

impl From<ArithmeticOp> for Instruction {
    fn from(op: ArithmeticOp) -> Self {
        Self::bare(Opcode::Arithmetic(op))
    }
}

impl From<HeapOp> for Instruction {
    fn from(op: HeapOp) -> Self {
        Self::bare(Opcode::Heap(op))
    }
}

impl From<FlowOp> for Instruction {
    fn from(op: FlowOp) -> Self {
        Self::bare(Opcode::Flow(op))
    }
}

impl From<IoOp> for Instruction {
    fn from(op: IoOp) -> Self {
        Self::bare(Opcode::Io(op))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(literal) => write!(f, "{} {}", self.opcode, literal),
            None => write!(f, "{}", self.opcode),
        }
    }
}
