//! Marker tables: glyph runs that select a category, then an operation within it.
//!
//! Each table is a prefix-free code over the three glyphs. Lookups compare the input
//! against every marker in the table and keep the longest one that matches, so a
//! one-glyph marker (`S` for Stack) never shadows a two-glyph marker sharing its
//! first glyph (`TS` for Arithmetic vs. `TT` for Heap).

use crate::glyph::Glyph::{self, LineFeed as L, Space as S, Tab as T};
use crate::instructions::{ArithmeticOp, Category, FlowOp, HeapOp, IoOp, Opcode, StackOp};

/// A marker: the exact glyph run that selects a table entry.
pub type Marker = &'static [Glyph];

const CATEGORIES: &[(Marker, Category)] = &[
    (&[S], Category::Stack),
    (&[T, S], Category::Arithmetic),
    (&[T, T], Category::Heap),
    (&[L], Category::Flow),
    (&[T, L], Category::Io),
];

const STACK: &[(Marker, Opcode)] = &[
    (&[S], Opcode::Stack(StackOp::Push)),
    (&[L, S], Opcode::Stack(StackOp::Duplicate)),
    (&[T, S], Opcode::Stack(StackOp::Copy)),
    (&[L, T], Opcode::Stack(StackOp::Swap)),
    (&[L, L], Opcode::Stack(StackOp::Discard)),
    (&[T, L], Opcode::Stack(StackOp::Slide)),
];

const ARITHMETIC: &[(Marker, Opcode)] = &[
    (&[S, S], Opcode::Arithmetic(ArithmeticOp::Add)),
    (&[S, T], Opcode::Arithmetic(ArithmeticOp::Subtract)),
    (&[S, L], Opcode::Arithmetic(ArithmeticOp::Multiply)),
    (&[T, S], Opcode::Arithmetic(ArithmeticOp::Divide)),
    (&[T, T], Opcode::Arithmetic(ArithmeticOp::Modulo)),
];

const HEAP: &[(Marker, Opcode)] = &[
    (&[S], Opcode::Heap(HeapOp::Store)),
    (&[T], Opcode::Heap(HeapOp::Retrieve)),
];

const FLOW: &[(Marker, Opcode)] = &[
    (&[S, S], Opcode::Flow(FlowOp::Mark)),
    (&[S, T], Opcode::Flow(FlowOp::Call)),
    (&[S, L], Opcode::Flow(FlowOp::Jump)),
    (&[T, S], Opcode::Flow(FlowOp::JumpIfZero)),
    (&[T, T], Opcode::Flow(FlowOp::JumpIfNegative)),
    (&[T, L], Opcode::Flow(FlowOp::Return)),
    (&[L, L], Opcode::Flow(FlowOp::End)),
];

const IO: &[(Marker, Opcode)] = &[
    (&[S, S], Opcode::Io(IoOp::OutputChar)),
    (&[S, T], Opcode::Io(IoOp::OutputNumber)),
    (&[T, S], Opcode::Io(IoOp::ReadChar)),
    (&[T, T], Opcode::Io(IoOp::ReadNumber)),
];

/// The category marker table.
pub fn category_markers() -> &'static [(Marker, Category)] {
    CATEGORIES
}

/// The operation marker table of a category.
pub fn operation_markers(category: Category) -> &'static [(Marker, Opcode)] {
    match category {
        Category::Stack => STACK,
        Category::Arithmetic => ARITHMETIC,
        Category::Heap => HEAP,
        Category::Flow => FLOW,
        Category::Io => IO,
    }
}

/// Longest marker in `table` that prefixes `input`, with its length in glyphs.
fn longest_match<V: Copy>(table: &[(Marker, V)], input: &[Glyph]) -> Option<(V, usize)> {
    table
        .iter()
        .filter(|(marker, _)| input.starts_with(marker))
        .max_by_key(|(marker, _)| marker.len())
        .map(|&(marker, value)| (value, marker.len()))
}

/// Classify the category marker at the start of `input`.
pub fn match_category(input: &[Glyph]) -> Option<(Category, usize)> {
    longest_match(CATEGORIES, input)
}

/// Classify the operation marker at the start of `input` within `category`.
pub fn match_operation(category: Category, input: &[Glyph]) -> Option<(Opcode, usize)> {
    longest_match(operation_markers(category), input)
}

/// Category and operation markers that encode `opcode`.
pub fn markers_for(opcode: Opcode) -> (Marker, Marker) {
    let category = opcode.category();
    let category_marker = CATEGORIES
        .iter()
        .find(|(_, c)| *c == category)
        .map(|(m, _)| *m)
        .expect("every category has a marker");
    let operation_marker = operation_markers(category)
        .iter()
        .find(|(_, op)| *op == opcode)
        .map(|(m, _)| *m)
        .expect("every opcode has a marker");
    (category_marker, operation_marker)
}
