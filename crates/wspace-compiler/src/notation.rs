//! Letter notation for programs.
//!
//! `S`, `T` and `L` stand for space, tab and line feed; every other character is
//! dropped. Handy for writing programs in tests and on the command line.

use wspace_bytecode::Glyph;

/// Convert `S`/`T`/`L` notation to source text.
pub fn from_notation(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            'S' => Some(Glyph::Space),
            'T' => Some(Glyph::Tab),
            'L' => Some(Glyph::LineFeed),
            _ => None,
        })
        .map(Glyph::as_char)
        .collect()
}

/// Convert source text to `S`/`T`/`L` notation, dropping comments.
pub fn to_notation(source: &str) -> String {
    source
        .chars()
        .filter_map(Glyph::from_char)
        .map(Glyph::letter)
        .collect()
}
