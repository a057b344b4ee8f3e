//! Sign-prefixed binary literals.
//!
//! A literal is a sign glyph followed by zero or more bit glyphs:
//! - Sign: space = positive, tab = negative
//! - Bits: space = 0, tab = 1, most significant first
//!
//! The line-feed terminator is not part of the literal. An empty bit run reads as zero,
//! and leading zero bits are harmless.

use std::fmt;

use crate::glyph::Glyph;

/// Errors produced while decoding a literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("malformed literal: missing sign glyph")]
    Empty,

    #[error("malformed literal: unexpected {found:?} at position {position}")]
    InvalidGlyph { found: char, position: usize },

    #[error("malformed literal: {bits}-bit magnitude does not fit in a 64-bit integer")]
    Overflow { bits: usize },
}

/// Decode a raw literal (sign + bits, terminator stripped) into an integer.
pub fn decode_number(raw: &str) -> Result<i64, LiteralError> {
    let mut chars = raw.chars();
    let negative = match chars.next() {
        None => return Err(LiteralError::Empty),
        Some(' ') => false,
        Some('\t') => true,
        Some(found) => return Err(LiteralError::InvalidGlyph { found, position: 0 }),
    };

    let overflow = || LiteralError::Overflow {
        bits: raw.chars().count() - 1,
    };

    let mut magnitude: u64 = 0;
    for (i, c) in chars.enumerate() {
        let bit = match c {
            ' ' => 0,
            '\t' => 1,
            found => {
                return Err(LiteralError::InvalidGlyph {
                    found,
                    position: i + 1,
                });
            }
        };
        magnitude = magnitude
            .checked_mul(2)
            .and_then(|m| m.checked_add(bit))
            .ok_or_else(overflow)?;
    }

    let value = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    value.ok_or_else(overflow)
}

/// Encode an integer as the shortest raw literal (no leading zero bits).
pub fn encode_number(n: i64) -> String {
    let sign = if n < 0 { Glyph::Tab } else { Glyph::Space };
    let magnitude = n.unsigned_abs();

    let mut out = String::new();
    out.push(sign.as_char());
    if magnitude != 0 {
        for digit in format!("{magnitude:b}").chars() {
            out.push(if digit == '1' { '\t' } else { ' ' });
        }
    }
    out
}

/// A raw, undecoded literal operand.
///
/// Holds the glyphs exactly as they appeared in source. Decoding is deferred until the
/// owning instruction executes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal(Box<str>);

impl Literal {
    /// Wrap a raw glyph run, checking that it only holds sign/bit glyphs.
    pub fn new(raw: impl Into<Box<str>>) -> Result<Self, LiteralError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(LiteralError::Empty);
        }
        if let Some((position, found)) = raw.char_indices().find(|&(_, c)| c != ' ' && c != '\t')
        {
            return Err(LiteralError::InvalidGlyph { found, position });
        }
        Ok(Self(raw))
    }

    /// Build a literal from tokenized glyphs.
    pub fn from_glyphs(glyphs: &[Glyph]) -> Result<Self, LiteralError> {
        Self::new(glyphs.iter().map(|g| g.as_char()).collect::<String>())
    }

    /// The shortest literal for `n`.
    pub fn encode(n: i64) -> Self {
        Self(encode_number(n).into_boxed_str())
    }

    pub fn decode(&self) -> Result<i64, LiteralError> {
        decode_number(&self.0)
    }

    /// Raw glyph characters (space/tab).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `S`/`T` rendering of the raw glyphs.
    pub fn notation(&self) -> String {
        self.0
            .chars()
            .filter_map(Glyph::from_char)
            .map(Glyph::letter)
            .collect()
    }
}

/// Shows the decoded value, or the raw notation when the literal does not decode.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Ok(n) => write!(f, "{n}"),
            Err(_) => write!(f, "<{}>", self.notation()),
        }
    }
}

impl serde::Serialize for Literal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.notation())
    }
}
