//! The three significant characters of the language.

/// A significant source character. Everything else in a source file is a comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Space,
    Tab,
    LineFeed,
}

impl Glyph {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Space),
            '\t' => Some(Self::Tab),
            '\n' => Some(Self::LineFeed),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Space => ' ',
            Self::Tab => '\t',
            Self::LineFeed => '\n',
        }
    }

    /// Printable `S`/`T`/`L` letter used in debug output and test fixtures.
    pub const fn letter(self) -> char {
        match self {
            Self::Space => 'S',
            Self::Tab => 'T',
            Self::LineFeed => 'L',
        }
    }
}

/// Render a glyph run in `S`/`T`/`L` notation.
pub fn notation(glyphs: &[Glyph]) -> String {
    glyphs.iter().map(|g| g.letter()).collect()
}
