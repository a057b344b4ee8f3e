//! Glyph lexer.
//!
//! Produces one `Lexeme` per significant character. Runs of any other characters are
//! skipped by the lexer itself, so comments never reach the tokenizer.

use logos::Logos;
use wspace_bytecode::Glyph;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^ \t\n]+")]
enum GlyphToken {
    #[token(" ")]
    Space,

    #[token("\t")]
    Tab,

    #[token("\n")]
    LineFeed,
}

impl From<GlyphToken> for Glyph {
    fn from(token: GlyphToken) -> Self {
        match token {
            GlyphToken::Space => Glyph::Space,
            GlyphToken::Tab => Glyph::Tab,
            GlyphToken::LineFeed => Glyph::LineFeed,
        }
    }
}

/// A significant character and its byte offset in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub glyph: Glyph,
    pub offset: usize,
}

/// Filter `source` down to its glyphs.
pub fn lex(source: &str) -> Vec<Lexeme> {
    GlyphToken::lexer(source)
        .spanned()
        .filter_map(|(token, span)| {
            token.ok().map(|token| Lexeme {
                glyph: token.into(),
                offset: span.start,
            })
        })
        .collect()
}
