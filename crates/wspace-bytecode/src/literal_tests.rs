//! Tests for the literal codec.

use super::glyph::Glyph;
use super::literal::{Literal, LiteralError, decode_number, encode_number};

#[test]
fn decode_positive() {
    // +1001
    assert_eq!(decode_number(" \t  \t"), Ok(9));
}

#[test]
fn decode_negative() {
    // -101
    assert_eq!(decode_number("\t\t \t"), Ok(-5));
}

#[test]
fn decode_sign_only_is_zero() {
    assert_eq!(decode_number(" "), Ok(0));
    assert_eq!(decode_number("\t"), Ok(0));
}

#[test]
fn decode_ignores_leading_zero_bits() {
    assert_eq!(decode_number("    \t"), Ok(1));
}

#[test]
fn decode_empty_fails() {
    assert_eq!(decode_number(""), Err(LiteralError::Empty));
}

#[test]
fn decode_rejects_foreign_characters() {
    assert_eq!(
        decode_number("x\t"),
        Err(LiteralError::InvalidGlyph {
            found: 'x',
            position: 0
        })
    );
    assert_eq!(
        decode_number(" \t\n"),
        Err(LiteralError::InvalidGlyph {
            found: '\n',
            position: 2
        })
    );
}

#[test]
fn decode_extremes() {
    assert_eq!(decode_number(&encode_number(i64::MAX)), Ok(i64::MAX));
    assert_eq!(decode_number(&encode_number(i64::MIN)), Ok(i64::MIN));
}

#[test]
fn decode_overflow() {
    // +1 followed by 63 zero bits = 2^63
    let raw = format!(" \t{}", " ".repeat(63));
    assert_eq!(decode_number(&raw), Err(LiteralError::Overflow { bits: 64 }));

    let raw = format!(" {}", "\t".repeat(80));
    assert_eq!(decode_number(&raw), Err(LiteralError::Overflow { bits: 80 }));
}

#[test]
fn encode_is_shortest() {
    assert_eq!(encode_number(0), " ");
    assert_eq!(encode_number(1), " \t");
    assert_eq!(encode_number(-2), "\t\t ");
    assert_eq!(encode_number(72), " \t  \t   ");
}

#[test]
fn codec_roundtrip_over_range() {
    let values = (-1024..=1024)
        .chain([i64::MIN, i64::MIN + 1, i64::MAX, i64::MAX - 1])
        .chain((0..63).map(|shift| 1i64 << shift))
        .chain((0..63).map(|shift| -(1i64 << shift)));

    for n in values {
        let raw = encode_number(n);
        assert_eq!(decode_number(&raw), Ok(n), "roundtrip failed for {n}");
    }
}

#[test]
fn literal_rejects_non_glyphs() {
    assert_eq!(Literal::new(""), Err(LiteralError::Empty));
    assert!(matches!(
        Literal::new(" a"),
        Err(LiteralError::InvalidGlyph { found: 'a', .. })
    ));
}

#[test]
fn literal_from_glyphs() {
    let literal = Literal::from_glyphs(&[Glyph::Tab, Glyph::Tab, Glyph::Space]).unwrap();
    assert_eq!(literal.decode(), Ok(-2));
    assert_eq!(literal.notation(), "TTS");
    assert_eq!(literal.to_string(), "-2");
}

#[test]
fn literal_display_falls_back_to_notation() {
    let literal = Literal::new(format!(" {}", "\t".repeat(70))).unwrap();
    assert!(literal.decode().is_err());
    assert_eq!(literal.to_string(), format!("<S{}>", "T".repeat(70)));
}
