//! Tests for program input helpers.

use std::io::{self, BufReader};

use super::input::{read_char, read_line};

#[test]
fn read_char_ascii_then_eof() {
    let mut input = "ab".as_bytes();

    assert_eq!(read_char(&mut input).unwrap(), Some('a'));
    assert_eq!(read_char(&mut input).unwrap(), Some('b'));
    assert_eq!(read_char(&mut input).unwrap(), None);
}

#[test]
fn read_char_multibyte() {
    let mut input = "λ→𝄞".as_bytes();

    assert_eq!(read_char(&mut input).unwrap(), Some('λ'));
    assert_eq!(read_char(&mut input).unwrap(), Some('→'));
    assert_eq!(read_char(&mut input).unwrap(), Some('𝄞'));
    assert_eq!(read_char(&mut input).unwrap(), None);
}

#[test]
fn read_char_across_buffer_boundary() {
    // A one-byte buffer forces the continuation bytes through separate fills
    let mut input = BufReader::with_capacity(1, "é!".as_bytes());

    assert_eq!(read_char(&mut input).unwrap(), Some('é'));
    assert_eq!(read_char(&mut input).unwrap(), Some('!'));
}

#[test]
fn read_char_invalid_lead_byte() {
    let mut input: &[u8] = &[0xFF, b'a'];

    let err = read_char(&mut input).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn read_char_truncated_sequence() {
    let mut input: &[u8] = &[0xCE];

    assert_eq!(read_char(&mut input).unwrap(), None);
}

#[test]
fn read_char_truncated_after_two_bytes() {
    // First two bytes of '→'
    let mut input: &[u8] = &[0xE2, 0x86];

    assert_eq!(read_char(&mut input).unwrap(), None);
}

#[test]
fn read_char_bad_continuation() {
    let mut input: &[u8] = &[0xCE, b'a'];

    let err = read_char(&mut input).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn read_line_keeps_terminator() {
    let mut input = "12\n-3".as_bytes();

    assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("12\n"));
    assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("-3"));
    assert_eq!(read_line(&mut input).unwrap(), None);
}

#[test]
fn read_line_after_read_char() {
    let mut input = "x7\n".as_bytes();

    assert_eq!(read_char(&mut input).unwrap(), Some('x'));
    assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("7\n"));
}
