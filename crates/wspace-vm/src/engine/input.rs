//! Reading program input for `readc` and `readn`.

use std::io::{self, BufRead};

/// Read one UTF-8 encoded character.
///
/// Returns `None` at end of input, including input that ends partway through a character.
pub(crate) fn read_char<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<char>> {
    let Some(&lead) = input.fill_buf()?.first() else {
        return Ok(None);
    };
    let width = utf8_width(lead).ok_or_else(|| invalid_utf8(lead))?;

    let mut buf = [0u8; 4];
    match input.read_exact(&mut buf[..width]) {
        Ok(()) => {}
        // Input cut off inside a character counts as exhausted
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e),
    }
    let decoded = std::str::from_utf8(&buf[..width])
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(decoded.chars().next())
}

/// Read one line, terminator included. Returns `None` at end of input.
pub(crate) fn read_line<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8(lead: u8) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 lead byte {lead:#04x}"),
    )
}
