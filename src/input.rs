//! Line-oriented console input.

use crate::error::{Error, Result};
use std::io::BufRead;

/// Parses the leading integer of `line`.
///
/// Leading whitespace is skipped and an optional sign is accepted; parsing
/// stops at the first non-digit, so `"7 apples"` yields `7`. Returns `None`
/// when no digit follows, or when the value does not fit in an `i64`.
pub fn parse_leading_int(line: &str) -> Option<i64> {
    let trimmed = line.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Strips one trailing line terminator (`\n` or `\r\n`).
pub fn trim_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Reads one line, without its terminator.
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] when the input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(Error::UnexpectedEof);
    }
    Ok(trim_line_end(&buf).to_string())
}

/// Returns `true` for answers beginning with `y`/`Y` or `s`/`S`.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.bytes().next(), Some(b'y' | b'Y' | b's' | b'S'))
}
