//! Value escaping
//!
//! Encoding and decoding functions for single-line field values.

use thiserror::Error;

/// Escape introducer
pub const ESCAPE: char = '\\';

/// Trailing marker protecting a value's final space from line trimming
pub const CONTINUATION: char = '\\';

/// How an encode/decode call writes into its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Replace the destination content
    Overwrite,

    /// Keep the destination content and add `delim` followed by the new content
    Append { delim: &'a str },
}

/// Failure to decode an escaped value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown escape sequence '\\{found}' at byte {position}")]
    UnknownEscape { position: usize, found: char },

    #[error("dangling backslash at byte {position}")]
    DanglingBackslash { position: usize },
}

fn escape_char(c: char) -> Option<char> {
    match c {
        '\n' => Some('n'),
        '\r' => Some('r'),
        '\t' => Some('t'),
        '&' => Some('&'),
        '\\' => Some('\\'),
        _ => None,
    }
}

fn unescape_char(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '&' => Some('&'),
        '\\' => Some('\\'),
        _ => None,
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Length in bytes of `src` once encoded, continuation marker included
pub fn encoded_len(src: &str) -> usize {
    let body: usize = src
        .chars()
        .map(|c| if escape_char(c).is_some() { 2 } else { c.len_utf8() })
        .sum();
    body + usize::from(src.ends_with(' '))
}

fn escape_copy(dest: &mut String, src: &str) {
    for c in src.chars() {
        match escape_char(c) {
            Some(mnemonic) => {
                dest.push(ESCAPE);
                dest.push(mnemonic);
            }
            None => dest.push(c),
        }
    }
}

/// Encode a raw value into a form safe for a single text line
pub fn encode(src: &str) -> String {
    let mut out = String::with_capacity(encoded_len(src));
    encode_into(&mut out, src, Mode::Overwrite);
    out
}

/// Encode `src` into `dest` according to `mode`
///
/// In append mode the delimiter is escaped as well. A continuation marker is
/// added when the written content ends in a space.
pub fn encode_into(dest: &mut String, src: &str, mode: Mode<'_>) {
    match mode {
        Mode::Overwrite => {
            dest.clear();
            dest.reserve(encoded_len(src));
        }
        Mode::Append { delim } => {
            dest.reserve(encoded_len(delim) + encoded_len(src));
            escape_copy(dest, delim);
        }
    }
    escape_copy(dest, src);
    if dest.ends_with(' ') {
        dest.push(CONTINUATION);
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Upper bound in bytes of `src` once decoded
pub fn decoded_len(src: &str) -> usize {
    let mut len = 0;
    let mut chars = src.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(next) = chars.next() {
                len += unescape_char(next).map_or(next.len_utf8(), char::len_utf8);
            }
        } else {
            len += c.len_utf8();
        }
    }
    len
}

fn unescape_copy(dest: &mut String, src: &str) -> Result<(), DecodeError> {
    let mut chars = src.char_indices();
    while let Some((position, c)) = chars.next() {
        if c != ESCAPE {
            dest.push(c);
            continue;
        }
        match chars.next() {
            Some((_, found)) => match unescape_char(found) {
                Some(raw) => dest.push(raw),
                None => return Err(DecodeError::UnknownEscape { position, found }),
            },
            None => return Err(DecodeError::DanglingBackslash { position }),
        }
    }
    Ok(())
}

/// Decode an escaped value
pub fn decode(src: &str) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(decoded_len(src));
    unescape_copy(&mut out, src)?;
    Ok(out)
}

/// Decode `src` into `dest` according to `mode`
///
/// `dest` is left untouched when decoding fails.
pub fn decode_into(dest: &mut String, src: &str, mode: Mode<'_>) -> Result<(), DecodeError> {
    match mode {
        Mode::Overwrite => {
            *dest = decode(src)?;
        }
        Mode::Append { delim } => {
            let mut decoded = String::with_capacity(decoded_len(delim) + decoded_len(src));
            unescape_copy(&mut decoded, delim)?;
            unescape_copy(&mut decoded, src)?;
            dest.push_str(&decoded);
        }
    }
    Ok(())
}

/// Split a trailing continuation marker off a trimmed line fragment
///
/// Only an odd run of trailing backslashes ends in a marker; an even run is
/// made of escaped backslashes that belong to the value.
pub fn strip_continuation(s: &str) -> (&str, bool) {
    let run = s.bytes().rev().take_while(|&b| b == b'\\').count();
    if run % 2 == 1 {
        (&s[..s.len() - 1], true)
    } else {
        (s, false)
    }
}
