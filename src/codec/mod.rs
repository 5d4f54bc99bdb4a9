//! Codec Module
//!
//! Conversion between the escaped, line-oriented file representation and
//! the unescaped in-memory strings.
//!
//! ## Escape Table
//! ```text
//! ┌──────────────┬───────────┐
//! │ In memory    │ On disk   │
//! ├──────────────┼───────────┤
//! │ newline      │ \n        │
//! │ carriage ret │ \r        │
//! │ tab          │ \t        │
//! │ &            │ \&        │
//! │ \            │ \\        │
//! │ trailing ' ' │ ' ' + \   │
//! └──────────────┴───────────┘
//! ```
//!
//! A single unescaped backslash at the end of a line is a continuation
//! marker, not data. Every function here is pure: output buffers are sized
//! per call from the input they are given.

mod escape;
mod header;

pub use escape::{
    decode, decode_into, decoded_len, encode, encode_into, encoded_len, strip_continuation,
    DecodeError, Mode, CONTINUATION, ESCAPE,
};
pub use header::{check_header, header_line, Encoding, DELIMITER};

/// Trim the blanks (spaces and tabs) the format ignores around names and values
pub fn trim_blanks(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}
