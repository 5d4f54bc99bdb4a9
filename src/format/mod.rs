//! Format Module
//!
//! Reads record-jar text into a [`Jar`] and writes it back.
//!
//! ## File Format
//! ```text
//! %%encoding: US-ASCII          optional header, first line only
//! name: value                   field line, split at the first ':'
//! other: first part\n\          trailing '\' = continues on a fold line
//!  second part                  fold line (leading blank)
//! %%                            record delimiter / comment
//! name: next record
//! ```
//!
//! Loading is best effort: structural problems (I/O, encoding header) abort,
//! malformed lines are skipped and reported as [`ParseWarning`]s.

mod parser;
mod writer;

use thiserror::Error;

use crate::codec::{DecodeError, Encoding};
use crate::jar::Jar;

pub use parser::parse;
pub use writer::{render, write};

/// Why a line was skipped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarningKind {
    #[error("field line has no ':' separator")]
    MissingSeparator,

    #[error("field line has an empty name")]
    EmptyName,

    #[error("field line has an empty value")]
    EmptyValue,

    #[error("fold line does not follow a field")]
    OrphanFold,

    #[error("invalid escape: {0}")]
    InvalidEscape(DecodeError),
}

/// A recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number
    pub line: usize,

    pub kind: WarningKind,
}

/// Result of parsing a jar
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    /// Parsed records, in file order
    pub jar: Jar,

    /// Number of non-empty records seen
    pub size: usize,

    /// Encoding declared by the header (US-ASCII when absent)
    pub encoding: Encoding,

    /// Lines that were skipped
    pub warnings: Vec<ParseWarning>,
}
