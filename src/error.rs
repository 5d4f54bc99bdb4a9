//! Error types for recordjar
//!
//! Provides a unified error type for load/save operations. Query misses are
//! not errors: the query engine reports them as `None`/`false`.

use thiserror::Error;

use crate::codec::DecodeError;
use crate::format::WarningKind;

/// Result type alias using JarError
pub type Result<T> = std::result::Result<T, JarError>;

/// Unified error type for recordjar operations
#[derive(Debug, Error)]
pub enum JarError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Encoding Header Errors
    // -------------------------------------------------------------------------
    #[error("encoding invalid: header has no encoding name")]
    EncodingInvalid,

    #[error("encoding unsupported: {0}")]
    EncodingUnsupported(String),

    // -------------------------------------------------------------------------
    // Strict Parse Errors
    // -------------------------------------------------------------------------
    /// An escape sequence could not be decoded (strict loads only)
    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },

    /// A line was malformed (strict loads only)
    #[error("line {line}: {kind}")]
    Malformed { line: usize, kind: WarningKind },
}
