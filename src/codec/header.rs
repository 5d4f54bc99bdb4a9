//! Encoding header
//!
//! The optional first line of a jar names its character encoding:
//!
//! ```text
//! %%encoding: US-ASCII
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{JarError, Result};

use super::trim_blanks;

/// Prefix shared by the header, comments and record delimiters
pub const DELIMITER: &str = "%%";

const ENCODING_FIELD: &str = "encoding";

/// Character encodings a jar may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    UsAscii,
}

impl Encoding {
    /// Name as written in the header
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::UsAscii => "US-ASCII",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = JarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Err(JarError::EncodingInvalid),
            "US-ASCII" => Ok(Encoding::UsAscii),
            other => Err(JarError::EncodingUnsupported(other.to_string())),
        }
    }
}

/// Inspect a jar's first line for an encoding header
///
/// Returns `Ok(None)` when the line is not a header (it is then processed as
/// an ordinary line), `Ok(Some(_))` when it declares a supported encoding.
pub fn check_header(line: &str) -> Result<Option<Encoding>> {
    let Some(rest) = line.strip_prefix(DELIMITER) else {
        return Ok(None);
    };
    let Some((name, value)) = rest.split_once(':') else {
        return Ok(None);
    };
    if trim_blanks(name) != ENCODING_FIELD {
        return Ok(None);
    }

    // A second ':' ends the value
    let value = value.split(':').next().unwrap_or_default();
    trim_blanks(value).parse().map(Some)
}

/// Header line (without newline) declaring `encoding`
pub fn header_line(encoding: Encoding) -> String {
    format!("{}{}: {}", DELIMITER, ENCODING_FIELD, encoding)
}
