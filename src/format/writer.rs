//! Record-jar writer
//!
//! Flattens a jar back to text: header line, then the fields of every record
//! one per line, with a delimiter line between records.

use std::io::{self, Write};

use crate::codec::{encode_into, header_line, Encoding, Mode, CONTINUATION, DELIMITER};
use crate::config::Config;
use crate::error::Result;
use crate::jar::{Field, Jar};

/// Write `jar` as record-jar text
pub fn write<W: Write>(jar: &Jar, writer: &mut W, config: &Config) -> Result<()> {
    writeln!(writer, "{}", header_line(Encoding::UsAscii))?;

    // Reused across fields, overwritten each time
    let mut line = String::new();
    let records = jar.records().filter(|record| !record.is_empty());
    for (index, record) in records.enumerate() {
        if index > 0 {
            writeln!(writer, "{}", DELIMITER)?;
        }
        // Stored newest first; the parser head-inserts, so write oldest first
        for field in record.iter().rev() {
            write_field(writer, field, config, &mut line)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Render `jar` as a string
pub fn render(jar: &Jar, config: &Config) -> Result<String> {
    let mut out = Vec::new();
    write(jar, &mut out, config)?;
    let text = String::from_utf8(out)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text)
}

fn write_field<W: Write>(
    writer: &mut W,
    field: &Field,
    config: &Config,
    line: &mut String,
) -> io::Result<()> {
    let segments = if config.fold_newlines {
        fold_segments(&field.value)
    } else {
        vec![field.value.as_str()]
    };

    let last = segments.len() - 1;
    for (index, segment) in segments.iter().enumerate() {
        encode_into(line, segment, Mode::Overwrite);
        // An empty value still needs a marker to be read back
        if index < last || line.is_empty() {
            line.push(CONTINUATION);
        }
        if index == 0 {
            writeln!(writer, "{}: {}", field.name, line)?;
        } else {
            writeln!(writer, "{}{}", config.fold_indent, line)?;
        }
    }
    Ok(())
}

/// Split a value after each embedded newline that can start a fold line
///
/// Fold lines are trimmed on read, so a newline followed by a space (or by
/// nothing) stays escaped inside the current line.
fn fold_segments(value: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (index, _) in value.match_indices('\n') {
        let next = index + 1;
        let rest = &value[next..];
        if rest.is_empty() || rest.starts_with(' ') {
            continue;
        }
        segments.push(&value[start..next]);
        start = next;
    }
    segments.push(&value[start..]);
    segments
}
