//! Record-jar parser
//!
//! Builds a jar from text one line at a time.

use crate::codec::{
    check_header, decode, decode_into, strip_continuation, trim_blanks, Mode, DELIMITER,
};
use crate::config::Config;
use crate::error::{JarError, Result};
use crate::jar::{Field, Record};

use super::{ParseWarning, Parsed, WarningKind};

/// Kind of the last line that changed parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Field,
    Delimiter,
}

struct Parser<'c> {
    config: &'c Config,
    parsed: Parsed,
    prev: Prev,
}

/// Parse record-jar text
///
/// Fails only on a bad encoding header, or on the first malformed line when
/// `config.strict` is set.
pub fn parse(text: &str, config: &Config) -> Result<Parsed> {
    let mut parser = Parser::new(config);

    for (index, raw) in text.split_inclusive('\n').enumerate() {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        if index == 0 {
            if let Some(encoding) = check_header(line)? {
                tracing::trace!(%encoding, "encoding header");
                parser.parsed.encoding = encoding;
                continue;
            }
        }
        parser.line(index + 1, line)?;
    }

    Ok(parser.finish())
}

impl<'c> Parser<'c> {
    fn new(config: &'c Config) -> Self {
        let mut parsed = Parsed::default();
        parsed.jar.push_back(Record::new());
        Self {
            config,
            parsed,
            prev: Prev::Start,
        }
    }

    fn line(&mut self, number: usize, line: &str) -> Result<()> {
        match line.as_bytes().first() {
            None => {
                tracing::trace!(line = number, "ignored newline");
                Ok(())
            }
            Some(b' ' | b'\t') => self.fold(number, line),
            Some(_) if line.starts_with(DELIMITER) => {
                self.delimiter(number);
                Ok(())
            }
            Some(_) => self.field(number, line),
        }
    }

    fn fold(&mut self, number: usize, line: &str) -> Result<()> {
        tracing::trace!(line = number, "fold line");
        if self.prev != Prev::Field {
            return self.warn(number, WarningKind::OrphanFold);
        }

        let (content, _) = strip_continuation(trim_blanks(line));
        let appended = match self.parsed.jar.last_mut().and_then(Record::head_mut) {
            Some(field) => decode_into(&mut field.value, content, Mode::Append { delim: "" }),
            None => return self.warn(number, WarningKind::OrphanFold),
        };
        match appended {
            Ok(()) => Ok(()),
            Err(e) => self.warn(number, WarningKind::InvalidEscape(e)),
        }
    }

    fn delimiter(&mut self, number: usize) {
        tracing::trace!(line = number, "delimiter");
        if self.prev == Prev::Field {
            tracing::trace!(line = number, "new record");
            self.parsed.jar.push_back(Record::new());
        }
        self.prev = Prev::Delimiter;
    }

    fn field(&mut self, number: usize, line: &str) -> Result<()> {
        let Some((name, value)) = line.split_once(':') else {
            return self.warn(number, WarningKind::MissingSeparator);
        };

        let name = trim_blanks(name);
        if name.is_empty() {
            return self.warn(number, WarningKind::EmptyName);
        }
        let value = trim_blanks(value);
        if value.is_empty() {
            return self.warn(number, WarningKind::EmptyValue);
        }

        let (value, continued) = strip_continuation(value);
        let value = match decode(value) {
            Ok(value) => value,
            Err(e) => return self.warn(number, WarningKind::InvalidEscape(e)),
        };
        tracing::trace!(line = number, name, continued, "field");

        if let Some(record) = self.parsed.jar.last_mut() {
            record.insert(Field::new(name, value));
        }
        if self.parsed.size == 0 || self.prev == Prev::Delimiter {
            self.parsed.size += 1;
        }
        self.prev = Prev::Field;
        Ok(())
    }

    fn warn(&mut self, line: usize, kind: WarningKind) -> Result<()> {
        if self.config.strict {
            return Err(match kind {
                WarningKind::InvalidEscape(source) => JarError::Decode { line, source },
                kind => JarError::Malformed { line, kind },
            });
        }
        tracing::warn!(line, %kind, "skipping malformed line");
        self.parsed.warnings.push(ParseWarning { line, kind });
        Ok(())
    }

    fn finish(mut self) -> Parsed {
        if self.parsed.jar.pop_empty_tail() {
            tracing::trace!("removed empty last record");
        }
        self.parsed
    }
}
