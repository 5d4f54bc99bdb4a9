//! Store Module
//!
//! The top-level handle tying the jar, its cursors and the text format
//! together.
//!
//! ## Responsibilities
//! - Load a jar from disk and save it back
//! - Track the current record (anchor of directional searches)
//! - Track the current field (for simple forward stepping)
//! - Expose the query engine's operations

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::format::{self, ParseWarning};
use crate::jar::{Field, FieldInfo, Jar, Record, Traverse};
use crate::query::{self, Cursor, Direction, Operation, Outcome, Query};
use crate::section::Sections;

/// An in-memory record jar
///
/// ## Concurrency Model: exclusive owner
///
/// Every operation runs to completion on `&mut self`. The cursors are part
/// of the store's state, so sharing a store across threads means wrapping
/// the whole store in one lock.
#[derive(Debug, Clone, Default)]
pub struct RecordJar {
    /// Load/save configuration
    config: Config,

    /// All records, in jar order
    jar: Jar,

    /// Non-empty records seen when the jar was parsed
    size: usize,

    /// Current record and current field
    cursor: Cursor,

    /// Lines skipped by the last parse
    warnings: Vec<ParseWarning>,
}

impl RecordJar {
    /// Create an empty store
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Load a jar file with the default config
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, Config::default())
    }

    /// Load a jar file
    ///
    /// I/O failures and bad encoding headers abort the load. Malformed lines
    /// are skipped and kept in [`warnings`](Self::warnings), unless the
    /// config is strict.
    pub fn load_with(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let store = Self::from_text(&text, config)?;
        tracing::debug!(
            path = %path.display(),
            records = store.len(),
            size = store.size,
            warnings = store.warnings.len(),
            "loaded jar"
        );
        Ok(store)
    }

    /// Parse a jar from text
    pub fn from_text(text: &str, config: Config) -> Result<Self> {
        let parsed = format::parse(text, &config)?;
        let cursor = Cursor::at((!parsed.jar.is_empty()).then_some(0));
        Ok(Self {
            config,
            jar: parsed.jar,
            size: parsed.size,
            cursor,
            warnings: parsed.warnings,
        })
    }

    /// Save the jar to `path`, replacing its content
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.get_ref().sync_all()?;
        tracing::debug!(path = %path.display(), records = self.len(), "saved jar");
        Ok(())
    }

    /// Write the jar as text
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        format::write(&self.jar, writer, &self.config)
    }

    /// Render the jar as text
    pub fn to_text(&self) -> Result<String> {
        format::render(&self.jar, &self.config)
    }

    /// Release every record and field and reset the store
    pub fn clear(&mut self) {
        self.jar.clear();
        self.size = 0;
        self.cursor = Cursor::default();
        self.warnings.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Non-empty records seen when the jar was parsed
    ///
    /// Not maintained by later mutations; use [`len`](Self::len) for the
    /// current record count.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current number of records
    pub fn len(&self) -> usize {
        self.jar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jar.is_empty()
    }

    pub fn jar(&self) -> &Jar {
        &self.jar
    }

    /// The record directional searches are anchored on
    pub fn current_record(&self) -> Option<&Record> {
        self.cursor.record.and_then(|index| self.jar.get(index))
    }

    /// Position of the current record in jar order
    pub fn current_index(&self) -> Option<usize> {
        self.cursor.record
    }

    /// Lines skipped by the parse that built this store
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Every field in jar order, with first/last flags
    pub fn iter(&self) -> Traverse<'_> {
        self.jar.traverse()
    }

    /// Visit every field in jar order with mutable access
    pub fn mapfold<F>(&mut self, mut visit: F)
    where
        F: FnMut(FieldInfo, &mut Field),
    {
        let records = self.jar.len();
        for (r, record) in self.jar.records_mut().enumerate() {
            let fields = record.len();
            for (f, field) in record.iter_mut().enumerate() {
                let info = FieldInfo {
                    record_first: r == 0,
                    record_last: r + 1 == records,
                    field_first: f == 0,
                    field_last: f + 1 == fields,
                };
                visit(info, field);
            }
        }
    }

    /// Step to the next field of the current record
    ///
    /// Starts at the record's first field; after the last field it returns
    /// `None` once and then starts over.
    pub fn next_field(&mut self) -> Option<&Field> {
        let record = self.cursor.record.and_then(|index| self.jar.get(index))?;
        let next = self.cursor.field.map_or(0, |index| index + 1);
        match record.get(next) {
            Some(field) => {
                self.cursor.field = Some(next);
                Some(field)
            }
            None => {
                self.cursor.field = None;
                None
            }
        }
    }

    /// The field last returned by [`next_field`](Self::next_field)
    pub fn current_field(&self) -> Option<&Field> {
        let record = self.current_record()?;
        record.get(self.cursor.field?)
    }

    /// Restart field stepping at the current record's first field
    pub fn reset_field_cursor(&mut self) {
        self.cursor.field = None;
    }

    // =========================================================================
    // Queries and Mutations
    // =========================================================================

    /// Locate from the current record in `direction` and apply `operation`
    pub fn apply(
        &mut self,
        direction: Direction,
        query: &Query<'_>,
        operation: Operation<'_>,
    ) -> Option<Outcome> {
        query::execute(&mut self.jar, &mut self.cursor, direction, query, operation)
    }

    /// Value of the target field
    pub fn get(&mut self, direction: Direction, query: &Query<'_>) -> Option<String> {
        self.apply(direction, query, Operation::Get)
            .and_then(Outcome::into_value)
    }

    /// Value of the target field, or `default` on a miss
    pub fn get_or(&mut self, direction: Direction, query: &Query<'_>, default: &str) -> String {
        self.get(direction, query)
            .unwrap_or_else(|| default.to_string())
    }

    /// Replace the target field's value
    pub fn set(&mut self, direction: Direction, query: &Query<'_>, value: &str) -> bool {
        self.apply(direction, query, Operation::Set(value)).is_some()
    }

    /// Extend the target field's value with `delim` (if any) and `value`
    pub fn append(
        &mut self,
        direction: Direction,
        query: &Query<'_>,
        value: &str,
        delim: Option<&str>,
    ) -> bool {
        let delim = delim.unwrap_or_default();
        self.apply(direction, query, Operation::Append { value, delim })
            .is_some()
    }

    /// Add a `query.field` field to the selected record
    ///
    /// When no record matches, a new record holding `key: keyval` and the
    /// new field is attached at the head of the jar.
    pub fn add(&mut self, direction: Direction, query: &Query<'_>, value: &str) -> bool {
        self.apply(direction, query, Operation::Add(value)).is_some()
    }

    /// Remove the target field
    pub fn delete_field(&mut self, direction: Direction, query: &Query<'_>) -> Option<Field> {
        match self.apply(direction, query, Operation::DeleteField)? {
            Outcome::FieldRemoved(field) => Some(field),
            _ => None,
        }
    }

    /// Remove the selected record
    pub fn delete_record(&mut self, direction: Direction, query: &Query<'_>) -> Option<Record> {
        match self.apply(direction, query, Operation::DeleteRecord)? {
            Outcome::RecordRemoved(record) => Some(record),
            _ => None,
        }
    }

    /// Section-oriented view of the store
    pub fn sections(&mut self) -> Sections<'_> {
        Sections::new(self)
    }
}
