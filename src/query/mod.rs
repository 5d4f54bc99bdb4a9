//! Query Module
//!
//! Locates a record (and a field inside it) by two independent predicates
//! and applies one operation at the located position.
//!
//! ## Predicates
//! - selector: a field named `key` whose value is `keyval` (either may be
//!   left open)
//! - target: a field named `field` (matches any field when left open)
//!
//! ## Directions
//! ```text
//!   cursor ──► This: cursor, cursor+1, …, cursor-1   (wraps once)
//!              Next: cursor+1, …, cursor-1           (cursor excluded)
//!              Prev: cursor-1, …, cursor+1           (cursor excluded)
//!              Only: cursor
//! ```

mod apply;
mod locate;

use std::fmt;
use std::str::FromStr;

use crate::jar::{Field, Record};

pub(crate) use apply::execute;

/// Search scope relative to the current record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Start at the current record, then continue forward
    #[default]
    This,

    /// Start after the current record, wrapping around
    Next,

    /// Start before the current record, wrapping around backwards
    Prev,

    /// Only the current record
    Only,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::This => "this",
            Direction::Next => "next",
            Direction::Prev => "prev",
            Direction::Only => "only",
        })
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "this" => Ok(Direction::This),
            "next" => Ok(Direction::Next),
            "prev" => Ok(Direction::Prev),
            "only" => Ok(Direction::Only),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// The selector and target predicates of a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Query<'a> {
    /// Selector field name (any name when `None`)
    pub key: Option<&'a str>,

    /// Selector field value (any value when `None`)
    pub keyval: Option<&'a str>,

    /// Target field name (any field when `None`)
    pub field: Option<&'a str>,
}

impl<'a> Query<'a> {
    /// Select records holding `key: keyval`
    pub fn by(key: &'a str, keyval: &'a str) -> Self {
        Self {
            key: Some(key),
            keyval: Some(keyval),
            field: None,
        }
    }

    /// Select any record
    pub fn any() -> Self {
        Self::default()
    }

    /// Target the field named `field`
    pub fn field(mut self, field: &'a str) -> Self {
        self.field = Some(field);
        self
    }

    pub(crate) fn selects(&self, field: &Field) -> bool {
        self.key.map_or(true, |key| field.name == key)
            && self.keyval.map_or(true, |keyval| field.value == keyval)
    }

    pub(crate) fn targets(&self, field: &Field) -> bool {
        self.field.map_or(true, |name| field.name == name)
    }
}

/// What to do at the located position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    /// Read the target field
    Get,

    /// Replace the target field's value
    Set(&'a str),

    /// Extend the target field's value with `delim` then `value`
    Append { value: &'a str, delim: &'a str },

    /// Insert a new `field` into the selected record, creating the record
    /// when nothing matches
    Add(&'a str),

    /// Remove the target field
    DeleteField,

    /// Remove the selected record
    DeleteRecord,
}

/// Result of a successful operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target's value after a get, set, append or add
    Value(String),

    /// The field removed by a field delete
    FieldRemoved(Field),

    /// The record removed by a record delete
    RecordRemoved(Record),
}

impl Outcome {
    /// The value carried by a [`Outcome::Value`]
    pub fn into_value(self) -> Option<String> {
        match self {
            Outcome::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// The store's positions: anchor record and field-stepping position
///
/// Both are plain indices into the jar; every operation that removes or
/// inserts records moves or clears them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub record: Option<usize>,
    pub field: Option<usize>,
}

impl Cursor {
    pub fn at(record: Option<usize>) -> Self {
        Self {
            record,
            field: None,
        }
    }
}
