//! Operation dispatch
//!
//! Runs one search and applies one operation at the located position.

use crate::jar::{Field, Jar, Record};

use super::locate::{locate, Intent, Located};
use super::{Cursor, Direction, Operation, Outcome, Query};

impl Operation<'_> {
    fn intent(&self) -> Intent {
        match self {
            Operation::DeleteRecord => Intent::Record,
            Operation::Add(_) => Intent::Insert,
            _ => Intent::Field,
        }
    }
}

/// Locate from `cursor` in `direction` and apply `operation`
///
/// On success the cursor moves to the matched (or created) record and the
/// field-stepping position is cleared. On a miss the cursor is untouched,
/// unless an add created a new record.
pub(crate) fn execute(
    jar: &mut Jar,
    cursor: &mut Cursor,
    direction: Direction,
    query: &Query<'_>,
    operation: Operation<'_>,
) -> Option<Outcome> {
    if matches!(operation, Operation::Add(_)) && query.field.is_none() {
        tracing::debug!("add without a field name");
        return None;
    }

    let Some(located) = locate(jar, cursor.record, direction, query, operation.intent()) else {
        return miss(jar, cursor, query, operation);
    };

    *cursor = Cursor::at(Some(located.record));
    apply(jar, cursor, located, query, operation)
}

fn miss(
    jar: &mut Jar,
    cursor: &mut Cursor,
    query: &Query<'_>,
    operation: Operation<'_>,
) -> Option<Outcome> {
    let Operation::Add(value) = operation else {
        return None;
    };
    let (Some(key), Some(keyval), Some(name)) = (query.key, query.keyval, query.field) else {
        tracing::debug!("add missed and has no selector to create a record from");
        return None;
    };

    let mut record = Record::new();
    record.insert(Field::new(key, keyval));
    record.insert(Field::new(name, value));
    let index = jar.push_front(record);
    tracing::debug!(key, keyval, field = name, "created record");

    *cursor = Cursor::at(Some(index));
    Some(Outcome::Value(value.to_string()))
}

fn apply(
    jar: &mut Jar,
    cursor: &mut Cursor,
    located: Located,
    query: &Query<'_>,
    operation: Operation<'_>,
) -> Option<Outcome> {
    if operation == Operation::DeleteRecord {
        let removed = jar.remove(located.record)?;
        *cursor = Cursor::at((!jar.is_empty()).then_some(0));
        tracing::debug!(
            record = located.record,
            selector = ?located.selector,
            fields = removed.len(),
            "deleted record"
        );
        return Some(Outcome::RecordRemoved(removed));
    }

    let record = jar.get_mut(located.record)?;
    match operation {
        Operation::Get => {
            let field = record.get(located.target?)?;
            Some(Outcome::Value(field.value.clone()))
        }
        Operation::Set(value) => {
            let field = record.get_mut(located.target?)?;
            field.value = value.to_string();
            Some(Outcome::Value(field.value.clone()))
        }
        Operation::Append { value, delim } => {
            let field = record.get_mut(located.target?)?;
            field.value.reserve(delim.len() + value.len());
            field.value.push_str(delim);
            field.value.push_str(value);
            Some(Outcome::Value(field.value.clone()))
        }
        Operation::Add(value) => {
            record.insert(Field::new(query.field?, value));
            Some(Outcome::Value(value.to_string()))
        }
        Operation::DeleteField => {
            let removed = record.remove(located.target?)?;
            tracing::debug!(record = located.record, field = %removed.name, "deleted field");
            if record.is_empty() {
                // An emptied record is dropped along with its last field
                jar.remove(located.record);
                *cursor = Cursor::at((!jar.is_empty()).then_some(0));
            }
            Some(Outcome::FieldRemoved(removed))
        }
        Operation::DeleteRecord => None,
    }
}
