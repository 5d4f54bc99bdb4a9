//! Directional two-predicate search

use crate::jar::{Jar, Record};

use super::{Direction, Query};

/// When a record counts as found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Intent {
    /// Both a selector and a target field are needed
    Field,

    /// A selector match is enough, as soon as it is seen
    Record,

    /// A selector match is enough, once the whole record has been scanned
    Insert,
}

/// A found record and the fields bound in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Located {
    pub record: usize,
    pub selector: Option<usize>,
    pub target: Option<usize>,
}

/// First of the two match kinds seen in a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seen {
    Nothing,
    Selector,
    Target,
}

/// Record positions examined for `direction`, in order
fn sweep(jar: &Jar, cursor: usize, direction: Direction) -> Vec<usize> {
    let len = jar.len();
    match direction {
        Direction::Only => vec![cursor],
        Direction::This => (0..len).map(|step| (cursor + step) % len).collect(),
        Direction::Next => {
            let mut order = Vec::with_capacity(len.saturating_sub(1));
            let mut index = jar.next_index(cursor);
            while index != cursor {
                order.push(index);
                index = jar.next_index(index);
            }
            order
        }
        Direction::Prev => {
            let mut order = Vec::with_capacity(len.saturating_sub(1));
            let mut index = jar.prev_index(cursor);
            while index != cursor {
                order.push(index);
                index = jar.prev_index(index);
            }
            order
        }
    }
}

/// Scan one record's fields for the selector and target matches
///
/// Whichever kind is seen first is remembered; the record is found when the
/// other kind follows. A single field may satisfy both.
fn scan(
    record: &Record,
    query: &Query<'_>,
    intent: Intent,
) -> Option<(Option<usize>, Option<usize>)> {
    let mut seen = Seen::Nothing;
    let mut selector = None;
    let mut target = None;
    let last = record.len().checked_sub(1)?;

    for (index, field) in record.iter().enumerate() {
        if seen != Seen::Target && query.targets(field) {
            target = Some(index);
            if seen == Seen::Selector {
                return Some((selector, target));
            }
            seen = Seen::Target;
        }
        if seen != Seen::Selector && query.selects(field) {
            selector = Some(index);
            if seen == Seen::Target || intent == Intent::Record {
                return Some((selector, target));
            }
            seen = Seen::Selector;
        }
        if index == last && seen == Seen::Selector && intent == Intent::Insert {
            return Some((selector, None));
        }
    }
    None
}

/// Search the jar from `cursor` in `direction`
pub(crate) fn locate(
    jar: &Jar,
    cursor: Option<usize>,
    direction: Direction,
    query: &Query<'_>,
    intent: Intent,
) -> Option<Located> {
    let cursor = cursor.filter(|&index| index < jar.len())?;

    sweep(jar, cursor, direction).into_iter().find_map(|index| {
        let record = jar.get(index)?;
        let (selector, target) = scan(record, query, intent)?;
        tracing::trace!(record = index, ?selector, ?target, "located");
        Some(Located {
            record: index,
            selector,
            target,
        })
    })
}
