//! Circular record collection
//!
//! Records are addressed by their position in jar order. Stepping past the
//! last record wraps to the first and vice versa.

use std::collections::vec_deque;
use std::collections::VecDeque;

use super::{Record, Traverse};

/// The circular collection of all records in a store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Jar {
    records: VecDeque<Record>,
}

impl Jar {
    /// Create an empty jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a record before every other record, returning its position
    pub fn push_front(&mut self, record: Record) -> usize {
        self.records.push_front(record);
        0
    }

    /// Attach a record after every other record, returning its position
    pub fn push_back(&mut self, record: Record) -> usize {
        self.records.push_back(record);
        self.records.len() - 1
    }

    /// Detach the record at `index`
    pub fn remove(&mut self, index: usize) -> Option<Record> {
        self.records.remove(index)
    }

    /// Detach the last record if it holds no fields
    pub fn pop_empty_tail(&mut self) -> bool {
        if self.records.back().is_some_and(Record::is_empty) {
            self.records.pop_back();
            true
        } else {
            false
        }
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    pub fn last_mut(&mut self) -> Option<&mut Record> {
        self.records.back_mut()
    }

    /// Position after `index`, wrapping at the end
    pub fn next_index(&self, index: usize) -> usize {
        if self.records.is_empty() {
            return 0;
        }
        (index + 1) % self.records.len()
    }

    /// Position before `index`, wrapping at the start
    pub fn prev_index(&self, index: usize) -> usize {
        match self.records.len() {
            0 => 0,
            len => (index + len - 1) % len,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of fields over all records
    pub fn field_count(&self) -> usize {
        self.records.iter().map(Record::len).sum()
    }

    /// Release every record and field
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records in jar order
    pub fn records(&self) -> vec_deque::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records_mut(&mut self) -> vec_deque::IterMut<'_, Record> {
        self.records.iter_mut()
    }

    /// Every field in jar order, with first/last flags
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse::new(self)
    }
}

impl FromIterator<Record> for Jar {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
