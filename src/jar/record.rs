//! Field and record definitions

use std::collections::vec_deque;
use std::collections::VecDeque;

/// A name/value pair
///
/// Names need not be unique within a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name (left of the first `:`)
    pub name: String,

    /// Unescaped value
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered collection of fields, most recently inserted first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: VecDeque<Field>,
}

impl Record {
    /// Create an empty record
    ///
    /// Empty records only exist transiently while parsing or building.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field at the head of the record
    pub fn insert(&mut self, field: Field) {
        self.fields.push_front(field);
    }

    /// Remove the field at `index`
    pub fn remove(&mut self, index: usize) -> Option<Field> {
        self.fields.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    /// The most recently inserted field
    pub fn head_mut(&mut self) -> Option<&mut Field> {
        self.fields.front_mut()
    }

    /// First field (in record order) named `name`
    pub fn find(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Value of the first field named `name`
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.find(name).map(|f| f.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> vec_deque::IterMut<'_, Field> {
        self.fields.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Field;
    type IntoIter = vec_deque::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a record whose field order matches the iterator order
impl FromIterator<Field> for Record {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
