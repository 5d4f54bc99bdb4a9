//! Flat traversal over every field of a jar

use super::{Field, Jar, Record};

/// Where a field sits within its record and the jar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldInfo {
    /// The field belongs to the first record of the jar
    pub record_first: bool,

    /// The field belongs to the last record of the jar
    pub record_last: bool,

    /// The field is the first of its record
    pub field_first: bool,

    /// The field is the last of its record
    pub field_last: bool,
}

/// Iterator over `(FieldInfo, &Field)` in jar order, then record order
pub struct Traverse<'a> {
    jar: &'a Jar,
    record: usize,
    field: usize,
}

impl<'a> Traverse<'a> {
    pub(crate) fn new(jar: &'a Jar) -> Self {
        Self {
            jar,
            record: 0,
            field: 0,
        }
    }
}

impl<'a> Iterator for Traverse<'a> {
    type Item = (FieldInfo, &'a Field);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record: &'a Record = self.jar.get(self.record)?;
            if let Some(field) = record.get(self.field) {
                let info = FieldInfo {
                    record_first: self.record == 0,
                    record_last: self.record + 1 == self.jar.len(),
                    field_first: self.field == 0,
                    field_last: self.field + 1 == record.len(),
                };
                self.field += 1;
                return Some((info, field));
            }
            self.record += 1;
            self.field = 0;
        }
    }
}
