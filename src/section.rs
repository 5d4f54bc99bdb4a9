//! Section view
//!
//! Treats a jar as an INI-like configuration file: every record carrying a
//! `section: <name>` field is a section, its other fields are settings.
//!
//! ```text
//! section: network
//! port: 6379
//! %%
//! section: storage
//! dir: ./data
//! ```

use crate::query::{Direction, Query};
use crate::store::RecordJar;

/// Field naming a record's section
pub const SECTION_KEY: &str = "section";

/// Section-oriented access to a [`RecordJar`]
pub struct Sections<'a> {
    store: &'a mut RecordJar,
}

impl<'a> Sections<'a> {
    pub(crate) fn new(store: &'a mut RecordJar) -> Self {
        Self { store }
    }

    /// Value of `field` in `section`, or `default`
    pub fn get(&mut self, section: &str, field: &str, default: &str) -> String {
        let query = Query::by(SECTION_KEY, section).field(field);
        self.store.get_or(Direction::This, &query, default)
    }

    /// Set `field` in `section`, creating the field or the section as needed
    pub fn set(&mut self, section: &str, field: &str, value: &str) {
        if self.exists(section) {
            let setting = Query::any().field(field);
            if !self.store.set(Direction::Only, &setting, value) {
                self.store.add(Direction::Only, &setting, value);
            }
        } else {
            let query = Query::by(SECTION_KEY, section).field(field);
            self.store.add(Direction::This, &query, value);
        }
    }

    /// Position on `section` for iteration with [`next`](Self::next)
    ///
    /// Returns false when the section does not exist.
    pub fn list(&mut self, section: &str) -> bool {
        if !self.exists(section) {
            return false;
        }
        self.store.reset_field_cursor();
        true
    }

    /// Next setting of the listed section as `(name, value)`
    pub fn next(&mut self) -> Option<(&str, &str)> {
        loop {
            let field = self.store.next_field()?;
            if field.name != SECTION_KEY {
                break;
            }
        }
        self.store
            .current_field()
            .map(|field| (field.name.as_str(), field.value.as_str()))
    }

    /// Whether `section` exists; moves the cursor onto it when it does
    fn exists(&mut self, section: &str) -> bool {
        self.store
            .get(Direction::This, &Query::by(SECTION_KEY, section))
            .is_some()
    }
}
