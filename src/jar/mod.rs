//! Jar Module
//!
//! In-memory data model: fields, records and the circular jar holding them.
//!
//! ## Responsibilities
//! - Own every record and field (strict tree: jar → records → fields)
//! - Keep fields most-recent-first inside a record
//! - Circular stepping between records (wrap-around by index arithmetic)
//! - Flat traversal with first/last flags
//!
//! ## Data Structure Choice
//! Records live in a `VecDeque` so new records can be attached at the head
//! as cheaply as parsed ones at the tail; fields use a `VecDeque` for head
//! insertion. Positions are plain indices, so there are no links to repair
//! when something is removed.

mod record;
mod ring;
mod traverse;

pub use record::{Field, Record};
pub use ring::Jar;
pub use traverse::{FieldInfo, Traverse};
