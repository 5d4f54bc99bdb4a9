//! # recordjar
//!
//! A small in-memory record store backed by the record-jar text format:
//! - Ordered records of name/value fields, separated by `%%` lines
//! - Multi-line values through indented fold lines
//! - Backslash escaping of control characters
//! - Directional search (this / next / prev / only) with get, set, append,
//!   add and delete operations
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        RecordJar                             │
//! │            (load / save / cursors / operations)              │
//! └──────────────┬───────────────────────────────┬──────────────┘
//!                │                               │
//!                ▼                               ▼
//!   ┌────────────────────────┐      ┌────────────────────────┐
//!   │        Format          │      │         Query          │
//!   │  (parser / writer)     │      │   (locate / apply)     │
//!   └───────┬────────┬───────┘      └───────────┬────────────┘
//!           │        │                          │
//!           ▼        └────────────┬─────────────┘
//!   ┌─────────────┐               ▼
//!   │    Codec    │       ┌─────────────┐
//!   │  (escape)   │       │     Jar     │
//!   └─────────────┘       │ (records)   │
//!                         └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use recordjar::{Config, Direction, Query, RecordJar};
//!
//! let text = "name: alpha\nport: 1\n%%\nname: beta\nport: 2\n";
//! let mut jar = RecordJar::from_text(text, Config::default()).unwrap();
//!
//! let port = jar.get(Direction::This, &Query::by("name", "beta").field("port"));
//! assert_eq!(port.as_deref(), Some("2"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod jar;
pub mod format;
pub mod query;
pub mod store;
pub mod section;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{JarError, Result};
pub use config::Config;
pub use jar::{Field, FieldInfo, Jar, Record};
pub use format::{ParseWarning, WarningKind};
pub use query::{Direction, Operation, Outcome, Query};
pub use store::RecordJar;
pub use section::Sections;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recordjar
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
