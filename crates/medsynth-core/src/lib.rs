//! Shared data model for the medsynth workspace.
//!
//! Hospital tables are declared as ordered lists of column rules; the
//! generation engine interprets those rules against pre-allocated
//! identifier pools and the geography hierarchy.

pub mod error;
pub mod schema;
pub mod value;

pub use error::{ConfigError, LookupError};
pub use schema::{ColumnRule, ColumnSpec, EntityKind, RowCount, TableSchema};
pub use value::Value;
