//! Schema subsystem for tabledb
//!
//! Column definitions, record values, and the validation applied to every
//! record before it is stored.
//!
//! # Design Principles
//!
//! - Validation happens before a record is appended, never after
//! - Violations abort the insert; nothing is partially stored
//! - Absent columns are permitted; there is no "required"
//! - No coercion between value types
//! - Deterministic: columns are checked in declaration order

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use types::{duplicate_column, Column, ColumnType, Record, Value};
pub use validator::RecordValidator;
