//! Schema error types
//!
//! Error codes:
//! - TABLEDB_COLUMN_TYPE_MISMATCH
//! - TABLEDB_COLUMN_LENGTH_EXCEEDED
//! - TABLEDB_COLUMN_VALUE_EXCEEDED
//! - TABLEDB_DUPLICATE_COLUMN
//!
//! All schema errors reject the operation that raised them. None of them
//! leave the store modified.

use thiserror::Error;

use super::types::ColumnType;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema violations raised while defining columns or validating records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Record value has the wrong type for its column
    #[error("column '{column}' expects a {expected} value, got {actual}")]
    ColumnTypeMismatch {
        column: String,
        expected: ColumnType,
        actual: ColumnType,
    },

    /// String value is longer than the column allows
    #[error("column '{column}' exceeds maximum length of {limit}")]
    ColumnLengthExceeded { column: String, limit: usize },

    /// Int value is above the column's bound
    #[error("column '{column}' exceeds maximum value of {limit}")]
    ColumnValueExceeded { column: String, limit: i64 },

    /// Two columns in one definition share a name
    #[error("column '{column}' is defined more than once")]
    DuplicateColumn { column: String },
}

impl SchemaError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::ColumnTypeMismatch { .. } => "TABLEDB_COLUMN_TYPE_MISMATCH",
            SchemaError::ColumnLengthExceeded { .. } => "TABLEDB_COLUMN_LENGTH_EXCEEDED",
            SchemaError::ColumnValueExceeded { .. } => "TABLEDB_COLUMN_VALUE_EXCEEDED",
            SchemaError::DuplicateColumn { .. } => "TABLEDB_DUPLICATE_COLUMN",
        }
    }

    /// Returns the offending column name
    pub fn column(&self) -> &str {
        match self {
            SchemaError::ColumnTypeMismatch { column, .. }
            | SchemaError::ColumnLengthExceeded { column, .. }
            | SchemaError::ColumnValueExceeded { column, .. }
            | SchemaError::DuplicateColumn { column } => column,
        }
    }

    /// True for errors raised while checking a record (as opposed to a
    /// column definition)
    pub fn is_validation(&self) -> bool {
        !matches!(self, SchemaError::DuplicateColumn { .. })
    }
}
