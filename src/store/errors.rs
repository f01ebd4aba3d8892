//! Store error types
//!
//! Error codes:
//! - TABLEDB_TABLE_ALREADY_EXISTS
//! - TABLEDB_TABLE_NOT_FOUND
//! - schema codes passed through from `SchemaError`

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by table store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A table with this name already exists
    #[error("table '{0}' already exists")]
    TableAlreadyExists(String),

    /// No table with this name exists
    #[error("table '{0}' does not exist")]
    TableNotFound(String),

    /// Column definition or record violates the schema
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl StoreError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::TableAlreadyExists(_) => "TABLEDB_TABLE_ALREADY_EXISTS",
            StoreError::TableNotFound(_) => "TABLEDB_TABLE_NOT_FOUND",
            StoreError::Schema(e) => e.code(),
        }
    }

    /// True if a record was rejected by column validation
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Schema(e) if e.is_validation())
    }

    /// Returns the underlying schema error, if any
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            StoreError::Schema(e) => Some(e),
            _ => None,
        }
    }
}
