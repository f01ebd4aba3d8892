//! Table: a column list plus an append-only record sequence

use crate::schema::{Column, Record, RecordValidator, SchemaResult};

/// A named table.
///
/// Records are kept in arrival order and are never mutated or removed
/// individually. Replacing the column list does not touch stored records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    records: Vec<Record>,
}

impl Table {
    /// Creates an empty table. Column names are not checked here.
    pub(crate) fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Validates and appends a record. On error nothing is stored.
    pub(crate) fn insert(&mut self, record: Record) -> SchemaResult<()> {
        RecordValidator::new(&self.columns).validate_record(&record)?;
        self.records.push(record);
        Ok(())
    }

    /// Swaps in a new column list, returning the old one
    pub(crate) fn replace_columns(&mut self, columns: Vec<Column>) -> Vec<Column> {
        std::mem::replace(&mut self.columns, columns)
    }
}
