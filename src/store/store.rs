//! In-memory table store
//!
//! The store is the only owner of tables; a table is the only owner of its
//! records. Every operation either completes or leaves the store exactly as
//! it was.

use std::collections::HashMap;

use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::filter::RecordFilter;
use super::table::Table;
use crate::schema::{Column, Record, RecordValidator, Value};

/// Registry of tables keyed by name.
///
/// Single-threaded. Wrap in [`SharedTableStore`](super::SharedTableStore)
/// for access from more than one thread.
#[derive(Debug, Default)]
pub struct TableStore {
    tables: HashMap<String, Table>,
}

impl TableStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the given columns and no records.
    ///
    /// # Errors
    ///
    /// - `TableAlreadyExists` if the name is taken
    /// - `DuplicateColumn` if two columns share a name
    pub fn create_table(&mut self, name: &str, columns: Vec<Column>) -> StoreResult<()> {
        if self.tables.contains_key(name) {
            return Err(StoreError::TableAlreadyExists(name.to_string()));
        }
        RecordValidator::validate_columns(&columns)?;

        debug!(table = name, columns = columns.len(), "table created");
        self.tables
            .insert(name.to_string(), Table::new(name, columns));
        Ok(())
    }

    /// Removes a table and all of its records, returning it.
    pub fn delete_table(&mut self, name: &str) -> StoreResult<Table> {
        let table = self
            .tables
            .remove(name)
            .ok_or_else(|| StoreError::TableNotFound(name.to_string()))?;

        debug!(table = name, records = table.record_count(), "table deleted");
        Ok(table)
    }

    /// Replaces a table's column list. Stored records are not re-checked.
    ///
    /// Never creates a missing table.
    ///
    /// # Errors
    ///
    /// - `TableNotFound` if the table does not exist
    /// - `DuplicateColumn` if two columns share a name
    pub fn update_table(&mut self, name: &str, columns: Vec<Column>) -> StoreResult<()> {
        let table = self.table_mut(name)?;
        RecordValidator::validate_columns(&columns)?;

        let count = columns.len();
        table.replace_columns(columns);
        debug!(table = name, columns = count, "table schema replaced");
        Ok(())
    }

    /// Validates a record against the table's columns and appends it.
    ///
    /// # Errors
    ///
    /// - `TableNotFound` if the table does not exist
    /// - a column validation error; the record is not stored
    pub fn add_record(&mut self, name: &str, record: Record) -> StoreResult<()> {
        let table = self.table_mut(name)?;
        table.insert(record)?;

        debug!(table = name, records = table.record_count(), "record added");
        Ok(())
    }

    /// Returns every record of a table in insertion order
    pub fn print_records(&self, name: &str) -> StoreResult<&[Record]> {
        Ok(self.table(name)?.records())
    }

    /// Returns, in insertion order, the records whose `column` equals `value`.
    ///
    /// Linear scan; records missing the column never match.
    pub fn filter_records(
        &self,
        name: &str,
        column: &str,
        value: &Value,
    ) -> StoreResult<Vec<&Record>> {
        let table = self.table(name)?;
        Ok(RecordFilter::select(table.records(), column, value))
    }

    /// Looks up a table by name
    pub fn table(&self, name: &str) -> StoreResult<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| StoreError::TableNotFound(name.to_string()))
    }

    fn table_mut(&mut self, name: &str) -> StoreResult<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| StoreError::TableNotFound(name.to_string()))
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Table names, sorted
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
