//! Thread-safe handle over a [`TableStore`]
//!
//! One reader/writer lock guards the whole store. Mutations take the write
//! lock; reads take the read lock and return owned snapshots so no caller
//! holds the lock after a method returns.

use std::sync::Arc;

use parking_lot::RwLock;

use super::errors::StoreResult;
use super::store::TableStore;
use super::table::Table;
use crate::schema::{Column, Record, Value};

/// Cloneable, lock-guarded store handle. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct SharedTableStore {
    inner: Arc<RwLock<TableStore>>,
}

impl SharedTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store
    pub fn from_store(store: TableStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn create_table(&self, name: &str, columns: Vec<Column>) -> StoreResult<()> {
        self.inner.write().create_table(name, columns)
    }

    pub fn delete_table(&self, name: &str) -> StoreResult<Table> {
        self.inner.write().delete_table(name)
    }

    pub fn update_table(&self, name: &str, columns: Vec<Column>) -> StoreResult<()> {
        self.inner.write().update_table(name, columns)
    }

    pub fn add_record(&self, name: &str, record: Record) -> StoreResult<()> {
        self.inner.write().add_record(name, record)
    }

    /// Snapshot of every record in insertion order
    pub fn print_records(&self, name: &str) -> StoreResult<Vec<Record>> {
        self.inner
            .read()
            .print_records(name)
            .map(|records| records.to_vec())
    }

    /// Snapshot of the records whose `column` equals `value`
    pub fn filter_records(
        &self,
        name: &str,
        column: &str,
        value: &Value,
    ) -> StoreResult<Vec<Record>> {
        let store = self.inner.read();
        let hits = store.filter_records(name, column, value)?;
        Ok(hits.into_iter().cloned().collect())
    }

    /// Snapshot of a whole table
    pub fn table(&self, name: &str) -> StoreResult<Table> {
        self.inner.read().table(name).cloned()
    }

    pub fn table_names(&self) -> Vec<String> {
        self.inner
            .read()
            .table_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.inner.read().contains_table(name)
    }

    /// Runs `f` under the read lock.
    ///
    /// The lock is not reentrant: calling another method on this handle (or
    /// a clone of it) from inside `f` can deadlock. Use the `&TableStore`
    /// passed in instead.
    pub fn read<R>(&self, f: impl FnOnce(&TableStore) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Runs `f` under the write lock.
    ///
    /// Calling any method on this handle (or a clone of it) from inside `f`
    /// deadlocks. Use the `&mut TableStore` passed in instead.
    pub fn write<R>(&self, f: impl FnOnce(&mut TableStore) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }
}
