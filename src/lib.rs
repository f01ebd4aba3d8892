//! tabledb - an in-memory table store with schema-validated records
//!
//! Tables hold typed column definitions and an append-only sequence of
//! records. Records are checked against the columns on insert; tables can
//! be created, deleted, have their schema replaced, be listed in full, or
//! be filtered by column equality. Nothing is persisted.
//!
//! ```
//! use tabledb::schema::{Column, Record, Value};
//! use tabledb::store::TableStore;
//!
//! let mut store = TableStore::new();
//! store
//!     .create_table("table1", vec![Column::int("id", 20), Column::string("value", 1024)])
//!     .unwrap();
//! store
//!     .add_record("table1", Record::new().with("id", 1).with("value", "hello"))
//!     .unwrap();
//!
//! assert!(store.add_record("table1", Record::new().with("id", 21)).is_err());
//! assert_eq!(store.filter_records("table1", "id", &Value::Int(1)).unwrap().len(), 1);
//! ```

pub mod api;
pub mod cli;
pub mod observability;
pub mod schema;
pub mod store;
