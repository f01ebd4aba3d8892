//! Table store for tabledb
//!
//! Owns every table and every record. Supported operations:
//!
//! - create_table
//! - delete_table
//! - update_table (schema replacement, never creates)
//! - add_record (validated, all-or-nothing)
//! - print_records
//! - filter_records (exact equality, linear scan)
//!
//! `TableStore` is single-threaded; `SharedTableStore` puts it behind one
//! reader/writer lock.

mod errors;
mod filter;
mod shared;
#[allow(clippy::module_inception)]
mod store;
mod table;

pub use errors::{StoreError, StoreResult};
pub use filter::RecordFilter;
pub use shared::SharedTableStore;
pub use store::TableStore;
pub use table::Table;
