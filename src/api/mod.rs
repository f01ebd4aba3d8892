//! API layer for tabledb
//!
//! A JSON request/response surface over a shared table store. It is a
//! driver for the store, not part of it: every request maps onto one store
//! operation.
//!
//! # Supported Operations
//!
//! - create_table
//! - delete_table
//! - update_table
//! - add_record
//! - print_records
//! - filter_records
//! - list_tables
//! - describe_table

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::ApiHandler;
pub use request::Request;
pub use response::{ErrorResponse, Response, SuccessResponse};
