//! API handler for tabledb
//!
//! Parses a request, runs it against a shared store, and shapes the
//! result into a response. Locking is the store's concern.

use serde_json::{json, Value};

use super::errors::{ApiError, ApiResult};
use super::request::Request;
use super::response::Response;
use crate::schema::Record;
use crate::store::SharedTableStore;

/// Dispatches requests to a [`SharedTableStore`]
#[derive(Debug, Clone, Default)]
pub struct ApiHandler {
    store: SharedTableStore,
}

impl ApiHandler {
    pub fn new(store: SharedTableStore) -> Self {
        Self { store }
    }

    /// The store requests run against
    pub fn store(&self) -> &SharedTableStore {
        &self.store
    }

    /// Handle a raw JSON request string
    pub fn handle(&self, json_request: &str) -> Response {
        match Request::parse(json_request) {
            Ok(request) => self.execute(request),
            Err(e) => Response::error(&e),
        }
    }

    /// Handle a parsed request
    pub fn execute(&self, request: Request) -> Response {
        match self.dispatch(request) {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    fn dispatch(&self, request: Request) -> ApiResult<Value> {
        match request {
            Request::CreateTable { table, columns } => {
                self.store.create_table(&table, columns)?;
                Ok(Value::Null)
            }
            Request::DeleteTable { table } => {
                self.store.delete_table(&table)?;
                Ok(Value::Null)
            }
            Request::UpdateTable { table, columns } => {
                self.store.update_table(&table, columns)?;
                Ok(Value::Null)
            }
            Request::AddRecord { table, record } => {
                self.store.add_record(&table, record)?;
                Ok(Value::Null)
            }
            Request::PrintRecords { table } => {
                let records = self.store.print_records(&table)?;
                records_to_json(&records)
            }
            Request::FilterRecords {
                table,
                column,
                value,
            } => {
                let records = self.store.filter_records(&table, &column, &value)?;
                records_to_json(&records)
            }
            Request::ListTables => Ok(json!(self.store.table_names())),
            Request::DescribeTable { table } => {
                let table = self.store.table(&table)?;
                Ok(json!({
                    "name": table.name(),
                    "columns": table.columns(),
                    "record_count": table.record_count(),
                }))
            }
        }
    }
}

fn records_to_json(records: &[Record]) -> ApiResult<Value> {
    serde_json::to_value(records)
        .map_err(|e| ApiError::invalid_request(format!("Unserializable records: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler_with_table() -> ApiHandler {
        let handler = ApiHandler::default();
        let resp = handler.handle(
            r#"{"op":"create_table","table":"t","columns":[
                {"name":"id","data_type":"int","max_int_value":20},
                {"name":"value","data_type":"string","max_string_length":5}
            ]}"#,
        );
        assert!(resp.is_success());
        handler
    }

    #[test]
    fn test_add_and_print() {
        let handler = handler_with_table();

        let resp = handler.handle(r#"{"op":"add_record","table":"t","record":{"id":1,"value":"a"}}"#);
        assert!(resp.is_success());

        let resp = handler.handle(r#"{"op":"print_records","table":"t"}"#);
        assert_eq!(resp.data(), Some(&json!([{"id": 1, "value": "a"}])));
    }

    #[test]
    fn test_validation_error_code_passes_through() {
        let handler = handler_with_table();

        let resp = handler.handle(r#"{"op":"add_record","table":"t","record":{"id":21}}"#);
        assert_eq!(resp.error_code(), Some("TABLEDB_COLUMN_VALUE_EXCEEDED"));
    }

    #[test]
    fn test_describe_table() {
        let handler = handler_with_table();

        let resp = handler.handle(r#"{"op":"describe_table","table":"t"}"#);
        let data = resp.data().unwrap();
        assert_eq!(data["name"], "t");
        assert_eq!(data["record_count"], 0);
        assert_eq!(data["columns"][0]["data_type"], "int");
    }

    #[test]
    fn test_invalid_json() {
        let handler = ApiHandler::default();
        let resp = handler.handle("{not json");
        assert_eq!(resp.error_code(), Some("TABLEDB_INVALID_REQUEST"));
    }
}
