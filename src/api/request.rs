//! API request types
//!
//! One JSON object per request, tagged by `op`.

use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use crate::schema::{Column, Record, Value};

/// Unified request envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    CreateTable {
        table: String,
        columns: Vec<Column>,
    },
    DeleteTable {
        table: String,
    },
    UpdateTable {
        table: String,
        columns: Vec<Column>,
    },
    AddRecord {
        table: String,
        record: Record,
    },
    PrintRecords {
        table: String,
    },
    FilterRecords {
        table: String,
        column: String,
        value: Value,
    },
    ListTables,
    DescribeTable {
        table: String,
    },
}

impl Request {
    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid request: {}", e)))
    }

    /// Returns the operation name, as it appears in `op`
    pub fn op(&self) -> &'static str {
        match self {
            Request::CreateTable { .. } => "create_table",
            Request::DeleteTable { .. } => "delete_table",
            Request::UpdateTable { .. } => "update_table",
            Request::AddRecord { .. } => "add_record",
            Request::PrintRecords { .. } => "print_records",
            Request::FilterRecords { .. } => "filter_records",
            Request::ListTables => "list_tables",
            Request::DescribeTable { .. } => "describe_table",
        }
    }
}
