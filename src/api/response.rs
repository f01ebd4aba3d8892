//! API response types
//!
//! `{"status":"ok","data":...}` or
//! `{"status":"error","code":"...","message":"..."}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;

/// Success response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub status: String,
    pub data: Value,
}

impl SuccessResponse {
    pub fn new(data: Value) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }

    pub fn empty() -> Self {
        Self::new(Value::Null)
    }
}

/// Error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status: "error".to_string(),
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// Unified response type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response::Success(SuccessResponse::new(data))
    }

    pub fn ok() -> Self {
        Response::Success(SuccessResponse::empty())
    }

    pub fn error(err: &ApiError) -> Self {
        Response::Error(ErrorResponse::from_error(err))
    }

    /// Render as a single JSON line
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"status":"error","code":"TABLEDB_INTERNAL","message":"{}"}}"#,
                e.to_string().replace('"', "'")
            )
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Returns the error code, if this is an error
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Response::Error(e) => Some(&e.code),
            Response::Success(_) => None,
        }
    }

    /// Returns the payload, if this is a success
    pub fn data(&self) -> Option<&Value> {
        match self {
            Response::Success(s) => Some(&s.data),
            Response::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let resp = Response::success(json!([{"id": 1}]));
        let json = resp.to_json();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"id\":1"));
    }

    #[test]
    fn test_ok_has_null_data() {
        let resp = Response::ok();
        assert_eq!(resp.data(), Some(&Value::Null));
        assert_eq!(resp.to_json(), r#"{"status":"ok","data":null}"#);
    }

    #[test]
    fn test_error_response() {
        let err = ApiError::invalid_request("bad");
        let resp = Response::error(&err);
        let json = resp.to_json();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("TABLEDB_INVALID_REQUEST"));
        assert_eq!(resp.error_code(), Some("TABLEDB_INVALID_REQUEST"));
        assert!(!resp.is_success());
    }
}
