//! API error types
//!
//! API errors are pass-through: store and schema errors keep their codes.
//! The API adds only TABLEDB_INVALID_REQUEST for input it cannot parse.

use std::fmt;

use crate::store::StoreError;

/// API-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Request is not valid JSON or has the wrong shape
    InvalidRequest,
}

impl ApiErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "TABLEDB_INVALID_REQUEST",
        }
    }
}

/// API error with preserved store error code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: String,
    message: String,
}

impl ApiError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::InvalidRequest.code().to_string(),
            message: reason.into(),
        }
    }

    /// Wrap a store error, keeping its code
    pub fn from_store_error(err: &StoreError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::from_store_error(&err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_code_preserved() {
        let err = ApiError::from(StoreError::TableNotFound("users".into()));
        assert_eq!(err.code(), "TABLEDB_TABLE_NOT_FOUND");
        assert!(err.message().contains("users"));
    }

    #[test]
    fn test_invalid_request_display() {
        let err = ApiError::invalid_request("missing op");
        assert_eq!(err.to_string(), "TABLEDB_INVALID_REQUEST: missing op");
    }
}
