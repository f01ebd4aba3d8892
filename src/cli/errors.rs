//! CLI-specific error types
//!
//! CLI errors end the process with a non-zero exit status. Store errors
//! raised by individual requests are not CLI errors; they are answered on
//! stdout and the loop continues.

use std::fmt;
use std::io;

/// What stopped the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Config file missing, malformed, or invalid
    ConfigError,
    /// stdin/stdout failure
    IoError,
    /// Configured tables could not be created
    BootFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "TABLEDB_CLI_CONFIG_ERROR",
            Self::IoError => "TABLEDB_CLI_IO_ERROR",
            Self::BootFailed => "TABLEDB_CLI_BOOT_FAILED",
        }
    }
}

/// Error returned by CLI commands
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

/// JSON only reaches the CLI as configuration; requests are decoded by the
/// API layer and answered there.
impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("Invalid config JSON: {}", e))
    }
}

pub type CliResult<T> = Result<T, CliError>;
