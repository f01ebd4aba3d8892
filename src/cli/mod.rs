//! CLI module for tabledb
//!
//! Provides command-line interface for:
//! - demo: built-in walkthrough of the table lifecycle
//! - exec: JSON requests on stdin, JSON responses on stdout
//! - check: configuration validation

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{boot, check, demo, exec, run, run_command, serve};
pub use config::{Config, TableConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_requests, write_records, write_response};
