//! CLI argument definitions using clap
//!
//! Commands:
//! - tabledb demo
//! - tabledb exec [--config <path>]
//! - tabledb check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tabledb - an in-memory table store with schema-validated records
#[derive(Parser, Debug)]
#[command(name = "tabledb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the built-in walkthrough against a fresh store
    Demo,

    /// Read JSON requests from stdin, one per line, and answer each on stdout
    Exec {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a configuration file and exit
    Check {
        /// Path to configuration file
        #[arg(long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
