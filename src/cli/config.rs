//! Configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "log_level": "info",
//!   "log_format": "compact",
//!   "tables": [
//!     { "name": "users",
//!       "columns": [ { "name": "id", "data_type": "int", "max_int_value": 1000 } ] }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::{LogConfig, LogFormat, LOG_LEVELS};
use crate::schema::Column;
use crate::store::SharedTableStore;

use super::errors::{CliError, CliResult};

/// A table to create at boot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// One of trace, debug, info, warn, error (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// compact or json (default: compact)
    #[serde(default)]
    pub log_format: LogFormat,

    /// Tables created before the first request
    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            tables: Vec::new(),
        }
    }
}

impl Config {
    /// Load and validate configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of: {}.",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        let mut names = HashSet::new();
        for table in &self.tables {
            if table.name.trim().is_empty() {
                return Err(CliError::config_error("Table name must not be empty"));
            }
            if !names.insert(table.name.as_str()) {
                return Err(CliError::config_error(format!(
                    "Table '{}' is declared more than once",
                    table.name
                )));
            }
        }

        Ok(())
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }

    /// Create every declared table in `store`, in declaration order.
    ///
    /// Returns the number of tables created.
    pub fn seed(&self, store: &SharedTableStore) -> CliResult<usize> {
        for table in &self.tables {
            store
                .create_table(&table.name, table.columns.clone())
                .map_err(|e| {
                    CliError::boot_failed(format!("Cannot create table '{}': {}", table.name, e))
                })?;
        }
        Ok(self.tables.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config(), LogConfig::default());
    }

    #[test]
    fn test_tables_parsed() {
        let config = Config::from_json(
            r#"{"tables":[{"name":"users","columns":[
                {"name":"id","data_type":"int","max_int_value":1000},
                {"name":"email","data_type":"string","max_string_length":64}
            ]}]}"#,
        )
        .unwrap();

        assert_eq!(config.tables.len(), 1);
        let cols = &config.tables[0].columns;
        assert_eq!(cols[0].data_type, ColumnType::Int);
        assert_eq!(cols[1].max_string_length, 64);
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = Config::from_json(r#"{"log_level":"loud"}"#).unwrap_err();
        assert_eq!(err.code_str(), "TABLEDB_CLI_CONFIG_ERROR");
        assert!(err.message().contains("loud"));
    }

    #[test]
    fn test_bad_log_format_rejected() {
        let err = Config::from_json(r#"{"log_format":"xml"}"#).unwrap_err();
        assert_eq!(err.code_str(), "TABLEDB_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let err = Config::from_json(r#"{"tables":[{"name":"a"},{"name":"a"}]}"#).unwrap_err();
        assert!(err.message().contains("more than once"));
    }

    #[test]
    fn test_seed_creates_tables() {
        let config = Config::from_json(r#"{"tables":[{"name":"a"},{"name":"b"}]}"#).unwrap();
        let store = SharedTableStore::new();

        assert_eq!(config.seed(&store).unwrap(), 2);
        assert_eq!(store.table_names(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_seed_surfaces_duplicate_columns() {
        let config = Config::from_json(
            r#"{"tables":[{"name":"a","columns":[
                {"name":"x","data_type":"int"},{"name":"x","data_type":"string"}
            ]}]}"#,
        )
        .unwrap();

        let err = config.seed(&SharedTableStore::new()).unwrap_err();
        assert_eq!(err.code_str(), "TABLEDB_CLI_BOOT_FAILED");
    }
}
