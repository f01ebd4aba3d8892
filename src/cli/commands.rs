//! CLI command implementations
//!
//! `exec` boot sequence:
//! 1. Load configuration (or defaults)
//! 2. Install the log subscriber
//! 3. Create configured tables
//! 4. Answer requests until stdin closes

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::api::{ApiError, ApiHandler, Response};
use crate::observability::{init_logging, log_event, log_event_with_fields, Event, LogConfig};
use crate::schema::{Column, ColumnType, Record};
use crate::store::{SharedTableStore, StoreResult, TableStore};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_requests, write_records, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Demo => {
            init_logging(&LogConfig::default());
            demo(&mut io::stdout().lock())
        }
        Command::Exec { config } => exec(config.as_deref()),
        Command::Check { config } => check(&config),
    }
}

/// Walk through the basic table lifecycle on a fresh store.
///
/// Stops at the first failing step and reports it; that outcome is still
/// a successful run. The last steps update and delete a table that was
/// never created, so the walkthrough ends on `TableNotFound`.
pub fn demo<W: Write>(out: &mut W) -> CliResult<()> {
    let mut store = TableStore::new();

    if let Err(e) = demo_steps(&mut store, out)? {
        writeln!(out, "Error: {}", e)?;
    }
    out.flush()?;
    Ok(())
}

/// Outer result: output failures. Inner result: store failures.
fn demo_steps<W: Write>(store: &mut TableStore, out: &mut W) -> CliResult<StoreResult<()>> {
    let columns = vec![
        Column::new("id", ColumnType::Int, 1024, 20),
        Column::new("value", ColumnType::String, 1024, 20),
    ];
    if let Err(e) = store.create_table("table1", columns) {
        return Ok(Err(e));
    }

    for (id, value) in [(1, "hello"), (2, "world")] {
        let record = Record::new().with("id", id).with("value", value);
        if let Err(e) = store.add_record("table1", record) {
            return Ok(Err(e));
        }
    }

    writeln!(out, "All records:")?;
    match store.print_records("table1") {
        Ok(records) => write_records(out, records)?,
        Err(e) => return Ok(Err(e)),
    }

    let new_columns = vec![
        Column::new("id", ColumnType::Int, 1024, 20),
        Column::new("name", ColumnType::String, 1024, 20),
        Column::new("email", ColumnType::String, 1024, 20),
    ];
    if let Err(e) = store.update_table("users", new_columns) {
        return Ok(Err(e));
    }

    Ok(store.delete_table("users").map(|_| ()))
}

/// Boot a store and answer stdin requests on stdout
pub fn exec(config_path: Option<&Path>) -> CliResult<()> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_logging(&config.log_config());

    let store = boot(&config, config_path)?;
    let handler = ApiHandler::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let answered = serve(&handler, stdin.lock(), &mut stdout.lock())?;

    let answered = answered.to_string();
    log_event_with_fields(Event::Shutdown, &[("requests", answered.as_str())]);
    Ok(())
}

/// Create a store and seed it from configuration
pub fn boot(config: &Config, config_path: Option<&Path>) -> CliResult<SharedTableStore> {
    log_event(Event::BootStart);
    if let Some(path) = config_path {
        let path = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);
    }

    let store = SharedTableStore::new();
    config.seed(&store)?;
    for table in &config.tables {
        let columns = table.columns.len().to_string();
        log_event_with_fields(
            Event::TableSeeded,
            &[("table", table.name.as_str()), ("columns", columns.as_str())],
        );
    }

    let tables = config.tables.len().to_string();
    log_event_with_fields(Event::BootComplete, &[("tables", tables.as_str())]);
    Ok(store)
}

/// Answer each request line with one response line.
///
/// Returns the number of requests answered. Request failures, including
/// lines that are not UTF-8, are answered and logged; only read and write
/// failures end the loop.
pub fn serve<R: BufRead, W: Write>(
    handler: &ApiHandler,
    reader: R,
    writer: &mut W,
) -> CliResult<usize> {
    let mut answered = 0;
    for line in read_requests(reader) {
        let response = match line? {
            Ok(text) => handler.handle(&text),
            Err(e) => Response::error(&ApiError::invalid_request(format!(
                "Request is not valid UTF-8: {}",
                e
            ))),
        };
        if let Some(code) = response.error_code() {
            log_event_with_fields(Event::RequestFailed, &[("code", code)]);
        }
        write_response(writer, &response)?;
        answered += 1;
    }
    Ok(answered)
}

/// Validate a config file and report what it would create
pub fn check(path: &Path) -> CliResult<()> {
    let config = Config::load(path)?;
    let store = SharedTableStore::new();
    let count = config.seed(&store)?;

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{}: ok ({} table{})",
        path.display(),
        count,
        if count == 1 { "" } else { "s" }
    )?;
    for name in store.table_names() {
        writeln!(out, "  {}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::io::Cursor;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "All records:\n\
             {id: 1, value: \"hello\"}\n\
             {id: 2, value: \"world\"}\n\
             Error: table 'users' does not exist\n"
        );
    }

    #[test]
    fn test_serve_answers_each_line() {
        let handler = ApiHandler::default();
        let input = Cursor::new(
            "{\"op\":\"create_table\",\"table\":\"t\",\"columns\":[{\"name\":\"id\",\"data_type\":\"int\",\"max_int_value\":20}]}\n\
             \n\
             {\"op\":\"add_record\",\"table\":\"t\",\"record\":{\"id\":21}}\n\
             {\"op\":\"add_record\",\"table\":\"t\",\"record\":{\"id\":20}}\n\
             {\"op\":\"print_records\",\"table\":\"t\"}\n",
        );
        let mut out = Vec::new();

        let answered = serve(&handler, input, &mut out).unwrap();
        assert_eq!(answered, 4);

        let lines: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["status"], "ok");
        assert_eq!(lines[1]["code"], "TABLEDB_COLUMN_VALUE_EXCEEDED");
        assert_eq!(lines[2]["status"], "ok");
        assert_eq!(lines[3]["data"], serde_json::json!([{"id": 20}]));
    }

    #[test]
    fn test_serve_answers_bad_utf8_line() {
        let handler = ApiHandler::default();
        let mut input = b"{\"op\":\"list_tables\"}\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"{\"op\":\"list_tables\"}\n");
        let mut out = Vec::new();

        assert_eq!(serve(&handler, Cursor::new(input), &mut out).unwrap(), 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("TABLEDB_INVALID_REQUEST"));
        assert!(lines[2].contains("\"status\":\"ok\""));
    }

    #[test]
    fn test_boot_seeds_tables() {
        let config = Config::from_json(r#"{"tables":[{"name":"users"}]}"#).unwrap();
        let store = boot(&config, None).unwrap();
        assert!(store.contains_table("users"));
    }
}
