//! Observability for tabledb
//!
//! Structured logging through `tracing`, plus the named lifecycle events
//! the driver reports.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on store operations
//! 3. The store logs successful mutations at DEBUG; it never logs its own
//!    failures, which are returned to the caller
//!
//! # Usage
//!
//! ```ignore
//! use tabledb::observability::{init_logging, log_event, Event, LogConfig};
//!
//! init_logging(&LogConfig::default());
//! log_event(Event::BootStart);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_logging, LogConfig, LogFormat, LOG_LEVELS};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let rendered = render_fields(fields);
    if event.is_failure() {
        tracing::warn!(event = event.as_str(), fields = %rendered);
    } else {
        tracing::info!(event = event.as_str(), fields = %rendered);
    }
}

/// Renders fields as `k=v` pairs in key order
fn render_fields(fields: &[(&str, &str)]) -> String {
    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);
    sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fields_sorted() {
        let out = render_fields(&[("table", "users"), ("columns", "2")]);
        assert_eq!(out, "columns=2 table=users");
    }

    #[test]
    fn test_log_event() {
        // no subscriber required; must not panic
        log_event(Event::BootStart);
        log_event_with_fields(Event::RequestFailed, &[("code", "X")]);
    }
}
