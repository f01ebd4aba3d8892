//! Observable lifecycle events for the tabledb driver
//!
//! Events are explicit and typed. The core store never emits them; they
//! belong to whatever boots and drives a store.

use std::fmt;

/// Lifecycle events logged by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Driver startup begins
    BootStart,
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// A table declared in configuration was created
    TableSeeded,
    /// Store ready to serve requests
    BootComplete,
    /// A request was answered with an error
    RequestFailed,
    /// Input exhausted, driver exiting
    Shutdown,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TableSeeded => "TABLE_SEEDED",
            Event::BootComplete => "BOOT_COMPLETE",
            Event::RequestFailed => "REQUEST_FAILED",
            Event::Shutdown => "SHUTDOWN",
        }
    }

    /// Failures are logged at WARN, everything else at INFO
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::RequestFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
