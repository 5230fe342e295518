//! The boundary between the counter and whatever embeds it

use tracing::{debug, error, warn};

use super::events::CounterEvent;

/// Severity passed to the host log sink. The counter only reports
/// configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
}

/// Services the embedding host provides to a counter.
///
/// Calls arrive from the refresh timer task, so implementations must not block.
pub trait Host: Send + Sync {
    /// Deliver an event to the host's listeners
    fn emit(&self, event: CounterEvent);

    /// Structured diagnostics sink
    fn log(&self, level: LogLevel, message: &str, error_code: &str, context: serde_json::Value);

    /// Set or clear the host's health indicator
    fn set_uptime_error(&self, errored: bool);
}

/// Host for the command-line demo: events go to stdout as JSON lines,
/// diagnostics go to `tracing`
#[derive(Debug, Default)]
pub struct StdoutHost;

impl Host for StdoutHost {
    fn emit(&self, event: CounterEvent) {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{}", line),
            Err(e) => error!("Failed to serialize {} event: {}", event.name(), e),
        }
    }

    fn log(&self, level: LogLevel, message: &str, error_code: &str, context: serde_json::Value) {
        match level {
            LogLevel::Error => error!(error_code, %context, "{}", message),
        }
    }

    fn set_uptime_error(&self, errored: bool) {
        if errored {
            warn!("Uptime status: error");
        } else {
            debug!("Uptime status: ok");
        }
    }
}
