//! Data Counter - a countdown/count-up timer engine
//!
//! Given a target date and/or time and a counting direction, a [`Counter`]
//! periodically computes the span to (or since) the target, broken into
//! calendar and clock units, and reports it to its host as events.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::{CounterEvent, ErrorPayload, Host, LogLevel, StdoutHost};
pub use config::Config;
pub use engine::{compute, Breakdown, CounterResult};
pub use error::ConfigError;
pub use state::{Counter, CounterConfig, Direction};
pub use utils::{shutdown_signal, Clock, FixedClock, SystemClock};
