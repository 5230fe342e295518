//! Host boundary module
//!
//! The trait a host implements to embed a counter and the events the
//! counter emits across it.

pub mod events;
pub mod host;

pub use events::{CounterEvent, ErrorPayload, EVENT_DATA_ERROR, EVENT_DATA_UPDATE};
pub use host::{Host, LogLevel, StdoutHost};
