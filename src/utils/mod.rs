//! Utility module
//!
//! Clock sources for the engine and process signal handling for the demo host.

pub mod clock;
pub mod signals;

// Re-export main items
pub use clock::{Clock, FixedClock, SystemClock};
pub use signals::shutdown_signal;
