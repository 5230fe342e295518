//! State management module
//!
//! Counter configuration, scheduler state, and the coordinator that owns both.

pub mod counter;
pub mod counter_config;
pub mod scheduler_state;

// Re-export main types
pub use counter::Counter;
pub use counter_config::{CounterConfig, Direction};
pub use scheduler_state::SchedulerState;
