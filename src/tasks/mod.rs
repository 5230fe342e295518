//! Background tasks module
//!
//! The refresh timer that drives periodic counter ticks.

pub mod refresh_timer;

// Re-export main functions
pub use refresh_timer::arm_if_current;
