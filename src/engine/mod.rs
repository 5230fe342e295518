//! Duration engine
//!
//! Pure computation: given a counter configuration and the local "now",
//! produce the breakdown of the span to (or since) the target and the
//! completion/start status. Nothing here touches timers or the host.

pub mod breakdown;
pub mod target;
pub mod validation;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    state::{CounterConfig, Direction},
};

pub use breakdown::Breakdown;
pub use validation::{validate, ValidConfig};

/// Payload of a `data-update` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
    /// `"count up"` or `"count down"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Whole span in every unit
    pub difference: Breakdown,
    /// Span decomposed into remainders
    pub duration: Breakdown,
    /// Down only: the target has passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Down only: configured completion message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<String>,
    /// Up only: the target has been reached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<bool>,
}

/// Validate `config` and compute the counter result at `now`
pub fn compute(config: &CounterConfig, now: NaiveDateTime) -> Result<CounterResult, ConfigError> {
    let valid = validate(config)?;
    Ok(compute_valid(&valid, config, now))
}

/// Compute a result for an already validated configuration
pub fn compute_valid(
    valid: &ValidConfig,
    config: &CounterConfig,
    now: NaiveDateTime,
) -> CounterResult {
    let target = target::resolve(valid, now);

    // Down measures target - now, Up measures now - target.
    let (from, to) = match valid.direction {
        Direction::Down => (now, target),
        Direction::Up => (target, now),
    };
    let span_ms = (to - from).num_milliseconds();

    let (difference, duration) = if valid.date.is_some() {
        (
            Breakdown::whole_units(from, to),
            Breakdown::remainder(span_ms),
        )
    } else {
        (
            Breakdown::whole_clock_units(from, to),
            Breakdown::clock_remainder(span_ms),
        )
    };

    let out_of_range = difference.out_of_range();
    let (completed, completion, started) = match valid.direction {
        Direction::Down => (Some(out_of_range), config.completion.clone(), None),
        Direction::Up => (None, None, Some(!out_of_range)),
    };

    CounterResult {
        target_date: config.date().map(str::to_string),
        target_time: config.time().map(str::to_string),
        kind: valid.direction.label().to_string(),
        difference,
        duration,
        completed,
        completion,
        started,
    }
}
