//! Target instant resolution

use chrono::{NaiveDateTime, NaiveTime};

use super::validation::ValidConfig;

/// Resolve the instant the counter measures against.
///
/// A time-only target is re-anchored to the date of `now` on every call, so
/// a running counter jumps by a day when the local date rolls over.
pub fn resolve(config: &ValidConfig, now: NaiveDateTime) -> NaiveDateTime {
    let time = config.time.unwrap_or(NaiveTime::MIN);
    config.date.unwrap_or_else(|| now.date()).and_time(time)
}
