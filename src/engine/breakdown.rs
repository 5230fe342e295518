//! Unit breakdowns of a signed span between two instants

use chrono::{Datelike, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Days in 400 Gregorian years and months in the same period
const DAYS_PER_400_YEARS: i64 = 146_097;
const MONTHS_PER_400_YEARS: i64 = 4_800;

/// A span expressed in calendar/time units. The calendar units are only
/// present when the counter targets a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl Breakdown {
    /// Span from `from` to `to`, each unit counting the whole span on its own.
    /// Positive when `to` is later than `from`.
    pub fn whole_units(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        let span = (to - from).num_milliseconds();
        let months = month_diff(from, to);
        Self {
            years: Some(months / 12),
            months: Some(months),
            weeks: Some(span / WEEK_MS),
            days: Some(span / DAY_MS),
            ..Self::clock_units(span)
        }
    }

    /// Clock-only variant of [`Breakdown::whole_units`]
    pub fn whole_clock_units(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self::clock_units((to - from).num_milliseconds())
    }

    /// Span decomposed largest unit first, each unit holding the remainder
    /// left by the ones above it
    pub fn remainder(span_ms: i64) -> Self {
        let sign = span_ms.signum();
        let abs = span_ms.abs();

        let total_days = abs / DAY_MS;
        let total_months = total_days * MONTHS_PER_400_YEARS / DAYS_PER_400_YEARS;
        let days_left = total_days - total_months * DAYS_PER_400_YEARS / MONTHS_PER_400_YEARS;

        Self {
            years: Some(sign * (total_months / 12)),
            months: Some(sign * (total_months % 12)),
            weeks: Some(sign * (days_left / 7)),
            days: Some(sign * (days_left % 7)),
            hours: sign * (abs % DAY_MS / HOUR_MS),
            ..Self::clock_remainder(span_ms)
        }
    }

    /// Clock-only remainder decomposition; hours are not rolled into days
    pub fn clock_remainder(span_ms: i64) -> Self {
        let sign = span_ms.signum();
        let abs = span_ms.abs();
        Self {
            hours: sign * (abs / HOUR_MS),
            minutes: sign * (abs % HOUR_MS / MINUTE_MS),
            seconds: sign * (abs % MINUTE_MS / SECOND_MS),
            milliseconds: sign * (abs % SECOND_MS),
            ..Self::default()
        }
    }

    /// True when any unit is negative
    pub fn out_of_range(&self) -> bool {
        self.values().any(|v| v < 0)
    }

    /// Present unit values, largest unit first
    pub fn values(&self) -> impl Iterator<Item = i64> {
        [self.years, self.months, self.weeks, self.days]
            .into_iter()
            .flatten()
            .chain([self.hours, self.minutes, self.seconds, self.milliseconds])
    }

    fn clock_units(span: i64) -> Self {
        Self {
            hours: span / HOUR_MS,
            minutes: span / MINUTE_MS,
            seconds: span / SECOND_MS,
            milliseconds: span,
            ..Self::default()
        }
    }
}

/// Whole calendar months from `from` to `to`, truncated toward zero
fn month_diff(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let mut months = i64::from(to.year() - from.year()) * 12
        + i64::from(to.month()) - i64::from(from.month());

    let anchor = shift_months(from, months);
    if to >= from {
        if anchor > to {
            months -= 1;
        }
    } else if anchor < to {
        months += 1;
    }
    months
}

fn shift_months(instant: NaiveDateTime, months: i64) -> NaiveDateTime {
    let Ok(magnitude) = u32::try_from(months.unsigned_abs()) else {
        return instant;
    };
    let shifted = if months >= 0 {
        instant.checked_add_months(Months::new(magnitude))
    } else {
        instant.checked_sub_months(Months::new(magnitude))
    };
    shifted.unwrap_or(instant)
}
