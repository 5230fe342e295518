//! Strict validation of host-supplied counter configuration

use chrono::{NaiveDate, NaiveTime};

use crate::{
    error::ConfigError,
    state::{CounterConfig, Direction},
};

/// A configuration that passed validation and is ready for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidConfig {
    pub direction: Direction,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

pub fn is_valid_direction(direction: &str) -> bool {
    direction.parse::<Direction>().is_ok()
}

/// `YYYY-MM-DD` with exactly four, two and two digits, naming a real day
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if !matches_shape(date, &[4, 2, 2], b'-') {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// `HH:mm` on a 24-hour clock
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    if !matches_shape(time, &[2, 2], b':') {
        return None;
    }
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

pub fn is_valid_date(date: &str) -> bool {
    parse_date(date).is_some()
}

pub fn is_valid_time(time: &str) -> bool {
    parse_time(time).is_some()
}

/// At least one of date/time is present and every present one parses
pub fn has_valid_format(config: &CounterConfig) -> bool {
    check_format(config).is_ok()
}

/// Validate the whole configuration: direction first, then format
pub fn validate(config: &CounterConfig) -> Result<ValidConfig, ConfigError> {
    let direction = config.direction.parse::<Direction>()?;
    let (date, time) = check_format(config)?;
    Ok(ValidConfig {
        direction,
        date,
        time,
    })
}

fn check_format(
    config: &CounterConfig,
) -> Result<(Option<NaiveDate>, Option<NaiveTime>), ConfigError> {
    let (raw_date, raw_time) = (config.date(), config.time());
    if raw_date.is_none() && raw_time.is_none() {
        return Err(ConfigError::NotConfigured);
    }

    let invalid = || ConfigError::InvalidFormat {
        date: raw_date.map(str::to_string),
        time: raw_time.map(str::to_string),
    };

    let date = raw_date.map(|d| parse_date(d).ok_or_else(invalid)).transpose()?;
    let time = raw_time.map(|t| parse_time(t).ok_or_else(invalid)).transpose()?;
    Ok((date, time))
}

/// Digit groups of the given widths joined by `separator`, nothing else
fn matches_shape(value: &str, widths: &[usize], separator: u8) -> bool {
    let groups: Vec<&[u8]> = value.as_bytes().split(|b| *b == separator).collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, width)| group.len() == *width && group.iter().all(u8::is_ascii_digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(direction: &str, date: Option<&str>, time: Option<&str>) -> CounterConfig {
        CounterConfig {
            direction: direction.to_string(),
            date: date.map(str::to_string),
            time: time.map(str::to_string),
            ..CounterConfig::default()
        }
    }

    #[test]
    fn strict_dates() {
        assert!(is_valid_date("2099-01-01"));
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2099-13-01"));
        assert!(!is_valid_date("2099-1-01"));
        assert!(!is_valid_date("99-01-01"));
        assert!(!is_valid_date("2099/01/01"));
        assert!(!is_valid_date("2099-01-01T00:00"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn strict_times() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("9:00"));
        assert!(!is_valid_time("09:00:00"));
        assert!(!is_valid_time("09:00pm"));
    }

    #[test]
    fn validators_are_idempotent() {
        for input in ["2099-01-01", "2099-13-01", "12:30", "bogus"] {
            assert_eq!(is_valid_date(input), is_valid_date(input));
            assert_eq!(is_valid_time(input), is_valid_time(input));
            assert_eq!(is_valid_direction(input), is_valid_direction(input));
        }
    }

    #[test]
    fn direction_checked_before_format() {
        let err = validate(&config("sideways", None, None)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDirection { value: "sideways".into() });
    }

    #[test]
    fn empty_fields_are_not_configured() {
        let err = validate(&config("down", Some(""), Some(""))).unwrap_err();
        assert_eq!(err, ConfigError::NotConfigured);
        assert!(!has_valid_format(&config("down", None, None)));
    }

    #[test]
    fn bad_time_alongside_good_date_is_rejected() {
        let err = validate(&config("up", Some("2099-01-01"), Some("25:00"))).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFormat {
                date: Some("2099-01-01".into()),
                time: Some("25:00".into()),
            }
        );
    }

    #[test]
    fn valid_combinations() {
        let valid = validate(&config("up", Some("2099-01-01"), Some("09:30"))).unwrap();
        assert_eq!(valid.direction, Direction::Up);
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2099, 1, 1));
        assert_eq!(valid.time, NaiveTime::from_hms_opt(9, 30, 0));

        let time_only = validate(&config("down", None, Some("09:30"))).unwrap();
        assert_eq!(time_only.date, None);
        assert!(has_valid_format(&config("down", None, Some("09:30"))));
    }
}
