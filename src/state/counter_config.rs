//! Counter configuration as supplied by the host

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Counting direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Time elapsed since the target
    Up,
    /// Time remaining until the target
    Down,
}

impl Direction {
    /// Human-readable label used in the `type` field of results
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "count up",
            Direction::Down => "count down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ConfigError::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

/// Raw counter configuration. Values are kept exactly as the host sent them;
/// validation happens when the counter starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Counting direction, `"up"` or `"down"`
    #[serde(rename = "type")]
    pub direction: String,
    /// Target date, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Target time, `HH:mm`
    pub time: Option<String>,
    /// Message reported once a countdown completes
    pub completion: Option<String>,
    /// Refresh interval in seconds; hosts may send a number or a string
    #[serde(deserialize_with = "refresh_from_any")]
    pub refresh: String,
}

impl CounterConfig {
    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn time(&self) -> Option<&str> {
        non_empty(&self.time)
    }

    /// The refresh interval after integer coercion, or `None` when the
    /// recurring timer should stay disabled
    pub fn refresh_interval(&self) -> Option<Duration> {
        let seconds = leading_integer(&self.refresh)?;
        if seconds > 0 {
            Some(Duration::from_secs(seconds as u64))
        } else {
            None
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Down.to_string(),
            date: None,
            time: None,
            completion: None,
            refresh: "1".to_string(),
        }
    }
}

fn refresh_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse the leading integer of `raw`, ignoring anything after the digits
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}
