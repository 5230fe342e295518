//! Configuration error types
//!
//! Errors never escape to the host as panics or failures; the counter turns
//! them into a `data-error` event plus a structured log entry.

use serde_json::json;
use thiserror::Error;

/// Error code logged for an unknown counting direction
pub const INVALID_DIRECTION_CODE: &str = "E000000001";
/// Error code logged for a malformed date or time
pub const INVALID_FORMAT_CODE: &str = "E000000002";

/// Problems with the host-supplied counter configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid type; valid values are \"down\" and \"up\"")]
    InvalidDirection { value: String },

    #[error("Invalid date or time; valid formats are YYYY-MM-DD for date and HH:mm for time")]
    InvalidFormat {
        date: Option<String>,
        time: Option<String>,
    },

    /// Neither date nor time has been supplied yet
    #[error("No date or time configured")]
    NotConfigured,
}

impl ConfigError {
    /// Whether the host should hear about this error at all
    pub fn is_reportable(&self) -> bool {
        !matches!(self, ConfigError::NotConfigured)
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidDirection { .. } => Some(INVALID_DIRECTION_CODE),
            ConfigError::InvalidFormat { .. } => Some(INVALID_FORMAT_CODE),
            ConfigError::NotConfigured => None,
        }
    }

    /// The offending field values, as handed to the host log sink
    pub fn context(&self) -> serde_json::Value {
        match self {
            ConfigError::InvalidDirection { value } => json!({ "type": value }),
            ConfigError::InvalidFormat { date, time } => json!({ "date": date, "time": time }),
            ConfigError::NotConfigured => json!({}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_is_silent() {
        assert!(!ConfigError::NotConfigured.is_reportable());
        assert_eq!(ConfigError::NotConfigured.code(), None);
    }

    #[test]
    fn direction_error_cites_valid_values() {
        let err = ConfigError::InvalidDirection { value: "sideways".into() };
        let message = err.to_string();
        assert!(message.contains("\"down\""));
        assert!(message.contains("\"up\""));
        assert_eq!(err.code(), Some(INVALID_DIRECTION_CODE));
        assert_eq!(err.context(), json!({ "type": "sideways" }));
    }

    #[test]
    fn format_error_echoes_fields() {
        let err = ConfigError::InvalidFormat {
            date: Some("2099-13-01".into()),
            time: None,
        };
        assert!(err.is_reportable());
        assert_eq!(err.context(), json!({ "date": "2099-13-01", "time": null }));
    }
}
