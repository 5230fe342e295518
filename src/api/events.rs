//! Events emitted to the host

use serde::{Deserialize, Serialize};

use crate::{engine::CounterResult, error::ConfigError};

pub const EVENT_DATA_UPDATE: &str = "data-update";
pub const EVENT_DATA_ERROR: &str = "data-error";

/// An event crossing the host boundary, serialized as `{"event": ..., "detail": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "detail", rename_all = "kebab-case")]
pub enum CounterEvent {
    DataUpdate(CounterResult),
    DataError(ErrorPayload),
}

impl CounterEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CounterEvent::DataUpdate(_) => EVENT_DATA_UPDATE,
            CounterEvent::DataError(_) => EVENT_DATA_ERROR,
        }
    }

    /// Whether the host's uptime indicator should report an error after this event
    pub fn is_error(&self) -> bool {
        matches!(self, CounterEvent::DataError(_))
    }
}

/// Payload of a `data-error` event, echoing the offending configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl From<&ConfigError> for ErrorPayload {
    fn from(err: &ConfigError) -> Self {
        let (kind, date, time) = match err {
            ConfigError::InvalidDirection { value } => (Some(value.clone()), None, None),
            ConfigError::InvalidFormat { date, time } => (None, date.clone(), time.clone()),
            ConfigError::NotConfigured => (None, None, None),
        };
        Self {
            message: err.to_string(),
            kind,
            date,
            time,
        }
    }
}
