//! Wire shapes of the device-management HTTP API.
//!
//! Every response carries a `status` field; anything but `"success"` is a
//! logical failure whose `message` is shown verbatim.

use serde::{Deserialize, Serialize};

use crate::command::DeviceCommand;
use crate::device::Device;
use crate::notification::Severity;
use crate::stats::Stats;

/// The `status` field of every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponseStatus {
    Success,
    #[default]
    Error,
    Other(String),
}

impl ResponseStatus {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::from_status(self.as_str())
    }
}

impl From<String> for ResponseStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Other(value),
        }
    }
}

impl From<ResponseStatus> for String {
    fn from(value: ResponseStatus) -> Self {
        match value {
            ResponseStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Body of `GET /api/devices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub status: ResponseStatus,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub devices: Vec<Device>,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub stats: Stats,
    /// Set on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Server time of the snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

/// Body returned by the action endpoints (command, reset, mix, discover).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    /// The backend message, or the status name when none was sent.
    #[must_use]
    pub fn display_message(&self) -> &str {
        self.message.as_deref().unwrap_or(self.status.as_str())
    }
}

/// Body of `POST /api/device/{id}/command`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

impl From<&DeviceCommand> for CommandRequest {
    fn from(command: &DeviceCommand) -> Self {
        Self {
            command: command.to_wire(),
        }
    }
}
