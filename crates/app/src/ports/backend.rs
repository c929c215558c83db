//! Backend port: the device-management HTTP API consumed by the dashboard.
//!
//! The backend owns discovery, MQTT and persistence; the dashboard only sees
//! the endpoints listed in [`Endpoint`].

use std::fmt::{self, Write as _};
use std::future::Future;

use espdash_domain::api::{ActionResponse, CommandRequest, DevicesResponse};

/// Failure to obtain a usable response from the backend.
///
/// Logical failures (`status != "success"`) are not errors at this level;
/// they arrive as regular responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never completed (network down, CORS, aborted, …).
    #[error("request failed: {0}")]
    Transport(String),

    /// A response arrived but its body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// HTTP method of an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One endpoint of the device-management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Devices,
    Command(&'a str),
    ResetButton(&'a str),
    MixColors,
    Discover,
    Shutdown,
}

impl Endpoint<'_> {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Devices => Method::Get,
            _ => Method::Post,
        }
    }

    /// Path relative to the API origin, with device ids percent-encoded.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Devices => "/api/devices".to_string(),
            Self::Command(id) => format!("/api/device/{}/command", encode_path_segment(id)),
            Self::ResetButton(id) => {
                format!("/api/device/{}/reset_button", encode_path_segment(id))
            }
            Self::MixColors => "/api/devices/mix_colors".to_string(),
            Self::Discover => "/api/discover".to_string(),
            Self::Shutdown => "/api/shutdown".to_string(),
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self.method() {
            Method::Get => "GET",
            Method::Post => "POST",
        };
        write!(f, "{method} {}", self.path())
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// Client of the device-management API.
///
/// Futures are not `Send`: the dashboard runs on a single-threaded event
/// loop. Implementations must decode the body even on non-2xx statuses,
/// since the backend reports logical failures that way.
pub trait DeviceBackend {
    /// `GET /api/devices`.
    fn fetch_devices(&self) -> impl Future<Output = Result<DevicesResponse, BackendError>>;

    /// `POST /api/device/{id}/command`.
    fn send_command(
        &self,
        device_id: &str,
        request: &CommandRequest,
    ) -> impl Future<Output = Result<ActionResponse, BackendError>>;

    /// `POST /api/device/{id}/reset_button`.
    fn reset_button(
        &self,
        device_id: &str,
    ) -> impl Future<Output = Result<ActionResponse, BackendError>>;

    /// `POST /api/devices/mix_colors`.
    fn mix_colors(&self) -> impl Future<Output = Result<ActionResponse, BackendError>>;

    /// `POST /api/discover`.
    fn discover(&self) -> impl Future<Output = Result<ActionResponse, BackendError>>;

    /// `POST /api/shutdown`. The response body is ignored.
    fn shutdown(&self) -> impl Future<Output = Result<(), BackendError>>;
}
