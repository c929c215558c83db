//! Commands forwarded to a single device through the backend.
//!
//! The command set is backend-defined and open-ended; the dashboard issues
//! the well-known ones itself and forwards anything else verbatim.

use std::fmt;

use crate::color::RgbColor;

const SET_COLOR_PREFIX: &str = "SET_COLOR:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCommand {
    /// Ask the device to report its status.
    Status,
    Restart,
    SetColor(RgbColor),
    Custom(String),
}

impl DeviceCommand {
    /// The string sent in the `command` field of the request body.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Status => "STATUS".to_string(),
            Self::Restart => "RESTART".to_string(),
            Self::SetColor(color) => format!("{SET_COLOR_PREFIX}{}", color.to_wire()),
            Self::Custom(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}
