//! Device: a networked peripheral reported by the backend.
//!
//! Devices arrive wholesale on every poll and are never mutated client-side.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::RgbColor;

/// Kind of device, as reported in the backend's `type` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceType {
    RgbController,
    ColorMixer,
    Sensor,
    Switch,
    Mixer,
    #[default]
    Unknown,
    /// A type the dashboard does not recognise, kept verbatim.
    Other(String),
}

impl DeviceType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RgbController => "rgb_controller",
            Self::ColorMixer => "color_mixer",
            Self::Sensor => "sensor",
            Self::Switch => "switch",
            Self::Mixer => "mixer",
            Self::Unknown => "unknown",
            Self::Other(name) => name,
        }
    }

    /// Icon shown next to the type name.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::RgbController => "\u{1f3a8}",
            Self::ColorMixer | Self::Mixer => "\u{1f504}",
            Self::Sensor => "\u{1f4ca}",
            Self::Switch => "\u{1f50c}",
            Self::Unknown => "\u{2753}",
            Self::Other(_) => "\u{1f4f1}",
        }
    }

    /// Whether the device drives an RGB LED.
    #[must_use]
    pub fn is_rgb(&self) -> bool {
        matches!(self, Self::RgbController | Self::ColorMixer)
    }
}

impl From<String> for DeviceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "rgb_controller" => Self::RgbController,
            "color_mixer" => Self::ColorMixer,
            "sensor" => Self::Sensor,
            "switch" => Self::Switch,
            "mixer" => Self::Mixer,
            "unknown" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<DeviceType> for String {
    fn from(value: DeviceType) -> Self {
        match value {
            DeviceType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection state reported by the backend.
///
/// Anything other than `"connected"` counts as disconnected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectionStatus {
    Connected,
    #[default]
    Disconnected,
}

impl From<String> for ConnectionStatus {
    fn from(value: String) -> Self {
        if value == "connected" {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

impl From<ConnectionStatus> for String {
    fn from(value: ConnectionStatus) -> Self {
        match value {
            ConnectionStatus::Connected => "connected".to_string(),
            ConnectionStatus::Disconnected => "disconnected".to_string(),
        }
    }
}

/// A device snapshot as returned by `GET /api/devices`.
///
/// Every field tolerates both a missing key and an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "crate::de::null_as_default")]
    pub kind: DeviceType,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub status: ConnectionStatus,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub ip: String,
    /// Unix timestamp in seconds.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub last_seen: f64,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub led_on: bool,
    /// `"r,g,b"`, absent for devices without an LED.
    pub rgb_color: Option<String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub action_button_pressed: bool,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub available: bool,
}

impl Device {
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Current LED color, black when missing or malformed.
    #[must_use]
    pub fn color(&self) -> RgbColor {
        RgbColor::parse_or_black(self.rgb_color.as_deref())
    }

    /// Only color mixers accept the mix-colors action.
    #[must_use]
    pub fn can_mix(&self) -> bool {
        self.kind == DeviceType::ColorMixer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_full_rgb_controller() {
        let json = r#"{
            "id": "esp-rgb-1",
            "type": "rgb_controller",
            "status": "connected",
            "ip": "192.168.1.42",
            "last_seen": 1700000000.25,
            "led_on": true,
            "rgb_color": "255,0,64",
            "action_button_pressed": true,
            "available": false
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.id, "esp-rgb-1");
        assert_eq!(device.kind, DeviceType::RgbController);
        assert!(device.is_online());
        assert_eq!(device.ip, "192.168.1.42");
        assert!((device.last_seen - 1_700_000_000.25).abs() < f64::EPSILON);
        assert!(device.led_on);
        assert_eq!(device.color(), RgbColor::new(255, 0, 64));
        assert!(device.action_button_pressed);
        assert!(!device.available);
    }

    #[test]
    fn should_default_missing_fields() {
        let device: Device =
            serde_json::from_str(r#"{"id": "s1", "type": "sensor", "status": "connected"}"#)
                .unwrap();
        assert_eq!(device.ip, "");
        assert!(!device.led_on);
        assert!(device.rgb_color.is_none());
        assert_eq!(device.color(), RgbColor::BLACK);
        assert!(!device.action_button_pressed);
        assert!(!device.available);
    }

    #[test]
    fn should_default_null_fields() {
        let json = r#"{
            "id": "esp1",
            "type": null,
            "status": null,
            "ip": null,
            "last_seen": null,
            "led_on": null,
            "rgb_color": null,
            "action_button_pressed": null,
            "available": null
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(
            device,
            Device {
                id: "esp1".to_string(),
                ..Device::default()
            }
        );
    }

    #[test]
    fn should_ignore_extra_backend_fields() {
        let json = r#"{
            "id": "d", "type": "switch", "status": "connected",
            "attributes": {"type": "switch"}, "created_at": "2024-01-01T00:00:00"
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.kind, DeviceType::Switch);
    }

    #[test]
    fn should_keep_unrecognised_type_verbatim() {
        let device: Device =
            serde_json::from_str(r#"{"id": "x", "type": "thermostat"}"#).unwrap();
        assert_eq!(device.kind, DeviceType::Other("thermostat".to_string()));
        assert_eq!(device.kind.to_string(), "thermostat");
    }

    #[test]
    fn should_treat_any_non_connected_status_as_offline() {
        for status in ["disconnected", "offline", ""] {
            let json = format!(r#"{{"id": "x", "status": "{status}"}}"#);
            let device: Device = serde_json::from_str(&json).unwrap();
            assert!(!device.is_online(), "status {status:?} should be offline");
        }
    }

    #[test]
    fn should_pick_icon_from_lookup_table() {
        assert_eq!(DeviceType::RgbController.icon(), "\u{1f3a8}");
        assert_eq!(DeviceType::ColorMixer.icon(), "\u{1f504}");
        assert_eq!(DeviceType::Mixer.icon(), "\u{1f504}");
        assert_eq!(DeviceType::Sensor.icon(), "\u{1f4ca}");
        assert_eq!(DeviceType::Switch.icon(), "\u{1f50c}");
        assert_eq!(DeviceType::Unknown.icon(), "\u{2753}");
    }

    #[test]
    fn should_use_generic_icon_for_unrecognised_type() {
        assert_eq!(DeviceType::from("lamp".to_string()).icon(), "\u{1f4f1}");
    }

    #[test]
    fn should_flag_only_rgb_controllers_and_color_mixers_as_rgb() {
        assert!(DeviceType::RgbController.is_rgb());
        assert!(DeviceType::ColorMixer.is_rgb());
        assert!(!DeviceType::Mixer.is_rgb());
        assert!(!DeviceType::Sensor.is_rgb());
        assert!(!DeviceType::Other("rgb".to_string()).is_rgb());
    }

    #[test]
    fn should_only_allow_mixing_on_color_mixers() {
        let mixer = Device {
            kind: DeviceType::ColorMixer,
            ..Device::default()
        };
        let controller = Device {
            kind: DeviceType::RgbController,
            ..Device::default()
        };
        assert!(mixer.can_mix());
        assert!(!controller.can_mix());
    }

    #[test]
    fn should_serialize_type_back_to_wire_name() {
        let device = Device {
            id: "m".to_string(),
            kind: DeviceType::ColorMixer,
            status: ConnectionStatus::Connected,
            ..Device::default()
        };
        let value = serde_json::to_value(&device).unwrap();
        assert_eq!(value["type"], "color_mixer");
        assert_eq!(value["status"], "connected");
    }
}
