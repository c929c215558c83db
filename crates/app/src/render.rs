//! Pure mapping from backend snapshots to what the page displays.
//!
//! The view-models here carry every string, color and action a card needs,
//! so UI adapters only lay them out.

use espdash_domain::color::RgbColor;
use espdash_domain::device::Device;
use espdash_domain::stats::Stats;
use espdash_domain::time::{LastSeen, Timestamp};

/// Color used for positive states (online, LED on).
pub const GOOD_COLOR: &str = "#27ae60";
/// Color used for negative states (offline, LED off).
pub const BAD_COLOR: &str = "#e74c3c";

/// Buttons available on a device card, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Send `STATUS`.
    QueryStatus,
    /// Open the color picker.
    PickColor,
    /// Clear a pressed action button.
    ResetButton,
    /// Send `RESTART`.
    Restart,
    /// Trigger the backend color mix.
    MixColors,
}

impl CardAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::QueryStatus => "\u{1f4e1} Status",
            Self::PickColor => "\u{1f3a8} Color",
            Self::ResetButton => "\u{1f504} Reset button",
            Self::Restart => "\u{1f504} Restart",
            Self::MixColors => "\u{1f3a8} Mix",
        }
    }

    /// Button style class suffix.
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::QueryStatus => "primary",
            Self::PickColor => "success",
            Self::ResetButton => "warning",
            Self::Restart => "secondary",
            Self::MixColors => "info",
        }
    }
}

/// A label paired with the color it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub label: &'static str,
    pub color: &'static str,
}

/// LED details shown only for RGB-capable devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbPanel {
    /// `false` while the device's action button is held.
    pub available: bool,
    pub availability_label: &'static str,
    pub led: Indicator,
    pub color: RgbColor,
}

/// Everything one device card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCard {
    pub id: String,
    pub icon: &'static str,
    pub type_name: String,
    pub online: bool,
    pub status: Indicator,
    pub ip: String,
    pub last_seen: LastSeen,
    pub rgb: Option<RgbPanel>,
    pub actions: Vec<CardAction>,
}

impl DeviceCard {
    fn from_device(device: &Device, now: Timestamp) -> Self {
        let online = device.is_online();
        let status = if online {
            Indicator {
                label: "\u{2705} Online",
                color: GOOD_COLOR,
            }
        } else {
            Indicator {
                label: "\u{274c} Offline",
                color: BAD_COLOR,
            }
        };

        let rgb = device.kind.is_rgb().then(|| RgbPanel {
            available: device.available,
            availability_label: if device.available {
                "\u{2705} Available"
            } else {
                "\u{23f8}\u{fe0f} Button pressed"
            },
            led: if device.led_on {
                Indicator {
                    label: "\u{1f7e2} On",
                    color: GOOD_COLOR,
                }
            } else {
                Indicator {
                    label: "\u{1f534} Off",
                    color: BAD_COLOR,
                }
            },
            color: device.color(),
        });

        let mut actions = vec![CardAction::QueryStatus];
        if rgb.is_some() {
            actions.push(CardAction::PickColor);
            if device.action_button_pressed {
                actions.push(CardAction::ResetButton);
            }
        }
        actions.push(CardAction::Restart);
        if device.can_mix() {
            actions.push(CardAction::MixColors);
        }

        Self {
            id: device.id.clone(),
            icon: device.kind.icon(),
            type_name: device.kind.to_string(),
            online,
            status,
            ip: device.ip.clone(),
            last_seen: LastSeen::since(device.last_seen, now),
            rgb,
            actions,
        }
    }
}

/// The device list region of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeviceListView {
    /// No device is connected; a single placeholder is shown.
    #[default]
    Empty,
    Cards(Vec<DeviceCard>),
}

impl DeviceListView {
    /// Placeholder text for [`DeviceListView::Empty`].
    pub const EMPTY_MESSAGE: &'static str = "\u{1f6ab} No connected devices";

    #[must_use]
    pub fn cards(&self) -> &[DeviceCard] {
        match self {
            Self::Empty => &[],
            Self::Cards(cards) => cards,
        }
    }
}

/// Render the device list as of `now`.
#[must_use]
pub fn render(devices: &[Device], now: Timestamp) -> DeviceListView {
    if devices.is_empty() {
        return DeviceListView::Empty;
    }
    DeviceListView::Cards(
        devices
            .iter()
            .map(|device| DeviceCard::from_device(device, now))
            .collect(),
    )
}

/// The statistics panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsView {
    pub total: u32,
    pub online: u32,
    pub device_types: usize,
    pub available_rgb: u32,
}

#[must_use]
pub fn render_stats(stats: &Stats) -> StatsView {
    StatsView {
        total: stats.total,
        online: stats.online,
        device_types: stats.type_count(),
        available_rgb: stats.rgb_controllers.available,
    }
}
