//! Client-local system status: backend reachability and dashboard uptime.

use std::fmt;

/// Seconds elapsed since the dashboard started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uptime(u64);

impl Uptime {
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    /// Advance by one second.
    pub fn tick(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

/// Formats as `HH:MM:SS`. Hours keep counting past 24.
impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3_600;
        let minutes = (self.0 % 3_600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Aggregate connectivity indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Normal,
    Degraded,
}

impl Connectivity {
    /// Indicator dot color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Normal => "#27ae60",
            Self::Degraded => "#e74c3c",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "\u{2705} System running normally",
            Self::Degraded => "\u{26a0}\u{fe0f} Connection problems",
        }
    }
}

/// Client-side view of the system, lost on page reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemStatus {
    /// Whether the last completed poll reached the backend.
    pub mqtt: bool,
    /// The page was served, so the web server is assumed up.
    pub webserver: bool,
    pub uptime: Uptime,
}

impl Default for SystemStatus {
    fn default() -> Self {
        Self {
            mqtt: false,
            webserver: true,
            uptime: Uptime::default(),
        }
    }
}

impl SystemStatus {
    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        if self.mqtt && self.webserver {
            Connectivity::Normal
        } else {
            Connectivity::Degraded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_zero_uptime() {
        assert_eq!(Uptime::default().to_string(), "00:00:00");
    }

    #[test]
    fn should_zero_pad_each_field() {
        assert_eq!(Uptime::from_secs(3_661).to_string(), "01:01:01");
        assert_eq!(Uptime::from_secs(59).to_string(), "00:00:59");
        assert_eq!(Uptime::from_secs(60).to_string(), "00:01:00");
    }

    #[test]
    fn should_roll_minutes_into_hours() {
        assert_eq!(Uptime::from_secs(3_599).to_string(), "00:59:59");
        assert_eq!(Uptime::from_secs(3_600).to_string(), "01:00:00");
    }

    #[test]
    fn should_keep_counting_hours_past_a_day() {
        assert_eq!(Uptime::from_secs(86_399).to_string(), "23:59:59");
        assert_eq!(Uptime::from_secs(86_400).to_string(), "24:00:00");
        assert_eq!(Uptime::from_secs(360_000).to_string(), "100:00:00");
    }

    #[test]
    fn should_advance_by_one_second_per_tick() {
        let mut uptime = Uptime::default();
        for _ in 0..3_661 {
            uptime.tick();
        }
        assert_eq!(uptime.as_secs(), 3_661);
        assert_eq!(uptime.to_string(), "01:01:01");
    }

    #[test]
    fn should_start_degraded_until_first_poll() {
        let status = SystemStatus::default();
        assert!(!status.mqtt);
        assert!(status.webserver);
        assert_eq!(status.connectivity(), Connectivity::Degraded);
    }

    #[test]
    fn should_be_normal_when_backend_and_webserver_are_up() {
        let status = SystemStatus {
            mqtt: true,
            ..SystemStatus::default()
        };
        assert_eq!(status.connectivity(), Connectivity::Normal);
    }

    #[test]
    fn should_use_distinct_colors_per_state() {
        assert_ne!(
            Connectivity::Normal.color(),
            Connectivity::Degraded.color()
        );
    }
}
