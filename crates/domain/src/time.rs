//! Time and timestamp helpers.

use std::fmt;

use chrono::{DateTime, Local, Utc};

/// UTC timestamp used for "now" when rendering relative times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

/// How long ago a device was last heard from, bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastSeen {
    /// Less than a minute ago (including timestamps in the future).
    JustNow,
    MinutesAgo(u32),
    HoursAgo(u32),
    /// A day or more ago, shown as an absolute local date and time.
    At(Timestamp),
}

impl LastSeen {
    /// Bucket a backend `last_seen` unix timestamp (seconds, possibly
    /// fractional) relative to `now`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn since(last_seen: f64, now: Timestamp) -> Self {
        let now_secs = now.timestamp_millis() as f64 / 1_000.0;
        let age = now_secs - last_seen;

        if age < MINUTE || age.is_nan() {
            Self::JustNow
        } else if age < HOUR {
            Self::MinutesAgo((age / MINUTE).floor() as u32)
        } else if age < DAY {
            Self::HoursAgo((age / HOUR).floor() as u32)
        } else {
            let millis = (last_seen * 1_000.0).floor() as i64;
            Self::At(DateTime::from_timestamp_millis(millis).unwrap_or_default())
        }
    }
}

impl fmt::Display for LastSeen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JustNow => f.write_str("just now"),
            Self::MinutesAgo(1) => f.write_str("1 minute ago"),
            Self::MinutesAgo(n) => write!(f, "{n} minutes ago"),
            Self::HoursAgo(1) => f.write_str("1 hour ago"),
            Self::HoursAgo(n) => write!(f, "{n} hours ago"),
            Self::At(ts) => write!(
                f,
                "{}",
                ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
            ),
        }
    }
}
