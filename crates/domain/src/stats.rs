//! Aggregate device statistics computed by the backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// RGB controller availability counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RgbStats {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub available: u32,
}

/// Device counters returned alongside the device list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub total: u32,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub online: u32,
    /// Online devices per type name.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub by_type: BTreeMap<String, u32>,
    /// Absent or `null` on backends without RGB tracking.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub rgb_controllers: RgbStats,
}

impl Stats {
    /// Number of distinct device types known to the backend.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }
}
