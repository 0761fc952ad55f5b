//! Configuration types for ESP Remote
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Per-section settings structs with their defaults

use std::time::Duration;

use serde::{Deserialize, Serialize};

use espremote_device::{DEFAULT_DEVICE_ADDRESS, DEFAULT_TIMEOUT_MS};

/// Application settings (.espremote/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub device: DeviceSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the device lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeviceSettings {
    /// `host` or `host:port`, no scheme
    #[serde(default = "default_address")]
    pub address: String,

    /// Per-request timeout in milliseconds (0 = no timeout)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl DeviceSettings {
    /// Timeout to hand to the HTTP client, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_address() -> String {
    DEFAULT_DEVICE_ADDRESS.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Send the initial toggle state once at startup so the connection
    /// status reflects the device without user interaction
    #[serde(default = "default_true")]
    pub sync_on_startup: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            sync_on_startup: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Number of request outcomes kept in the activity panel
    #[serde(default = "default_activity_lines")]
    pub activity_lines: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            activity_lines: default_activity_lines(),
        }
    }
}

fn default_activity_lines() -> usize {
    50
}

fn default_true() -> bool {
    true
}
