//! Core domain type definitions

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Connection Status
// ─────────────────────────────────────────────────────────────────────────────

/// Connectivity as observed through the most recently resolved request.
///
/// This is not a live connection: there is no heartbeat and no timeout-based
/// re-check. It only changes when a request resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    #[default]
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Disconnected => "Disconnected",
        }
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Toggle State
// ─────────────────────────────────────────────────────────────────────────────

/// The boolean output state mirrored to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    On,
    #[default]
    Off,
}

impl ToggleState {
    /// Value of the `state` query parameter on the `/toggle` endpoint
    pub fn as_query_value(&self) -> &'static str {
        match self {
            ToggleState::On => "ON",
            ToggleState::Off => "OFF",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ToggleState::On => ToggleState::Off,
            ToggleState::Off => ToggleState::On,
        }
    }

    /// Parse a user-supplied value (`on`, `off`, `true`, `1`, ...)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "on" | "true" | "1" => Some(ToggleState::On),
            "off" | "false" | "0" => Some(ToggleState::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for ToggleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Phase
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Activity Log
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Info,
    Warning,
}

impl ActivityLevel {
    pub fn prefix(&self) -> &'static str {
        match self {
            ActivityLevel::Info => "INF",
            ActivityLevel::Warning => "WRN",
        }
    }
}

/// A single line in the activity panel
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub level: ActivityLevel,
    pub message: String,
}

impl ActivityEntry {
    pub fn new(level: ActivityLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ActivityLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ActivityLevel::Warning, message)
    }

    /// Format the timestamp for display (HH:MM:SS)
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
