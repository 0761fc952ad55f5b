//! Application state (Model in TEA pattern)
//!
//! [`ControlState`] holds the five fields mirrored from the device requests
//! and is replaced wholesale on every change: each transition consumes the
//! old value and returns the next one. [`AppState`] wraps it with UI-only
//! concerns (focus, phase, activity log).

use std::collections::VecDeque;

use espremote_core::{ActivityEntry, AppPhase, ConnectionStatus, ToggleState};

use crate::config::Settings;

/// The view-model mirrored from device request outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    /// Text being edited, not yet sent
    pub pending_text: String,
    /// Output state mirrored to the device
    pub toggle: ToggleState,
    /// Last text the device accepted; never rolled back by a failed send
    pub last_sent_text: Option<String>,
    /// Residue of the most recently resolved request
    pub connection: ConnectionStatus,
    /// A text send is in flight
    pub is_sending: bool,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submit would issue a request
    pub fn can_send(&self) -> bool {
        !self.is_sending && !self.pending_text.trim().is_empty()
    }

    pub fn with_pending_text(self, pending_text: impl Into<String>) -> Self {
        Self {
            pending_text: pending_text.into(),
            ..self
        }
    }

    pub fn with_toggle(self, toggle: ToggleState) -> Self {
        Self { toggle, ..self }
    }

    pub fn with_connection(self, connection: ConnectionStatus) -> Self {
        Self { connection, ..self }
    }

    /// `idle -> sending`
    pub fn begin_send(self) -> Self {
        Self {
            is_sending: true,
            ..self
        }
    }

    /// `sending -> idle` after a 2xx
    pub fn text_sent(self, text: impl Into<String>) -> Self {
        Self {
            pending_text: String::new(),
            last_sent_text: Some(text.into()),
            connection: ConnectionStatus::Connected,
            is_sending: false,
            ..self
        }
    }

    /// `sending -> idle` after a non-2xx or transport error.
    ///
    /// Pending and last-sent text are kept as they were.
    pub fn text_send_failed(self) -> Self {
        Self {
            connection: ConnectionStatus::Disconnected,
            is_sending: false,
            ..self
        }
    }
}

/// Which control receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Toggle,
    Message,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Toggle => Focus::Message,
            Focus::Message => Focus::Toggle,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Device-mirrored view-model
    pub control: ControlState,

    /// Focused control
    pub focus: Focus,

    /// Running or quitting
    pub phase: AppPhase,

    /// Device address for display in the header
    pub device_address: String,

    /// Loaded settings
    pub settings: Settings,

    /// Most recent request outcomes, newest last
    pub activity: VecDeque<ActivityEntry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            control: ControlState::new(),
            focus: Focus::default(),
            phase: AppPhase::Running,
            device_address: settings.device.address.clone(),
            activity: VecDeque::new(),
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Append to the activity log, evicting the oldest entry when full
    pub fn record_activity(&mut self, entry: ActivityEntry) {
        let capacity = self.settings.ui.activity_lines;
        if capacity == 0 {
            return;
        }
        while self.activity.len() >= capacity {
            self.activity.pop_front();
        }
        self.activity.push_back(entry);
    }
}
