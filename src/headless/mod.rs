//! Headless mode - NDJSON event output for one-shot commands
//!
//! `espremote toggle on` and `espremote send <TEXT>` run without a TUI and
//! report what happened as newline-delimited JSON on stdout, one event per
//! line, each tagged with an `"event"` field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"request_started","request":"toggle","state":"ON","timestamp":1704700001000}
//! {"event":"request_succeeded","request":"toggle","state":"ON","timestamp":1704700001042}
//! {"event":"connection_changed","status":"connected","timestamp":1704700001042}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use espremote_app::{EngineEvent, RequestKind};
use espremote_core::ConnectionStatus;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A request was sent to the device
    RequestStarted {
        request: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        state: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        timestamp: i64,
    },

    /// The device answered with 2xx
    RequestSucceeded {
        request: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        state: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        timestamp: i64,
    },

    /// The device answered with non-2xx or could not be reached
    RequestFailed {
        request: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        state: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        error: String,
        timestamp: i64,
    },

    /// Connectivity flag changed
    ConnectionChanged {
        status: ConnectionStatus,
        timestamp: i64,
    },

    /// Error occurred before or outside a request
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
    }

    /// Write this event as a single NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn connection_changed(status: ConnectionStatus) -> Self {
        Self::ConnectionChanged {
            status,
            timestamp: Self::now(),
        }
    }

    /// Map an engine event to its headless form.
    ///
    /// Returns `None` for events that have no NDJSON counterpart.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let event = match event {
            EngineEvent::RequestStarted { request } => {
                let (name, state, text) = describe(request);
                Self::RequestStarted {
                    request: name,
                    state,
                    text,
                    timestamp,
                }
            }
            EngineEvent::RequestSucceeded { request } => {
                let (name, state, text) = describe(request);
                Self::RequestSucceeded {
                    request: name,
                    state,
                    text,
                    timestamp,
                }
            }
            EngineEvent::RequestFailed { request, error } => {
                let (name, state, text) = describe(request);
                Self::RequestFailed {
                    request: name,
                    state,
                    text,
                    error: error.clone(),
                    timestamp,
                }
            }
            EngineEvent::ConnectionChanged { new, .. } => Self::connection_changed(*new),
            EngineEvent::Shutdown => return None,
        };
        Some(event)
    }
}

/// Split a request into its name and the field that identifies it
fn describe(request: &RequestKind) -> (&'static str, Option<String>, Option<String>) {
    match request {
        RequestKind::Toggle { state } => (request.name(), Some(state.to_string()), None),
        RequestKind::Text { text } => (request.name(), None, Some(text.clone())),
    }
}
