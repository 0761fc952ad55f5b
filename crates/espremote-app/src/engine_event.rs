//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The one-shot runner turns them into NDJSON lines.

use espremote_core::{ConnectionStatus, ToggleState};

/// Which device request an event refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Toggle { state: ToggleState },
    Text { text: String },
}

impl RequestKind {
    /// Short name used in event output
    pub fn name(&self) -> &'static str {
        match self {
            RequestKind::Toggle { .. } => "toggle",
            RequestKind::Text { .. } => "text",
        }
    }
}

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A request was handed to the device client
    RequestStarted { request: RequestKind },

    /// The device answered with 2xx
    RequestSucceeded { request: RequestKind },

    /// The device answered with non-2xx or could not be reached
    RequestFailed { request: RequestKind, error: String },

    /// The connectivity flag changed
    ConnectionChanged {
        old: ConnectionStatus,
        new: ConnectionStatus,
    },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event name for logging and serialization
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::RequestStarted { .. } => "request_started",
            EngineEvent::RequestSucceeded { .. } => "request_succeeded",
            EngineEvent::RequestFailed { .. } => "request_failed",
            EngineEvent::ConnectionChanged { .. } => "connection_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }

    /// Whether this event ends a request
    pub fn is_request_outcome(&self) -> bool {
        matches!(
            self,
            EngineEvent::RequestSucceeded { .. } | EngineEvent::RequestFailed { .. }
        )
    }
}
