//! Message types for the application (TEA pattern)

use espremote_core::ToggleState;

use crate::input_key::InputKey;
use crate::state::Focus;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Toggle
    // ─────────────────────────────────────────────────────────
    /// Flip the toggle and send the new state
    FlipToggle,

    /// Set the toggle to an explicit state and send it, even if unchanged
    SetToggle(ToggleState),

    /// Send the current toggle state without changing it
    SyncDevice,

    // ─────────────────────────────────────────────────────────
    // Text Input
    // ─────────────────────────────────────────────────────────
    /// Append a character to the pending text
    InputChar(char),
    /// Remove the last character of the pending text
    InputBackspace,
    /// Clear the pending text
    ClearInput,
    /// Replace the pending text
    SetPendingText(String),
    /// Send the pending text if it is non-blank and no send is in flight
    SubmitText,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    SetFocus(Focus),

    // ─────────────────────────────────────────────────────────
    // Request Outcomes
    // ─────────────────────────────────────────────────────────
    /// Device acknowledged a toggle request with 2xx
    ToggleCompleted { state: ToggleState },

    /// Toggle request got a non-2xx or never reached the device
    ToggleFailed { state: ToggleState, error: String },

    /// Device acknowledged a text request with 2xx
    TextSent { text: String },

    /// Text request got a non-2xx or never reached the device
    TextSendFailed { text: String, error: String },
}
