//! Main update function - handles state transitions (TEA pattern)

use espremote_core::{ActivityEntry, AppPhase, ConnectionStatus, ToggleState};

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Toggle
        // ─────────────────────────────────────────────────────────
        Message::FlipToggle => {
            let next = state.control.toggle.flipped();
            set_toggle(state, next)
        }

        Message::SetToggle(next) => set_toggle(state, next),

        Message::SyncDevice => UpdateResult::action(UpdateAction::SendToggle {
            state: state.control.toggle,
        }),

        // ─────────────────────────────────────────────────────────
        // Text Input
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            let mut text = std::mem::take(&mut state.control.pending_text);
            text.push(c);
            replace_pending_text(state, text);
            UpdateResult::none()
        }

        Message::InputBackspace => {
            let mut text = std::mem::take(&mut state.control.pending_text);
            text.pop();
            replace_pending_text(state, text);
            UpdateResult::none()
        }

        Message::ClearInput => {
            replace_pending_text(state, String::new());
            UpdateResult::none()
        }

        Message::SetPendingText(text) => {
            replace_pending_text(state, text);
            UpdateResult::none()
        }

        Message::SubmitText => handle_submit_text(state),

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext | Message::FocusPrevious => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::SetFocus(focus) => {
            state.focus = focus;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Request Outcomes
        // ─────────────────────────────────────────────────────────
        Message::ToggleCompleted { state: toggle } => {
            set_connection(state, ConnectionStatus::Connected);
            state.record_activity(ActivityEntry::info(format!("Toggle {toggle} acknowledged")));
            UpdateResult::none()
        }

        Message::ToggleFailed {
            state: toggle,
            error,
        } => {
            set_connection(state, ConnectionStatus::Disconnected);
            state.record_activity(ActivityEntry::warn(format!("Toggle {toggle} failed: {error}")));
            UpdateResult::none()
        }

        Message::TextSent { text } => {
            state.record_activity(ActivityEntry::info(format!("Sent \"{text}\"")));
            let control = std::mem::take(&mut state.control);
            state.control = control.text_sent(text);
            UpdateResult::none()
        }

        Message::TextSendFailed { text, error } => {
            state.record_activity(ActivityEntry::warn(format!(
                "Sending \"{text}\" failed: {error}"
            )));
            let control = std::mem::take(&mut state.control);
            state.control = control.text_send_failed();
            UpdateResult::none()
        }
    }
}

/// Store the new toggle value and request that it be sent
fn set_toggle(state: &mut AppState, next: ToggleState) -> UpdateResult {
    let control = std::mem::take(&mut state.control);
    state.control = control.with_toggle(next);
    UpdateResult::action(UpdateAction::SendToggle { state: next })
}

fn set_connection(state: &mut AppState, connection: ConnectionStatus) {
    let control = std::mem::take(&mut state.control);
    state.control = control.with_connection(connection);
}

fn replace_pending_text(state: &mut AppState, text: String) {
    let control = std::mem::take(&mut state.control);
    state.control = control.with_pending_text(text);
}

/// Blank text and in-flight sends are no-ops: no request, no state change
fn handle_submit_text(state: &mut AppState) -> UpdateResult {
    if !state.control.can_send() {
        return UpdateResult::none();
    }

    let text = state.control.pending_text.clone();
    let control = std::mem::take(&mut state.control);
    state.control = control.begin_send();
    UpdateResult::action(UpdateAction::SendText { text })
}
