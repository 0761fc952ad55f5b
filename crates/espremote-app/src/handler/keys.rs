//! Key event handlers for the focused control

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the focused control
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys first
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        _ => {}
    }

    match state.focus {
        Focus::Toggle => handle_key_toggle(key),
        Focus::Message => handle_key_message(key),
    }
}

/// Handle key events while the toggle is focused
fn handle_key_toggle(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(' ' | 't') | InputKey::Enter => Some(Message::FlipToggle),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('i') => Some(Message::SetFocus(Focus::Message)),
        _ => None,
    }
}

/// Handle key events while the text input is focused
fn handle_key_message(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitText),
        InputKey::Esc => Some(Message::SetFocus(Focus::Toggle)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::ClearInput),
        InputKey::Char(c) => Some(Message::InputChar(c)),
        _ => None,
    }
}
