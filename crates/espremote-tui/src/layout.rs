//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of each fixed panel (border + one row + border)
const PANEL_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, device address and keybindings
    pub header: Rect,
    /// Connection status
    pub status: Rect,
    /// Toggle switch
    pub toggle: Rect,
    /// Text input and send button
    pub message: Rect,
    /// Last sent text
    pub last_sent: Rect,
    /// Activity log (remaining space)
    pub activity: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(PANEL_HEIGHT), // Header
        Constraint::Length(PANEL_HEIGHT), // Status
        Constraint::Length(PANEL_HEIGHT), // Toggle
        Constraint::Length(PANEL_HEIGHT), // Message
        Constraint::Length(PANEL_HEIGHT), // Last sent
        Constraint::Min(3),               // Activity
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        status: chunks[1],
        toggle: chunks[2],
        message: chunks[3],
        last_sent: chunks[4],
        activity: chunks[5],
    }
}
