//! Semantic style builders.

use espremote_core::{ActivityLevel, ConnectionStatus, ToggleState};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

/// Titled glass block, title highlighted when focused
pub fn titled_block(title: &str, focused: bool) -> Block<'static> {
    let title_style = if focused {
        accent_bold()
    } else {
        text_secondary()
    };
    glass_block(focused).title(ratatui::text::Span::styled(format!(" {title} "), title_style))
}

// --- Button styles ---

/// Send button: accent when it can be pressed, muted when disabled
pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette::TEXT_MUTED)
            .add_modifier(Modifier::DIM)
    }
}

// --- Indicator mapping ---

/// Connection indicator for the status panel and header.
///
/// Returns `(icon, label, Style)` for the given status.
pub fn connection_indicator(status: ConnectionStatus) -> (&'static str, &'static str, Style) {
    match status {
        ConnectionStatus::Connected => (
            "●",
            status.label(),
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        ConnectionStatus::Disconnected => (
            "○",
            status.label(),
            Style::default().fg(palette::STATUS_RED),
        ),
    }
}

/// Track style of the toggle switch
pub fn toggle_track(state: ToggleState) -> Style {
    match state {
        ToggleState::On => Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
        ToggleState::Off => Style::default()
            .fg(palette::TEXT_SECONDARY)
            .bg(palette::INPUT_BG),
    }
}

/// Prefix color for an activity entry
pub fn activity_level(level: ActivityLevel) -> Style {
    let color = match level {
        ActivityLevel::Info => palette::LOG_INFO,
        ActivityLevel::Warning => palette::LOG_WARNING,
    };
    Style::default().fg(color)
}
