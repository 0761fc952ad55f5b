//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use espremote_app::{AppState, Focus};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let control = &state.control;

    frame.render_widget(
        widgets::MainHeader::new(&state.device_address, control.connection),
        areas.header,
    );

    frame.render_widget(
        widgets::ConnectionIndicator::new(control.connection),
        areas.status,
    );

    frame.render_widget(
        widgets::ToggleSwitch::new(control.toggle).focused(state.focus == Focus::Toggle),
        areas.toggle,
    );

    let input = widgets::MessageInput::new(control).focused(state.focus == Focus::Message);
    if let Some(position) = input.cursor_position(areas.message) {
        frame.set_cursor_position(position);
    }
    frame.render_widget(input, areas.message);

    frame.render_widget(
        widgets::LastSent::new(control.last_sent_text.as_deref()),
        areas.last_sent,
    );

    frame.render_widget(widgets::ActivityLog::new(&state.activity), areas.activity);
}
