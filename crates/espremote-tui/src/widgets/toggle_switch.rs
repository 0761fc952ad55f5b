//! Toggle switch widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use espremote_core::ToggleState;

use crate::theme::styles;

/// On/off switch mirroring the device output
pub struct ToggleSwitch {
    state: ToggleState,
    focused: bool,
}

impl ToggleSwitch {
    pub fn new(state: ToggleState) -> Self {
        Self {
            state,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Knob on the right when on, on the left when off
    fn track(&self) -> &'static str {
        match self.state {
            ToggleState::On => "  ON ●",
            ToggleState::Off => "● OFF ",
        }
    }
}

impl Widget for ToggleSwitch {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.track(), styles::toggle_track(self.state)),
        ];
        if self.focused {
            spans.push(Span::styled("  space to flip", styles::text_muted()));
        }

        Paragraph::new(Line::from(spans))
            .block(styles::titled_block("Output", self.focused))
            .render(area, buf);
    }
}
