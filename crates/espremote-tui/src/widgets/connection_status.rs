//! Connection status panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use espremote_core::ConnectionStatus;

use crate::theme::styles;

/// Shows whether the last resolved request reached the device
pub struct ConnectionIndicator {
    status: ConnectionStatus,
}

impl ConnectionIndicator {
    pub fn new(status: ConnectionStatus) -> Self {
        Self { status }
    }
}

impl Widget for ConnectionIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, label, style) = styles::connection_indicator(self.status);

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(label, style),
        ]);

        Paragraph::new(line)
            .block(styles::titled_block("Status", false))
            .render(area, buf);
    }
}
