//! Last sent text panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Shows the last text the device accepted, or "None"
pub struct LastSent<'a> {
    text: Option<&'a str>,
}

impl<'a> LastSent<'a> {
    pub fn new(text: Option<&'a str>) -> Self {
        Self { text }
    }
}

impl Widget for LastSent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let value = match self.text {
            Some(text) => Span::styled(text, styles::text_primary()),
            None => Span::styled("None", styles::text_muted()),
        };

        Paragraph::new(Line::from(vec![Span::raw(" "), value]))
            .block(styles::titled_block("Last sent", false))
            .render(area, buf);
    }
}
