//! Text input with send button

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use espremote_app::ControlState;

use crate::theme::{palette, styles};

const PLACEHOLDER: &str = "Type a message";
const SEND_LABEL: &str = " Send ";
const SENDING_LABEL: &str = " Sending... ";

/// Pending text field plus the send button.
///
/// The button is drawn disabled while a send is in flight or the text is
/// blank.
pub struct MessageInput<'a> {
    text: &'a str,
    is_sending: bool,
    can_send: bool,
    focused: bool,
}

impl<'a> MessageInput<'a> {
    pub fn new(control: &'a ControlState) -> Self {
        Self {
            text: &control.pending_text,
            is_sending: control.is_sending,
            can_send: control.can_send(),
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }

    /// Where the terminal cursor belongs when this input is focused
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let field = self.field_area(area)?;
        let (_, width) = visible_tail(self.text, field.width.saturating_sub(1));
        Some(Position::new(field.x + width, field.y))
    }

    /// Area of the editable field inside the border, left of the button
    fn field_area(&self, area: Rect) -> Option<Rect> {
        let inner = styles::titled_block("Message", self.focused).inner(area);
        let button_width = self.button_label().chars().count() as u16;
        let width = inner.width.checked_sub(button_width + 3)?;
        if inner.height == 0 || width == 0 {
            return None;
        }
        Some(Rect::new(inner.x + 1, inner.y, width, 1))
    }
}

impl Widget for MessageInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Message", self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(field) = self.field_area(area) else {
            return;
        };

        buf.set_style(field, Style::default().bg(palette::INPUT_BG));
        let content = if self.text.is_empty() {
            Span::styled(PLACEHOLDER, styles::text_muted())
        } else {
            // Keep the end of the text (and the cursor) in view
            let (tail, _) = visible_tail(self.text, field.width.saturating_sub(1));
            Span::styled(tail, styles::text_primary())
        };
        buf.set_line(field.x, field.y, &Line::from(content), field.width);

        let label = self.button_label();
        let button_x = field.x + field.width + 1;
        let button_width = inner.x + inner.width - button_x;
        buf.set_line(
            button_x,
            inner.y,
            &Line::from(Span::styled(label, styles::button(self.can_send))),
            button_width,
        );
    }
}

/// Longest suffix of `text` that fits in `max_width` columns, with its width
fn visible_tail(text: &str, max_width: u16) -> (&str, u16) {
    let mut width: u16 = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0) as u16;
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    (&text[start..], width)
}
