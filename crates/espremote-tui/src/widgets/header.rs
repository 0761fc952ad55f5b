//! Header bar widget
//!
//! Shows the app title, the device address and keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use espremote_core::ConnectionStatus;

use crate::theme::{palette, styles};

/// Main header showing app title, device address, and keybindings
pub struct MainHeader<'a> {
    device_address: &'a str,
    connection: ConnectionStatus,
}

impl<'a> MainHeader<'a> {
    pub fn new(device_address: &'a str, connection: ConnectionStatus) -> Self {
        Self {
            device_address,
            connection,
        }
    }

    fn shortcut_spans() -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (key, label) in [
            ("Tab", "Focus"),
            ("Space", "Flip"),
            ("Enter", "Send"),
            ("q", "Quit"),
        ] {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {label}"), styles::text_muted()));
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, _label, icon_style) = styles::connection_indicator(self.connection);

        // Left: status dot + title + "/" + device address
        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled("ESP Remote", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled(self.device_address, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-aligned shortcuts, dropped when they do not fit
        let shortcuts_line = Line::from(Self::shortcut_spans());
        let shortcuts_width = shortcuts_line.width() as u16;
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width - 1;
            buf.set_line(x, inner.y, &shortcuts_line, shortcuts_width);
        }
    }
}
