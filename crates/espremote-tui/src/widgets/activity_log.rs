//! Activity panel listing recent request outcomes

use std::collections::VecDeque;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use espremote_core::ActivityEntry;

use crate::theme::styles;

/// Newest entries at the bottom; older ones scroll off the top
pub struct ActivityLog<'a> {
    entries: &'a VecDeque<ActivityEntry>,
}

impl<'a> ActivityLog<'a> {
    pub fn new(entries: &'a VecDeque<ActivityEntry>) -> Self {
        Self { entries }
    }
}

impl Widget for ActivityLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Activity", false);
        let visible = block.inner(area).height as usize;

        let lines: Vec<Line> = if self.entries.is_empty() {
            vec![Line::from(Span::styled(
                " No requests yet",
                styles::text_muted(),
            ))]
        } else {
            let skip = self.entries.len().saturating_sub(visible);
            self.entries
                .iter()
                .skip(skip)
                .map(|entry| {
                    Line::from(vec![
                        Span::raw(" "),
                        Span::styled(entry.formatted_time(), styles::text_muted()),
                        Span::raw(" "),
                        Span::styled(entry.level.prefix(), styles::activity_level(entry.level)),
                        Span::raw(" "),
                        Span::styled(entry.message.as_str(), styles::text_primary()),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
