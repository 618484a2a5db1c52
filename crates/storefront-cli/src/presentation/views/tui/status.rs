use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::status_color;
use crate::presentation::formatters::format_elapsed;
use crate::presentation::view_models::StatusViewModel;

/// The alert line under the header.
pub struct StatusView<'a> {
    model: &'a StatusViewModel,
}

impl<'a> StatusView<'a> {
    pub fn new(model: &'a StatusViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(status_color(self.model));

        let text = match self.model {
            StatusViewModel::Loading => "Loading...".to_string(),
            StatusViewModel::Failed { message } => message.clone(),
            StatusViewModel::Ready {
                shown,
                total,
                fetched_at,
                elapsed_ms,
            } => {
                let mut text = format!("Showing {} of {} products", shown, total);
                if let Some(at) = fetched_at {
                    text.push_str(&format!(" | fetched {}", at.format("%H:%M:%S UTC")));
                }
                if let Some(ms) = elapsed_ms {
                    text.push_str(&format!(" in {}", format_elapsed(Duration::from_millis(*ms))));
                }
                text
            }
        };

        Paragraph::new(Line::from(Span::styled(text, style))).render(area, buf);
    }
}
