use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{ControlsViewModel, SelectorViewModel};

/// The two selectors stacked vertically.
pub struct ControlsView<'a> {
    model: &'a ControlsViewModel,
}

impl<'a> ControlsView<'a> {
    pub fn new(model: &'a ControlsViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ControlsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let category_height = self.model.category.options.len() as u16 + 3;
        let chunks = Layout::vertical([Constraint::Length(category_height), Constraint::Min(0)])
            .split(area);

        SelectorView::new(&self.model.category).render(chunks[0], buf);
        SelectorView::new(&self.model.sort).render(chunks[1], buf);
    }
}

pub struct SelectorView<'a> {
    model: &'a SelectorViewModel,
}

impl<'a> SelectorView<'a> {
    pub fn new(model: &'a SelectorViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SelectorView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.model.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(self.model.caption.as_str());

        let mut lines = Vec::with_capacity(self.model.options.len() + 1);
        if self.model.selected.is_none() {
            lines.push(Line::from(Span::styled(
                format!("  ({})", self.model.placeholder),
                Style::default().fg(Color::DarkGray),
            )));
        }
        for (index, option) in self.model.options.iter().enumerate() {
            if self.model.selected == Some(index) {
                let mut style = Style::default().add_modifier(Modifier::BOLD);
                if self.model.focused {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                lines.push(Line::from(Span::styled(
                    format!("> {}", option.label),
                    style,
                )));
            } else {
                lines.push(Line::from(format!("  {}", option.label)));
            }
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
