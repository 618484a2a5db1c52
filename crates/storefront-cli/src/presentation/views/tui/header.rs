use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderView<'a> {
    title: &'a str,
    source: &'a str,
}

impl<'a> HeaderView<'a> {
    pub fn new(title: &'a str, source: &'a str) -> Self {
        Self { title, source }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::styled(
                self.title,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.source, Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
