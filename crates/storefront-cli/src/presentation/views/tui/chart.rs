use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::{format_price, truncate};
use crate::presentation::view_models::{ChartViewModel, TooltipViewModel};

const BAR_COLOR: Color = Color::Rgb(61, 90, 128);

/// Prices are drawn in cents so that sub-unit differences still show.
fn scaled(value: f64) -> u64 {
    (value * 100.0).round().max(0.0) as u64
}

/// Horizontal bar chart, one row per product.
pub struct ChartView<'a> {
    model: &'a ChartViewModel,
}

impl<'a> ChartView<'a> {
    pub fn new(model: &'a ChartViewModel) -> Self {
        Self { model }
    }

    /// First bar to draw so that the highlighted one stays on screen.
    fn window_start(&self, rows: usize) -> usize {
        match self.model.highlighted {
            Some(index) if rows > 0 && index >= rows => index + 1 - rows,
            _ => 0,
        }
    }
}

impl<'a> Widget for ChartView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default().borders(Borders::ALL);
        if self.model.legend {
            block = block.title(Line::from(vec![
                Span::styled("■ ", Style::default().fg(BAR_COLOR)),
                Span::raw(self.model.series_label.as_str()),
            ]));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if self.model.bars.is_empty() {
            Paragraph::new(Span::styled(
                "No products to show",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        }

        let rows = inner.height as usize;
        let start = self.window_start(rows);
        let label_width = (inner.width as usize / 3).max(8);

        let bars: Vec<Bar<'_>> = self
            .model
            .bars
            .iter()
            .enumerate()
            .skip(start)
            .take(rows)
            .map(|(index, bar)| {
                let style = if self.model.highlighted == Some(index) {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(BAR_COLOR)
                };
                Bar::default()
                    .value(scaled(bar.value))
                    .text_value(format_price(bar.value))
                    .label(Line::from(truncate(&bar.label, label_width)))
                    .style(style)
                    .value_style(Style::default().fg(Color::White))
            })
            .collect();

        BarChart::default()
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&bars))
            .max(scaled(self.model.axis_max).max(1))
            .render(inner, buf);
    }
}

/// Details of the highlighted bar, or a hint when nothing is highlighted.
pub struct TooltipView<'a> {
    model: Option<&'a TooltipViewModel>,
}

impl<'a> TooltipView<'a> {
    pub fn new(model: Option<&'a TooltipViewModel>) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TooltipView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.model {
            Some(tip) => Line::from(vec![
                Span::styled(
                    format!("#{} ", tip.index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    tip.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" ({})  ", tip.category)),
                Span::styled(
                    format!("{}: {}", tip.series_label, format_price(tip.price)),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
            None => Line::from(Span::styled(
                "Use ↑/↓ to inspect a bar",
                Style::default().fg(Color::DarkGray),
            )),
        };
        Paragraph::new(line).render(area, buf);
    }
}
