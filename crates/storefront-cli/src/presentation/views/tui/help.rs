use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const KEYS: [(&str, &str); 6] = [
    ("[q]", "uit "),
    ("[Tab]", " focus "),
    ("[←/→]", " change "),
    ("[c]", "ategory "),
    ("[s]", "ort "),
    ("[↑/↓]", " inspect"),
];

pub struct HelpView;

impl Widget for HelpView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default().fg(Color::Yellow);
        let spans: Vec<Span<'static>> = KEYS
            .iter()
            .flat_map(|(key, action)| [Span::styled(*key, key_style), Span::raw(*action)])
            .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
