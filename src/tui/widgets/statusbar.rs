use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

/// One line at the bottom: a transient alert when present, key hints
/// otherwise.
pub fn render(frame: &mut Frame, area: Rect, status: Option<&str>) {
    let line = match status {
        Some(message) => Line::from(Span::styled(message, theme::amber())),
        None => {
            let hints = [
                ("[/]", " search  "),
                ("[Enter]", " select  "),
                ("[l]", " locate  "),
                ("[r]", " reload  "),
                ("[?]", " help  "),
                ("[Esc]", " quit"),
            ];
            let mut spans = Vec::new();
            for (key, label) in &hints {
                spans.push(Span::styled(*key, theme::teal()));
                spans.push(Span::styled(*label, theme::dim()));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
