use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;
use crate::utils::format::indonesian_date;
use crate::utils::hijri::today_hijri_string;

pub fn render(frame: &mut Frame, area: Rect, location_label: &str) {
    let today = Local::now().date_naive();

    let title_line = Line::from(vec![
        Span::styled("  جدول  ", theme::teal().add_modifier(Modifier::BOLD)),
        Span::styled("jadwal sholat", theme::teal()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(location_label, theme::bold()),
    ]);

    let date_line = Line::from(vec![
        Span::styled(indonesian_date(today), theme::amber()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(today_hijri_string(), theme::dim()),
    ]);

    let text = vec![title_line, Line::from(""), date_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::teal().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
