use chrono::NaiveDateTime;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::NextPrayer;
use crate::tui::theme;
use crate::utils::format::format_countdown;

/// Countdown card: the next prayer's name plus the remaining time as
/// big HH:MM:SS digits.
pub fn render(frame: &mut Frame, area: Rect, next: Option<&NextPrayer>, now: NaiveDateTime) {
    let block = Block::default()
        .title(Span::styled(" Next Prayer ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(next) = next else {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("  Waiting for a schedule...", theme::dim())),
        ]);
        frame.render_widget(placeholder, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let name_line = Paragraph::new(Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(
            next.name.display_name().to_uppercase(),
            theme::teal().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  at {}", next.at.format("%H:%M")),
            theme::dim(),
        ),
    ]));
    frame.render_widget(name_line, chunks[0]);

    let countdown = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::amber().add_modifier(Modifier::BOLD))
        .lines(vec![format_countdown(next.remaining(now)).into()])
        .build();
    frame.render_widget(countdown, chunks[1]);
}
