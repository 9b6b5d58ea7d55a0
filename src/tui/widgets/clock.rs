use chrono::Local;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, BorderType, Borders},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::tui::theme;
use crate::utils::format::format_clock;

/// Live wall clock, re-rendered on every tick.
pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Clock ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let clock = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::bold())
        .lines(vec![format_clock(Local::now().time()).into()])
        .build();

    frame.render_widget(clock, inner);
}
