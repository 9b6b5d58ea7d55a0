use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::City;
use crate::tui::theme;

/// Search panel: the query input plus the candidate list.
/// `results` is None before any search has run, Some(empty) after a
/// search that matched nothing.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    input_active: bool,
    results: Option<&[City]>,
    selected: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_input(frame, chunks[0], input, input_active);
    render_results(frame, chunks[1], results, selected, input_active);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str, active: bool) {
    let border_style = if active { theme::teal() } else { theme::border() };
    let block = Block::default()
        .title(Span::styled(" Search City ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(theme::surface());

    let mut spans = vec![Span::styled(" ", theme::dim()), Span::styled(input, theme::bold())];
    if active {
        spans.push(Span::styled("█", theme::amber()));
    } else if input.is_empty() {
        spans.push(Span::styled("press / to search", theme::dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);

    if active {
        // Park the terminal cursor on the block cursor cell so terminals
        // that paint their own cursor agree with us.
        let x = area.x + 2 + input.width() as u16;
        frame.set_cursor_position((x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    results: Option<&[City]>,
    selected: usize,
    input_active: bool,
) {
    let block = Block::default()
        .title(Span::styled(" Results ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let items: Vec<ListItem> = match results {
        None => Vec::new(),
        Some([]) => vec![ListItem::new(Line::from(Span::styled(
            "  No city found",
            theme::dim(),
        )))],
        Some(cities) => cities
            .iter()
            .enumerate()
            .map(|(i, city)| {
                let style = if i == selected && !input_active {
                    theme::teal().add_modifier(Modifier::BOLD)
                } else {
                    theme::bold()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {}", city.name), style),
                    Span::styled(format!("  ({})", city.id), theme::dim()),
                ]))
            })
            .collect(),
    };

    frame.render_widget(List::new(items).block(block), area);
}
