use chrono::NaiveDateTime;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{PrayerName, PrayerSchedule};
use crate::tui::theme;
use crate::utils::format::format_time;

/// The five schedule rows. The row for `highlight` (the next prayer,
/// recomputed each tick) is re-marked on every render; all others are
/// un-marked.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    schedule: Option<&PrayerSchedule>,
    highlight: Option<PrayerName>,
    now: NaiveDateTime,
) {
    let block = Block::default()
        .title(Span::styled(" Jadwal ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let Some(schedule) = schedule else {
        let placeholder = vec![
            ListItem::new(Line::from("")),
            ListItem::new(Line::from(Span::styled("  Loading schedule...", theme::dim()))),
        ];
        frame.render_widget(List::new(placeholder).block(block), area);
        return;
    };

    let items: Vec<ListItem> = schedule
        .entries()
        .into_iter()
        .map(|(name, time)| {
            let is_next = highlight == Some(name);
            let is_past = now.date().and_time(time) <= now;

            let name_style = if is_next {
                theme::teal().add_modifier(Modifier::BOLD)
            } else if is_past {
                theme::dim()
            } else {
                theme::bold()
            };

            let mut spans = vec![
                Span::styled(format!("  {:<9}", name.display_name()), name_style),
                Span::styled(format_time(time), theme::dim()),
            ];
            if is_next {
                spans.push(Span::styled("  ◀ next", theme::amber()));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
