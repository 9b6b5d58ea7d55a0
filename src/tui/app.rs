use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEventKind};
use log::{error, info};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::api::{query_too_short, ScheduleApi, MIN_QUERY_LEN};
use crate::config::AppConfig;
use crate::countdown::CountdownSession;
use crate::location::detect_city;
use crate::models::{City, NextPrayer};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{clock, header, next_prayer, schedule, search, statusbar};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Search,
}

pub struct App {
    pub config: AppConfig,
    api: Arc<ScheduleApi>,
    tx: mpsc::Sender<Event>,

    pub view: View,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub should_quit: bool,

    /// The one active countdown. Replaced wholesale whenever a new
    /// schedule arrives, so a previous session can never keep ticking.
    pub session: Option<CountdownSession>,
    pub next: Option<NextPrayer>,

    /// None before the first search; Some(empty) after a miss.
    pub results: Option<Vec<City>>,
    pub result_idx: usize,

    pub location_label: String,
    pub status: Option<String>,
}

impl App {
    pub fn new(api: Arc<ScheduleApi>, config: AppConfig, tx: mpsc::Sender<Event>) -> Self {
        App {
            config,
            api,
            tx,
            view: View::Dashboard,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            should_quit: false,
            session: None,
            next: None,
            results: None,
            result_idx: 0,
            location_label: String::new(),
            status: None,
        }
    }

    /// Kick off the startup load: location detection when enabled,
    /// otherwise straight to the configured default city.
    pub fn start(&mut self) {
        if self.config.location.auto_detect {
            self.start_detect();
        } else {
            self.load_city(self.config.location.default_city());
        }
    }

    pub fn start_detect(&mut self) {
        self.location_label = "Detecting location...".to_string();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let fallback = self.config.location.default_city();
        thread::spawn(move || {
            let detection = detect_city(&api, fallback);
            let _ = tx.send(Event::LocationResolved(detection));
        });
    }

    pub fn load_city(&mut self, city: City) {
        self.location_label = format!("Loading {}...", city.name);
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let date = Local::now().date_naive();
        thread::spawn(move || {
            let result = api.schedule_for(&city.id, date);
            let _ = tx.send(Event::ScheduleLoaded { city, result });
        });
    }

    /// Submit the search box. Returns whether a request was actually
    /// started; queries under the minimum length never reach the network.
    pub fn submit_search(&mut self) -> bool {
        let query = self.input_buffer.trim().to_string();
        if query_too_short(&query) {
            self.status = Some(format!(
                "Enter at least {MIN_QUERY_LEN} characters to search for a city"
            ));
            return false;
        }

        self.status = Some(format!("Searching for '{query}'..."));
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = api.search_cities(&query);
            let _ = tx.send(Event::SearchResults(result));
        });
        true
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.tick(),
            Event::ScheduleLoaded { city, result } => self.on_schedule_loaded(city, result),
            Event::SearchResults(result) => self.on_search_results(result),
            Event::LocationResolved(detection) => {
                if let Some(notice) = detection.notice {
                    self.status = Some(notice);
                }
                self.load_city(detection.city);
            }
        }
    }

    fn on_schedule_loaded(
        &mut self,
        city: City,
        result: Result<crate::models::PrayerSchedule, crate::api::ApiError>,
    ) {
        match result {
            Ok(prayer_schedule) => {
                info!("schedule loaded for {} ({})", city.name, city.id);
                self.location_label = city.name.clone();
                let session = CountdownSession::new(city, prayer_schedule);
                self.next = Some(session.next_prayer(Local::now().naive_local()));
                self.session = Some(session);
            }
            Err(err) => {
                error!("loading schedule for {} failed: {err}", city.id);
                self.location_label = "Failed to load".to_string();
                self.status =
                    Some("Could not load the prayer schedule. Please try again.".to_string());
            }
        }
    }

    fn on_search_results(&mut self, result: Result<Vec<City>, crate::api::ApiError>) {
        match result {
            Ok(cities) => {
                self.status = None;
                self.result_idx = 0;
                if cities.is_empty() {
                    self.status = Some("No city found for that search".to_string());
                }
                self.results = Some(cities);
                self.input_mode = InputMode::Normal;
            }
            Err(err) => {
                error!("city search failed: {err}");
                self.status = Some("City search failed. Check your connection.".to_string());
            }
        }
    }

    fn tick(&mut self) {
        if let Some(session) = &self.session {
            self.next = Some(session.next_prayer(Local::now().naive_local()));
        }
    }

    fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        // Only handle actual key presses — ignore release/repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: crossterm::event::KeyEvent) {
        if self.view == View::Help {
            self.view = View::Dashboard;
            return;
        }

        // Any keypress clears a stale alert, mirroring a dismissed modal.
        self.status = None;

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.input_buffer.clear();
            }
            KeyCode::Char('l') => {
                self.start_detect();
            }
            KeyCode::Char('r') => {
                if let Some(session) = &self.session {
                    self.load_city(session.city.clone());
                }
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Up => {
                if self.result_idx > 0 {
                    self.result_idx -= 1;
                }
            }
            KeyCode::Down => {
                let max = self
                    .results
                    .as_ref()
                    .map(|r| r.len().saturating_sub(1))
                    .unwrap_or(0);
                if self.result_idx < max {
                    self.result_idx += 1;
                }
            }
            KeyCode::Enter => {
                self.select_result();
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Enter => {
                self.submit_search();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Pick the focused search result: load its schedule and clear the
    /// query state and result list.
    fn select_result(&mut self) {
        let Some(results) = &self.results else {
            return;
        };
        if let Some(city) = results.get(self.result_idx).cloned() {
            self.results = None;
            self.result_idx = 0;
            self.input_buffer.clear();
            self.load_city(city);
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        let now = Local::now().naive_local();

        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], &self.location_label);
        statusbar::render(frame, outer_chunks[2], self.status.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(outer_chunks[1]);

        // Left column: schedule rows + search panel
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(columns[0]);

        schedule::render(
            frame,
            left_chunks[0],
            self.session.as_ref().map(|s| &s.schedule),
            self.next.as_ref().map(|n| n.name),
            now,
        );
        search::render(
            frame,
            left_chunks[1],
            &self.input_buffer,
            self.input_mode == InputMode::Search,
            self.results.as_deref(),
            self.result_idx,
        );

        // Right column: live clock + countdown
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(columns[1]);

        clock::render(frame, right_chunks[0]);
        next_prayer::render(frame, right_chunks[1], self.next.as_ref(), now);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::teal().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [/]        ", theme::teal()),
                Span::styled("Search for a city", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Enter]    ", theme::teal()),
                Span::styled("Submit search / pick a result", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [↑ ↓]      ", theme::teal()),
                Span::styled("Navigate results", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [l]        ", theme::teal()),
                Span::styled("Detect location again", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [r]        ", theme::teal()),
                Span::styled("Reload the current schedule", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]        ", theme::teal()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]      ", theme::teal()),
                Span::styled("Quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::teal())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(api: ScheduleApi, config: AppConfig) -> Result<()> {
    let events = EventHandler::new(1000);
    let mut app = App::new(Arc::new(api), config, events.sender());
    app.start();

    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        app.handle_event(events.next()?);
        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::time::Duration;

    use chrono::NaiveTime;

    use crate::api::ApiError;
    use crate::models::PrayerSchedule;

    use super::*;

    fn test_app() -> (App, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel();
        // A closed local port: any request a worker makes fails fast.
        let api = Arc::new(ScheduleApi::new("http://127.0.0.1:9"));
        (App::new(api, AppConfig::default(), tx), rx)
    }

    fn schedule() -> PrayerSchedule {
        PrayerSchedule {
            subuh: NaiveTime::from_str("04:30:00").unwrap(),
            dzuhur: NaiveTime::from_str("12:00:00").unwrap(),
            ashar: NaiveTime::from_str("15:15:00").unwrap(),
            maghrib: NaiveTime::from_str("18:00:00").unwrap(),
            isya: NaiveTime::from_str("19:15:00").unwrap(),
        }
    }

    #[test]
    fn short_query_never_reaches_the_network() {
        let (mut app, rx) = test_app();
        app.input_buffer = "ab".to_string();

        assert!(!app.submit_search());
        assert!(app.status.unwrap().contains("at least 3"));
        // No worker was spawned, so nothing ever lands on the channel.
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn valid_query_issues_exactly_one_request() {
        let (mut app, rx) = test_app();
        app.input_buffer = "bandung".to_string();

        assert!(app.submit_search());
        // The worker reports back exactly once (here: a connection error).
        let event = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(matches!(event, Event::SearchResults(Err(_))));
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn loading_a_new_schedule_replaces_the_session() {
        let (mut app, _rx) = test_app();

        app.on_schedule_loaded(City::new("1301", "Kota Jakarta"), Ok(schedule()));
        assert_eq!(app.session.as_ref().unwrap().city.id, "1301");
        assert_eq!(app.location_label, "Kota Jakarta");

        let mut other = schedule();
        other.maghrib = NaiveTime::from_str("18:05:00").unwrap();
        app.on_schedule_loaded(City::new("1219", "Kota Bandung"), Ok(other.clone()));

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.city.id, "1219");
        assert_eq!(session.schedule, other);
        assert_eq!(app.location_label, "Kota Bandung");
        assert!(app.next.is_some());
    }

    #[test]
    fn failed_load_keeps_the_previous_session_and_alerts_once() {
        let (mut app, _rx) = test_app();
        app.on_schedule_loaded(City::new("1301", "Kota Jakarta"), Ok(schedule()));

        app.on_schedule_loaded(
            City::new("9999", "Nowhere"),
            Err(ApiError::Malformed("status=false".to_string())),
        );

        assert_eq!(app.session.as_ref().unwrap().city.id, "1301");
        assert_eq!(app.location_label, "Failed to load");
        assert!(app.status.is_some());
    }

    #[test]
    fn empty_search_results_render_as_a_miss() {
        let (mut app, _rx) = test_app();
        app.on_search_results(Ok(Vec::new()));
        assert_eq!(app.results.as_deref(), Some(&[][..]));
        assert!(app.status.unwrap().contains("No city found"));
    }

    #[test]
    fn selecting_a_result_clears_query_state() {
        let (mut app, rx) = test_app();
        app.input_buffer = "band".to_string();
        app.results = Some(vec![
            City::new("1219", "Kota Bandung"),
            City::new("1204", "Kab. Bandung"),
        ]);
        app.result_idx = 1;

        app.select_result();

        assert!(app.results.is_none());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.result_idx, 0);
        assert_eq!(app.location_label, "Loading Kab. Bandung...");
        // The fetch worker reports back (connection error against the
        // closed port), carrying the selected city.
        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            Event::ScheduleLoaded { city, result } => {
                assert_eq!(city.id, "1204");
                assert!(result.is_err());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn fallback_detection_alerts_and_still_loads_a_city() {
        let (mut app, rx) = test_app();
        let detection = crate::location::Detection {
            city: City::new("1301", "Kota Jakarta"),
            notice: Some("Could not determine your location; showing Kota Jakarta.".to_string()),
        };

        app.handle_event(Event::LocationResolved(detection));

        assert!(app.status.as_ref().unwrap().contains("Could not determine"));
        assert_eq!(app.location_label, "Loading Kota Jakarta...");
        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            Event::ScheduleLoaded { city, .. } => assert_eq!(city.id, "1301"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
