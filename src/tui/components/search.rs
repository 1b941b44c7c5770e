//! # Search Screen
//!
//! A query box and a list of recent searches. Queries are accepted but not
//! run against the catalogue.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{TextField, TextFieldEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const SEARCH_PLACEHOLDER: &str = "Search templates, chips, boards...";
pub const RECENT_SEARCHES: [&str; 3] = ["ESP32-S3", "USB-C PD", "Motor Driver"];

pub struct SearchState {
    pub query: TextField,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Back,
}

impl SearchState {
    pub fn new() -> Self {
        let mut query = TextField::new("Query", SEARCH_PLACEHOLDER);
        query.focused = true;
        Self { query }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        if matches!(event, TuiEvent::Escape) {
            return Some(SearchEvent::Back);
        }
        if self.query.handle_event(event) == Some(TextFieldEvent::Submit) {
            debug!("Search submitted: {:?}", self.query.buffer);
        }
        None
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SearchScreen<'a> {
    state: &'a mut SearchState,
}

impl<'a> SearchScreen<'a> {
    pub fn new(state: &'a mut SearchState) -> Self {
        Self { state }
    }
}

impl Component for SearchScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [title, _, field, _, recent] = Layout::vertical([
            Length(1),
            Length(1),
            Length(TextField::HEIGHT),
            Length(1),
            Min(0),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(Span::styled("Search", theme::heading())), title);
        self.state.query.render(frame, field);

        let mut lines = vec![
            Line::from(Span::styled("RECENT SEARCHES", theme::subtle())),
            Line::default(),
        ];
        lines.extend(RECENT_SEARCHES.iter().map(|s| {
            Line::from(vec![
                Span::styled("⌕ ", theme::subtle()),
                Span::styled(*s, theme::muted()),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), recent);
    }
}
