//! # Library Screen
//!
//! The user's own templates. Shows a "List New" button and a single draft
//! card; both are static.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const DRAFT_TITLE: &str = "My Custom Controller";
pub const DRAFT_STATUS: &str = "Draft • Modified 2h ago";

#[derive(Default)]
pub struct LibraryState {
    list_new_area: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryEvent {
    ListNew,
    Back,
}

impl LibraryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<LibraryEvent> {
        match event {
            TuiEvent::Escape => Some(LibraryEvent::Back),
            TuiEvent::Submit | TuiEvent::InputChar('n') => Some(LibraryEvent::ListNew),
            TuiEvent::MouseClick(col, row) => self
                .list_new_area
                .contains(Position::new(*col, *row))
                .then_some(LibraryEvent::ListNew),
            _ => None,
        }
    }
}

pub struct LibraryScreen<'a> {
    state: &'a mut LibraryState,
}

impl<'a> LibraryScreen<'a> {
    pub fn new(state: &'a mut LibraryState) -> Self {
        Self { state }
    }
}

impl Component for LibraryScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header, _, card, _] =
            Layout::vertical([Length(1), Length(1), Length(5), Min(0)]).areas(area);

        frame.render_widget(Paragraph::new(Span::styled("Library", theme::heading())), header);
        let button = " + List New ";
        let width = (button.chars().count() as u16).min(header.width);
        self.state.list_new_area = Rect::new(header.right() - width, header.y, width, 1);
        frame.render_widget(Span::styled(button, theme::button()), self.state.list_new_area);

        let card_inner = Block::bordered().inner(card);
        let [thumb, _, text] =
            Layout::horizontal([Length(10), Length(1), Min(0)]).areas(card_inner);
        frame.render_widget(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BORDER)),
            card,
        );
        let pattern = Line::from(Span::styled("▚▞▚▞", theme::subtle()));
        frame.render_widget(
            Paragraph::new(vec![Line::default(), pattern])
                .alignment(Alignment::Center)
                .style(Style::default().bg(theme::SURFACE)),
            thumb,
        );
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(DRAFT_TITLE, theme::heading())),
                Line::from(Span::styled(DRAFT_STATUS, theme::subtle())),
            ]),
            text,
        );
    }
}
