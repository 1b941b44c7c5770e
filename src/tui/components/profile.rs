//! # Profile Screen
//!
//! Avatar, name and location, followed by a menu of account pages. Menu
//! rows can be highlighted but none of them lead anywhere yet.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const PROFILE_NAME: &str = "Kofi Labs";
pub const PROFILE_TAGLINE: &str = "Hardware Engineer • London, UK";
pub const PROFILE_MENU: [&str; 4] = ["My Listings", "Sales Analytics", "Payouts", "Settings"];

#[derive(Default)]
pub struct ProfileState {
    pub selected: usize,
    list_state: ListState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEvent {
    Back,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ProfileEvent> {
        match event {
            TuiEvent::Escape => return Some(ProfileEvent::Back),
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.selected = (self.selected + 1).min(PROFILE_MENU.len() - 1);
            }
            _ => {}
        }
        None
    }
}

pub struct ProfileScreen<'a> {
    state: &'a mut ProfileState,
}

impl<'a> ProfileScreen<'a> {
    pub fn new(state: &'a mut ProfileState) -> Self {
        Self { state }
    }
}

impl Component for ProfileScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [avatar, name, tagline, _, menu] =
            Layout::vertical([Length(3), Length(1), Length(1), Length(1), Min(0)]).areas(area);

        let [_, avatar, _] = Layout::horizontal([Min(0), Length(7), Min(0)]).areas(avatar);
        frame.render_widget(
            Paragraph::new(vec![Line::default(), Line::from("KL")])
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme::MUTED)
                        .bg(theme::BORDER)
                        .add_modifier(Modifier::BOLD),
                ),
            avatar,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(PROFILE_NAME, theme::heading()))
                .alignment(Alignment::Center),
            name,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(PROFILE_TAGLINE, theme::muted()))
                .alignment(Alignment::Center),
            tagline,
        );

        let rows: Vec<ListItem> = PROFILE_MENU
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(*entry, theme::text()),
                    Span::styled("  ›", theme::subtle()),
                ]))
            })
            .collect();
        self.state.list_state.select(Some(self.state.selected));
        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme::BORDER)),
            )
            .highlight_style(Style::default().bg(theme::SURFACE).add_modifier(Modifier::BOLD));
        frame.render_stateful_widget(list, menu, &mut self.state.list_state);
    }
}
