//! # List Template Form
//!
//! The "create" screen for putting a template up for sale: an
//! auto-generated thumbnail placeholder, title and price fields, the
//! tweakable-parameter chips and a "Publish Listing" button.
//!
//! Publishing does not store anything. The form is rebuilt with its default
//! values every time the screen is entered.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{TextField, TextFieldEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const DEFAULT_TITLE: &str = "My Custom Board";
pub const DEFAULT_PRICE: &str = "$5.00";
pub const TWEAKABLE_PARAMS: [&str; 4] = ["Dimensions", "Connectors", "Voltage", "Mounting"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFocus {
    Title,
    Price,
    Publish,
}

impl ListFocus {
    fn next(self) -> Self {
        match self {
            ListFocus::Title => ListFocus::Price,
            ListFocus::Price => ListFocus::Publish,
            ListFocus::Publish => ListFocus::Title,
        }
    }

    fn prev(self) -> Self {
        self.next().next()
    }
}

pub struct ListFormState {
    pub title: TextField,
    pub price: TextField,
    pub focus: ListFocus,
    publish_area: Rect,
    close_area: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListFormEvent {
    Close,
    Publish,
}

impl ListFormState {
    pub fn new() -> Self {
        Self {
            title: TextField::new("Title", "").with_value(DEFAULT_TITLE),
            price: TextField::new("Price", "").with_value(DEFAULT_PRICE),
            focus: ListFocus::Title,
            publish_area: Rect::default(),
            close_area: Rect::default(),
        }
    }

    /// Whether keystrokes currently go into a text field.
    pub fn captures_text(&self) -> bool {
        self.focus != ListFocus::Publish
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            ListFocus::Title => Some(&mut self.title),
            ListFocus::Price => Some(&mut self.price),
            ListFocus::Publish => None,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<ListFormEvent> {
        match event {
            TuiEvent::Escape => return Some(ListFormEvent::Close),
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                return None;
            }
            TuiEvent::MouseClick(col, row) => {
                let pos = Position::new(*col, *row);
                if self.publish_area.contains(pos) {
                    return Some(ListFormEvent::Publish);
                }
                return self.close_area.contains(pos).then_some(ListFormEvent::Close);
            }
            TuiEvent::Submit if self.focus == ListFocus::Publish => {
                return Some(ListFormEvent::Publish);
            }
            _ => {}
        }

        let field = self.focused_field()?;
        if field.handle_event(event) == Some(TextFieldEvent::Submit) {
            self.focus = self.focus.next();
        }
        None
    }
}

impl Default for ListFormState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ListForm<'a> {
    state: &'a mut ListFormState,
}

impl<'a> ListForm<'a> {
    pub fn new(state: &'a mut ListFormState) -> Self {
        Self { state }
    }
}

fn section_label(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(text.to_uppercase(), theme::subtle()))
}

impl Component for ListForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header, _, thumbnail, _, title, price, _, params_label, params, _, publish, _] =
            Layout::vertical([
                Length(1),
                Length(1),
                Length(4),
                Length(1),
                Length(TextField::HEIGHT),
                Length(TextField::HEIGHT),
                Length(1),
                Length(1),
                Length(1),
                Min(0),
                Length(3),
                Length(1),
            ])
            .areas(area);

        let heading = Paragraph::new(Span::styled("List Template", theme::heading()));
        frame.render_widget(heading, header);
        frame.render_widget(
            Paragraph::new(Span::styled(" Esc ✕ ", theme::subtle())).alignment(Alignment::Right),
            header,
        );
        let close_width = 7.min(header.width);
        self.state.close_area =
            Rect::new(header.right().saturating_sub(close_width), header.y, close_width, 1);

        let placeholder = Paragraph::new(vec![
            Line::from(Span::styled("▤", theme::subtle())),
            Line::from(Span::styled("Thumbnail auto-generated", theme::subtle())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(theme::BORDER_STRONG))
                .style(Style::default().bg(theme::SURFACE)),
        );
        frame.render_widget(placeholder, thumbnail);

        self.state.title.focused = self.state.focus == ListFocus::Title;
        self.state.price.focused = self.state.focus == ListFocus::Price;
        self.state.title.render(frame, title);
        self.state.price.render(frame, price);

        frame.render_widget(section_label("Tweakable Params"), params_label);
        let chip_style = Style::default()
            .fg(theme::PRIMARY)
            .bg(theme::PRIMARY_SOFT)
            .add_modifier(Modifier::BOLD);
        let mut chips = Vec::new();
        for param in TWEAKABLE_PARAMS {
            chips.push(Span::styled(format!(" {param} + "), chip_style));
            chips.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(chips)), params);

        self.state.publish_area = publish;
        let focused = self.state.focus == ListFocus::Publish;
        let button = Paragraph::new("Publish Listing")
            .style(theme::button())
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(if focused { BorderType::Thick } else { BorderType::Rounded })
                    .border_style(Style::default().fg(theme::PRIMARY).bg(theme::PRIMARY)),
            );
        frame.render_widget(button, publish);
    }
}
