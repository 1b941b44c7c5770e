//! # Tweak Sheet
//!
//! Bottom sheet drawn over the detail page. Shows the live price, a fixed
//! list of customization parameters and a "Generate Export" button. The
//! parameter rows can be highlighted but changing them is not supported;
//! the values are the same for every template.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::core::catalogue::Item;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// (label, value) rows shown on the sheet.
pub const TWEAK_PARAMS: [(&str, &str); 5] = [
    ("Form factor", "Standard (45x28mm)"),
    ("Power Input", "USB-C (PD)"),
    ("Output Voltage", "Fixed 12V"),
    ("Mounting", "M3 Holes"),
    ("Finish", "ENIG"),
];

/// Cursor index of the export button, one past the last parameter row.
const EXPORT_INDEX: usize = TWEAK_PARAMS.len();

#[derive(Default)]
pub struct TweakState {
    pub selected: usize,
    list_state: ListState,
    export_area: Rect,
    close_area: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TweakEvent {
    Close,
    GenerateExport,
}

impl TweakState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_export_button(&self) -> bool {
        self.selected == EXPORT_INDEX
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<TweakEvent> {
        match event {
            TuiEvent::Escape => Some(TweakEvent::Close),
            TuiEvent::CursorUp | TuiEvent::FocusPrev | TuiEvent::InputChar('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::FocusNext | TuiEvent::InputChar('j') => {
                self.selected = (self.selected + 1).min(EXPORT_INDEX);
                None
            }
            TuiEvent::InputChar('g') => Some(TweakEvent::GenerateExport),
            TuiEvent::Submit => self.on_export_button().then_some(TweakEvent::GenerateExport),
            TuiEvent::MouseClick(col, row) => {
                let pos = Position::new(*col, *row);
                if self.export_area.contains(pos) {
                    Some(TweakEvent::GenerateExport)
                } else if self.close_area.contains(pos) {
                    Some(TweakEvent::Close)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the tweak sheet.
pub struct TweakSheet<'a> {
    state: &'a mut TweakState,
    item: &'a Item,
}

impl<'a> TweakSheet<'a> {
    pub fn new(state: &'a mut TweakState, item: &'a Item) -> Self {
        Self { state, item }
    }
}

impl Component for TweakSheet<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BORDER_STRONG))
            .title(Line::from(Span::styled(" Tweak Template ", theme::heading())))
            .title(Line::from(Span::styled(" Esc ✕ ", theme::subtle())).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let close_width = 7.min(area.width);
        let close_x = area.right().saturating_sub(close_width + 1);
        self.state.close_area = Rect::new(close_x, area.y, close_width, 1);

        use Constraint::{Length, Min};
        let [summary, _, params, export] =
            Layout::vertical([Length(2), Length(1), Min(0), Length(1)]).areas(inner);

        let summary_lines = vec![
            Line::from(Span::styled(
                format!(" LIVE: {} ", self.item.price),
                Style::default()
                    .fg(theme::PRIMARY)
                    .bg(theme::PRIMARY_SOFT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.item.title, theme::heading())),
        ];
        frame.render_widget(Paragraph::new(summary_lines), summary);

        let label_width = TWEAK_PARAMS.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let rows: Vec<ListItem> = TWEAK_PARAMS
            .iter()
            .map(|(label, value)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{label:<label_width$}  "), theme::muted()),
                    Span::styled(*value, theme::text().add_modifier(Modifier::BOLD)),
                    Span::styled("  ›", theme::subtle()),
                ]))
            })
            .collect();
        let highlighted = (!self.state.on_export_button()).then_some(self.state.selected);
        self.state.list_state.select(highlighted);
        let list = List::new(rows).highlight_style(Style::default().bg(theme::SURFACE));
        frame.render_stateful_widget(list, params, &mut self.state.list_state);

        self.state.export_area = export;
        let export_style = if self.state.on_export_button() {
            theme::button().add_modifier(Modifier::REVERSED)
        } else {
            theme::button()
        };
        frame.render_widget(
            Paragraph::new("Generate Export")
                .style(export_style)
                .alignment(Alignment::Center),
            export,
        );
    }
}
