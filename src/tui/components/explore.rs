//! # Explore Screen
//!
//! The home screen: header with a search affordance, hero copy, the
//! category chip row and a two-column grid of template tiles. While the
//! simulated fetch is running the grid shows pulsing skeleton tiles.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ExploreState` lives in `TuiState` (grid cursor, scroll, hit areas)
//! - `ExploreScreen` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::catalogue::{CATEGORIES, Item};
use crate::core::loading::SKELETON_TILES;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const GRID_COLUMNS: usize = 2;
const TILE_HEIGHT: u16 = 6;

pub const HERO_TITLE: &str = "Design";
pub const HERO_ACCENT: &str = "without limits.";
pub const HERO_SUBTITLE: [&str; 2] = [
    "Browse ready-to-tweak templates.",
    "Tap to preview, tweak, and export.",
];

/// Persistent state for the explore screen.
#[derive(Default)]
pub struct ExploreState {
    /// Index into the filtered item list.
    pub selected: usize,
    /// First visible grid row.
    scroll_row: usize,
    tile_areas: Vec<(usize, Rect)>,
    chip_areas: Vec<(&'static str, Rect)>,
    search_area: Rect,
}

/// Events emitted by the explore screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ExploreEvent {
    Open(usize),
    SelectCategory(&'static str),
    NextCategory,
    PrevCategory,
    OpenSearch,
}

impl ExploreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the filtered list changes underneath the cursor.
    ///
    /// Tile rects from the last frame point at the old list, so they are
    /// dropped until the next render records new ones.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
        self.tile_areas.clear();
    }

    /// Handle a key or click. `item_count` is the length of the filtered list.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        item_count: usize,
        is_loading: bool,
    ) -> Option<ExploreEvent> {
        let last = item_count.saturating_sub(1);
        match event {
            TuiEvent::CursorLeft | TuiEvent::InputChar('h') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight | TuiEvent::InputChar('l') => {
                self.selected = (self.selected + 1).min(last);
                None
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp | TuiEvent::InputChar('k') => {
                self.selected = self.selected.saturating_sub(GRID_COLUMNS);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown | TuiEvent::InputChar('j') => {
                if self.selected + GRID_COLUMNS <= last {
                    self.selected += GRID_COLUMNS;
                }
                None
            }
            TuiEvent::FocusNext | TuiEvent::InputChar(']') => Some(ExploreEvent::NextCategory),
            TuiEvent::FocusPrev | TuiEvent::InputChar('[') => Some(ExploreEvent::PrevCategory),
            TuiEvent::InputChar('/') | TuiEvent::InputChar('s') => Some(ExploreEvent::OpenSearch),
            TuiEvent::Submit => (!is_loading && self.selected < item_count)
                .then_some(ExploreEvent::Open(self.selected)),
            TuiEvent::MouseClick(col, row) => {
                let pos = Position::new(*col, *row);
                if self.search_area.contains(pos) {
                    return Some(ExploreEvent::OpenSearch);
                }
                if let Some((chip, _)) = self.chip_areas.iter().find(|(_, r)| r.contains(pos)) {
                    return Some(ExploreEvent::SelectCategory(*chip));
                }
                if is_loading {
                    return None;
                }
                let index = self
                    .tile_areas
                    .iter()
                    .find(|(_, r)| r.contains(pos))
                    .map(|(i, _)| *i)?;
                self.selected = index;
                Some(ExploreEvent::Open(index))
            }
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn chip_area(&self, category: &str) -> Option<Rect> {
        self.chip_areas.iter().find(|(c, _)| *c == category).map(|(_, r)| *r)
    }

    #[cfg(test)]
    pub(crate) fn tile_area(&self, index: usize) -> Option<Rect> {
        self.tile_areas.iter().find(|(i, _)| *i == index).map(|(_, r)| *r)
    }

    /// Keep the selected row inside the visible window of `visible_rows` rows.
    fn clamp_scroll(&mut self, visible_rows: usize) {
        let row = self.selected / GRID_COLUMNS;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if visible_rows > 0 && row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }
}

/// Transient render wrapper for the explore screen.
pub struct ExploreScreen<'a> {
    state: &'a mut ExploreState,
    items: &'a [&'static Item],
    active_category: &'a str,
    is_loading: bool,
    /// Skeleton pulse in `[0, 1]`.
    pulse: f32,
}

impl<'a> ExploreScreen<'a> {
    pub fn new(
        state: &'a mut ExploreState,
        items: &'a [&'static Item],
        active_category: &'a str,
        is_loading: bool,
        pulse: f32,
    ) -> Self {
        Self {
            state,
            items,
            active_category,
            is_loading,
            pulse,
        }
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(ratatui::widgets::Borders::BOTTOM)
            .border_style(Style::default().fg(theme::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        frame.render_widget(Paragraph::new(Span::styled("Explorer", theme::heading())), inner);

        let label = " / Search ";
        let width = (label.width() as u16).min(inner.width);
        self.state.search_area = Rect::new(inner.right() - width, inner.y, width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(label, theme::muted())).alignment(Alignment::Right),
            inner,
        );
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(HERO_TITLE, theme::heading())),
            Line::from(Span::styled(HERO_ACCENT, theme::accent().add_modifier(Modifier::BOLD))),
            Line::default(),
            Line::from(Span::styled(HERO_SUBTITLE[0], theme::muted())),
            Line::from(Span::styled(HERO_SUBTITLE[1], theme::muted())),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_chips(&mut self, frame: &mut Frame, area: Rect) {
        self.state.chip_areas.clear();
        let mut x = area.x;
        for &category in CATEGORIES {
            let text = format!(" {category} ");
            let width = (text.width() as u16).min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            let style = if category == self.active_category {
                theme::button()
            } else {
                theme::button_quiet()
            };
            let rect = Rect::new(x, area.y, width, 1);
            frame.render_widget(Span::styled(text, style), rect);
            self.state.chip_areas.push((category, rect));
            x = x.saturating_add(width + 1);
        }
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect) {
        self.state.tile_areas.clear();

        if !self.is_loading && self.items.is_empty() {
            let empty = Paragraph::new(format!("No templates in {} yet.", self.active_category))
                .style(theme::subtle())
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let count = if self.is_loading {
            SKELETON_TILES
        } else {
            self.items.len()
        };
        let visible_rows = (area.height / TILE_HEIGHT).max(1) as usize;
        if !self.is_loading {
            self.state.clamp_scroll(visible_rows);
        }
        let first = if self.is_loading { 0 } else { self.state.scroll_row * GRID_COLUMNS };

        let columns =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(2), Constraint::Fill(1)])
                .split(area);

        for index in first..count {
            let row = (index - first) / GRID_COLUMNS;
            let y = area.y + row as u16 * TILE_HEIGHT;
            if y + TILE_HEIGHT > area.bottom() {
                break;
            }
            let column = columns[(index % GRID_COLUMNS) * 2];
            let rect = Rect::new(column.x, y, column.width, TILE_HEIGHT);
            if self.is_loading {
                render_skeleton(frame, rect, self.pulse);
            } else {
                let selected = index == self.state.selected;
                render_tile(frame, rect, self.items[index], selected);
                self.state.tile_areas.push((index, rect));
            }
        }
    }
}

fn render_tile(frame: &mut Frame, area: Rect, item: &Item, selected: bool) {
    let block = Block::bordered()
        .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
        .border_style(theme::border(selected));
    let lines = vec![
        Line::from(vec![
            Span::styled("▚▞ ", theme::subtle()),
            Span::styled(item.meta, theme::subtle()),
        ]),
        Line::from(Span::styled(item.price, theme::heading())),
        Line::from(Span::styled(item.title, theme::text())),
        Line::from(Span::styled(format!("by {}", item.creator_name()), theme::subtle())),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_skeleton(frame: &mut Frame, area: Rect, pulse: f32) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fill = Style::default().bg(theme::skeleton(pulse));
    let bar = |fraction: u16| Span::styled(" ".repeat((inner.width * fraction / 4) as usize), fill);
    let lines = vec![Line::default(), Line::from(bar(1)), Line::from(bar(3))];
    frame.render_widget(Paragraph::new(lines), inner);
}

impl Component for ExploreScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header, hero, _, chips, _, grid, help] = Layout::vertical([
            Length(2),
            Length(5),
            Length(1),
            Length(1),
            Length(1),
            Min(0),
            Length(1),
        ])
        .areas(area);

        self.render_header(frame, header);
        self.render_hero(frame, hero);
        self.render_chips(frame, chips);
        self.render_grid(frame, grid);

        frame.render_widget(
            Paragraph::new(" ←→↑↓ Move  Enter Open  [ ] Category  / Search  Esc Quit ")
                .style(theme::subtle())
                .alignment(Alignment::Center),
            help,
        );
    }
}
