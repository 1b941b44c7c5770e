//! # Detail Screen
//!
//! Full-page view of one template: preview hero with a Board / Schematic /
//! BOM strip, title and price, DFM badge, the stats row, the description,
//! and a sticky call-to-action bar ("Try & Tweak", "Buy").
//!
//! The body scrolls inside a `tui_scrollview::ScrollView`; heights are
//! measured with `Paragraph::line_count` the same way message layout is.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalogue::Item;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

const HERO_HEIGHT: u16 = 8;
const STATS_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewTab {
    #[default]
    Board,
    Schematic,
    Bom,
}

impl PreviewTab {
    pub const ALL: [PreviewTab; 3] = [PreviewTab::Board, PreviewTab::Schematic, PreviewTab::Bom];

    pub fn label(&self) -> &'static str {
        match self {
            PreviewTab::Board => "Board",
            PreviewTab::Schematic => "Schematic",
            PreviewTab::Bom => "BOM",
        }
    }

    pub fn next(self) -> Self {
        match self {
            PreviewTab::Board => PreviewTab::Schematic,
            PreviewTab::Schematic => PreviewTab::Bom,
            PreviewTab::Bom => PreviewTab::Board,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }
}

/// Persistent state for the detail screen. Reset each time an item is opened.
#[derive(Default)]
pub struct DetailState {
    pub scroll: ScrollViewState,
    pub preview: PreviewTab,
    tweak_area: Rect,
    back_area: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    Back,
    OpenTweak,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape => Some(DetailEvent::Back),
            TuiEvent::Submit | TuiEvent::InputChar('t') => Some(DetailEvent::OpenTweak),
            TuiEvent::FocusNext => {
                self.preview = self.preview.next();
                None
            }
            TuiEvent::FocusPrev => {
                self.preview = self.preview.prev();
                None
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp | TuiEvent::InputChar('k') => {
                self.scroll.scroll_up();
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown | TuiEvent::InputChar('j') => {
                self.scroll.scroll_down();
                None
            }
            TuiEvent::MouseClick(col, row) => {
                let pos = Position::new(*col, *row);
                if self.tweak_area.contains(pos) {
                    Some(DetailEvent::OpenTweak)
                } else if self.back_area.contains(pos) {
                    Some(DetailEvent::Back)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the detail screen.
pub struct DetailScreen<'a> {
    state: &'a mut DetailState,
    item: &'a Item,
}

impl<'a> DetailScreen<'a> {
    pub fn new(state: &'a mut DetailState, item: &'a Item) -> Self {
        Self { state, item }
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let back = " ← Back ";
        let back_width = (back.chars().count() as u16).min(area.width);
        self.state.back_area = Rect::new(area.x, area.y, back_width, 1);
        frame.render_widget(Paragraph::new(Span::styled(back, theme::muted())), area);
        frame.render_widget(
            Paragraph::new(Span::styled(" Share ", theme::muted())).alignment(Alignment::Right),
            area,
        );
    }

    fn render_cta(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [tweak, _, buy] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(9),
        ])
        .areas(inner);
        self.state.tweak_area = tweak;
        frame.render_widget(
            Paragraph::new("Try & Tweak").style(theme::button()).alignment(Alignment::Center),
            tweak,
        );
        frame.render_widget(
            Paragraph::new("Buy")
                .style(theme::text().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default()),
            buy,
        );
    }

    fn hero(&self) -> Paragraph<'a> {
        let mut strip = Vec::new();
        for tab in PreviewTab::ALL {
            let style = if tab == self.state.preview {
                theme::button()
            } else {
                theme::button_quiet()
            };
            strip.push(Span::styled(format!(" {} ", tab.label()), style));
            strip.push(Span::raw(" "));
        }
        strip.pop();

        let lines = vec![
            Line::default(),
            Line::from(Span::styled("▚▞▚▞▚▞▚▞▚▞▚▞", theme::subtle())),
            Line::from(Span::styled(self.item.image, theme::subtle())),
            Line::from(Span::styled("▞▚▞▚▞▚▞▚▞▚▞▚", theme::subtle())),
            Line::default(),
            Line::from(strip),
        ];
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BORDER_STRONG)),
        )
    }

    fn stat(value: &'a str, label: &'a str) -> Paragraph<'a> {
        Paragraph::new(vec![
            Line::from(Span::styled(value, theme::heading())),
            Line::from(Span::styled(label.to_uppercase(), theme::subtle())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BORDER))
                .style(Style::default().bg(theme::SURFACE)),
        )
    }
}

impl Component for DetailScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header, body, cta] = Layout::vertical([Length(1), Min(0), Length(2)]).areas(area);

        self.render_header(frame, header);
        self.render_cta(frame, cta);

        let width = body.width.saturating_sub(1);
        let item = self.item;

        let description = Paragraph::new(item.description)
            .style(theme::muted())
            .wrap(Wrap { trim: true });
        let description_height = description.line_count(width) as u16;

        // Rows: hero, gap, title, badge, gap, stats, gap, heading, description
        let rows = [
            HERO_HEIGHT,
            1,
            1,
            1,
            1,
            STATS_HEIGHT,
            1,
            1,
            description_height,
        ];
        let total: u16 = rows.iter().sum();
        let mut y = 0u16;
        let mut next_row = |height: u16| {
            let rect = Rect::new(0, y, width, height);
            y += height;
            rect
        };

        let mut view = ScrollView::new(Size::new(width, total))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        view.render_widget(self.hero(), next_row(HERO_HEIGHT));
        next_row(1);

        let title_row = next_row(1);
        view.render_widget(Paragraph::new(Span::styled(item.title, theme::heading())), title_row);
        view.render_widget(
            Paragraph::new(Span::styled(item.price, theme::accent().add_modifier(Modifier::BOLD)))
                .alignment(Alignment::Right),
            title_row,
        );

        view.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!(" DFM: {} ", item.dfm_status.to_uppercase()),
                    theme::dfm_badge(item.dfm_status),
                ),
                Span::styled(format!("  by {}", item.creator), theme::subtle()),
            ])),
            next_row(1),
        );
        next_row(1);

        let stats_row = next_row(STATS_HEIGHT);
        let [layers, _, size, _, cost] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(stats_row);
        view.render_widget(Self::stat(item.layers, "Layers"), layers);
        view.render_widget(Self::stat(item.size, "Size"), size);
        view.render_widget(Self::stat(item.est_cost, "Est. Cost"), cost);
        next_row(1);

        let heading = Paragraph::new(Span::styled("Description", theme::heading()));
        view.render_widget(heading, next_row(1));
        view.render_widget(description, next_row(description_height));

        frame.render_stateful_widget(view, body, &mut self.state.scroll);
    }
}
