//! # BottomNav Component
//!
//! One-line tab bar pinned to the bottom of the screen. The active tab is
//! drawn in the accent colour. Tabs can be chosen with their digit hotkey or
//! by clicking; `render` records each tab's rectangle for hit-testing.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::core::view::Tab;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct BottomNav<'a> {
    pub active: Tab,
    /// Filled during render: (tab, area) pairs for click handling.
    pub hit_areas: &'a mut Vec<(Tab, Rect)>,
}

impl<'a> BottomNav<'a> {
    pub fn new(active: Tab, hit_areas: &'a mut Vec<(Tab, Rect)>) -> Self {
        Self { active, hit_areas }
    }
}

impl Component for BottomNav<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.hit_areas.clear();
        let mut x = area.x;
        for tab in Tab::ALL {
            let text = format!(" {} {} ", tab.hotkey(), tab.label());
            let width = (text.width() as u16).min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            let style = if tab == self.active {
                theme::accent().add_modifier(Modifier::BOLD)
            } else {
                theme::subtle()
            };
            let rect = Rect::new(x, area.y, width, 1);
            frame.render_widget(Span::styled(text, style), rect);
            self.hit_areas.push((tab, rect));
            x += width + 1;
        }
    }
}

/// The tab under a click, if any.
pub fn hit_test(hit_areas: &[(Tab, Rect)], col: u16, row: u16) -> Option<Tab> {
    hit_areas
        .iter()
        .find(|(_, rect)| rect.contains(Position::new(col, row)))
        .map(|(tab, _)| *tab)
}
