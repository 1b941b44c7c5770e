//! # TitleBar Component
//!
//! Top status line: app name, current screen, and a transient notice
//! ("Published!", "Generating Export...") when one is set.
//!
//! Stateless. All fields are props copied from `App` each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme;

pub struct TitleBar {
    pub view_label: &'static str,
    pub notice: Option<String>,
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(view_label: &'static str, notice: Option<String>, is_loading: bool) -> Self {
        Self {
            view_label,
            notice,
            is_loading,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Tracebay", theme::heading()),
            Span::styled(format!(" | {}", self.view_label), theme::muted()),
        ];
        if self.is_loading {
            spans.push(Span::styled(" | Loading...", theme::subtle()));
        }
        if let Some(notice) = &self.notice {
            spans.push(Span::styled(format!(" | {notice}"), theme::accent()));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
