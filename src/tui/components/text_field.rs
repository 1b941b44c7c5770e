//! # TextField Component
//!
//! Single-line text input used by the search box and the listing form.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `focused` is a prop: the parent
//! decides which field receives keystrokes and only that field shows the
//! terminal cursor. Text wider than the box scrolls horizontally so the
//! cursor stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

/// High-level events emitted by the TextField
#[derive(Debug, Clone, PartialEq)]
pub enum TextFieldEvent {
    /// Enter pressed
    Submit,
    /// Buffer or cursor changed
    Changed,
}

pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether this field receives input (Prop)
    pub focused: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            buffer: String::new(),
            focused: false,
            cursor: 0,
        }
    }

    /// Start with `value` in the buffer and the cursor at its end.
    pub fn with_value(mut self, value: &str) -> Self {
        self.buffer = value.to_string();
        self.cursor = self.buffer.len();
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Height including borders.
    pub const HEIGHT: u16 = 3;

    /// Display columns to skip so the cursor fits inside `inner_width`.
    fn scroll_columns(&self, inner_width: u16) -> usize {
        let cursor_col = self.buffer[..self.cursor].width();
        let visible = inner_width.saturating_sub(1) as usize;
        cursor_col.saturating_sub(visible)
    }
}

/// Slice of `s` starting after `skip` display columns.
fn skip_columns(s: &str, skip: usize) -> &str {
    let mut col = 0;
    for (idx, ch) in s.char_indices() {
        if col >= skip {
            return &s[idx..];
        }
        col += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    ""
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map(|c| pos + c.len_utf8()).unwrap_or(pos)
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::border(self.focused))
            .title(Span::styled(format!(" {} ", self.label), theme::subtle()));
        let inner = block.inner(area);

        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(self.placeholder, theme::subtle()))
        } else {
            let skip = self.scroll_columns(inner.width);
            Line::from(Span::styled(skip_columns(&self.buffer, skip), theme::text()))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let skip = self.scroll_columns(inner.width);
            let col = self.buffer[..self.cursor].width().saturating_sub(skip) as u16;
            frame.set_cursor_position((inner.x + col.min(inner.width - 1), inner.y));
        }
    }
}

impl EventHandler for TextField {
    type Event = TextFieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(TextFieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(TextFieldEvent::Changed)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                TextFieldEvent::Changed
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                TextFieldEvent::Changed
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                TextFieldEvent::Changed
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                TextFieldEvent::Changed
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                TextFieldEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                TextFieldEvent::Changed
            }),
            TuiEvent::Submit => Some(TextFieldEvent::Submit),
            _ => None,
        }
    }
}
