use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Anything that draws itself into a region of the frame: screens, the
/// title bar, the tab bar, text fields.
///
/// Screens are built fresh each frame around a borrowed `XState`, so
/// `render` takes `&mut self` and may write back into that state. Explore
/// records tile and chip rectangles for click handling, detail stores its
/// scroll offset.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Widgets that own their input handling and report back with a small
/// event enum of their own. Used by `TextField`; screens expose an inherent
/// `handle_event` instead because they need extra props such as item counts.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
