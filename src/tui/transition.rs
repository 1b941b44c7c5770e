//! # Screen Transitions
//!
//! Entering a screen plays a short animation: most screens fade in, the
//! detail page slides in from the right, and the tweak sheet rises from the
//! bottom. Progress is a pure function of elapsed time so rendering code can
//! ask "where should this screen be right now?" without keeping its own timer.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::core::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Fade,
    SlideFromRight,
    SlideFromBottom,
}

impl TransitionKind {
    pub fn for_view(view: View) -> Self {
        match view {
            View::Detail => TransitionKind::SlideFromRight,
            View::Tweak => TransitionKind::SlideFromBottom,
            _ => TransitionKind::Fade,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub kind: TransitionKind,
    started: Instant,
    duration: Duration,
}

impl Transition {
    pub fn new(kind: TransitionKind, started: Instant, duration: Duration) -> Self {
        Self {
            kind,
            started,
            duration,
        }
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = now.saturating_duration_since(self.started).as_secs_f32()
            / self.duration.as_secs_f32();
        ease_out_cubic(t.clamp(0.0, 1.0))
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// The area the entering screen occupies at `progress`.
    ///
    /// Slides shrink the rect from the leading edge, so content is clipped
    /// rather than drawn off-screen.
    pub fn apply(&self, area: Rect, progress: f32) -> Rect {
        let remaining = 1.0 - progress.clamp(0.0, 1.0);
        match self.kind {
            TransitionKind::Fade => area,
            TransitionKind::SlideFromRight => {
                let offset = (area.width as f32 * remaining).round() as u16;
                Rect {
                    x: area.x + offset,
                    width: area.width - offset,
                    ..area
                }
            }
            TransitionKind::SlideFromBottom => {
                let offset = (area.height as f32 * remaining).round() as u16;
                Rect {
                    y: area.y + offset,
                    height: area.height - offset,
                    ..area
                }
            }
        }
    }

    /// Fades draw dimmed for the first half of the animation.
    pub fn dimmed(&self, progress: f32) -> bool {
        self.kind == TransitionKind::Fade && progress < 0.5
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
