//! # Theme Tokens
//!
//! Colour and style tokens shared by every screen. The palette is a light
//! blueprint look: near-black ink, one saturated blue accent, soft greys.

use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const TEXT: Color = Color::Rgb(0x0B, 0x0D, 0x12);
/// `TEXT` at 60% on white.
pub const MUTED: Color = Color::Rgb(0x6D, 0x6E, 0x71);
/// `TEXT` at 40% on white.
pub const SUBTLE: Color = Color::Rgb(0x9D, 0x9E, 0xA0);
/// `TEXT` at 10% on white.
pub const BORDER: Color = Color::Rgb(0xE7, 0xE7, 0xE7);
/// `TEXT` at 16% on white.
pub const BORDER_STRONG: Color = Color::Rgb(0xD8, 0xD8, 0xD9);
pub const SURFACE: Color = Color::Rgb(0xF7, 0xF8, 0xFB);
pub const PRIMARY: Color = Color::Rgb(0x00, 0x38, 0xDF);
/// `PRIMARY` at 10% on white.
pub const PRIMARY_SOFT: Color = Color::Rgb(0xE6, 0xEB, 0xFC);
pub const SUCCESS: Color = Color::Rgb(0x16, 0xA3, 0x4A);
pub const WARNING: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
pub const DANGER: Color = Color::Rgb(0xEF, 0x44, 0x44);

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn subtle() -> Style {
    Style::default().fg(SUBTLE)
}

pub fn heading() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn accent() -> Style {
    Style::default().fg(PRIMARY)
}

/// Filled primary button / active chip.
pub fn button() -> Style {
    Style::default()
        .fg(BG)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Outlined secondary button / idle chip.
pub fn button_quiet() -> Style {
    Style::default().fg(MUTED).bg(SURFACE)
}

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(BORDER_STRONG)
    }
}

/// Pass/fail badge colour for a DFM label.
pub fn dfm_badge(status: &str) -> Style {
    let color = match status {
        "Passed" => SUCCESS,
        "Warning" => WARNING,
        _ => DANGER,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Skeleton tile fill for a pulse value in `[0, 1]`.
pub fn skeleton(pulse: f32) -> Color {
    let lerp = |a: u8, b: u8| -> u8 {
        let t = pulse.clamp(0.0, 1.0);
        (a as f32 + (b as f32 - a as f32) * t).round() as u8
    };
    // Between "black/2%" and "black/5%" on white
    Color::Rgb(lerp(0xFA, 0xF2), lerp(0xFA, 0xF2), lerp(0xFA, 0xF3))
}
