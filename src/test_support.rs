//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::backend::TestBackend;

use crate::core::action::{Action, update};
use crate::core::state::App;

/// A fresh app, still in its simulated loading phase.
pub fn test_app() -> App {
    App::new()
}

/// An app whose loading timer has already fired.
pub fn loaded_app() -> App {
    let mut app = App::new();
    update(&mut app, Action::LoadingFinished);
    app
}

/// Flatten a test backend's buffer into one string, row by row.
pub fn buffer_text(backend: &TestBackend) -> String {
    let buffer = backend.buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
