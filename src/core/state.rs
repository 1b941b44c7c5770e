//! # Application State
//!
//! Core marketplace state. Domain data only; grid cursors, scroll offsets
//! and animations live in the `tui` module.
//!
//! ```text
//! App
//! ├── view: View                          // screen currently shown
//! ├── active_tab: Tab                     // bottom-bar highlight
//! ├── active_category: &str               // selected chip
//! ├── filtered: Vec<&Item>                // catalogue ∩ active_category
//! ├── selected_item: Option<&Item>        // item shown by Detail/Tweak
//! ├── detail_origin: View                 // where Detail returns to
//! ├── is_loading: bool                    // simulated fetch in flight
//! └── notice: Option<String>              // transient status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use crate::core::catalogue::{ALL_CATEGORY, CATALOGUE, Item, filter_by_category};
use crate::core::config::ResolvedConfig;
use crate::core::view::{Tab, View};

pub struct App {
    pub view: View,
    pub active_tab: Tab,
    pub active_category: &'static str,
    /// Recomputed only when `active_category` changes.
    pub filtered: Vec<&'static Item>,
    pub selected_item: Option<&'static Item>,
    pub detail_origin: View,
    /// True until the loading timer fires. Never goes back to true.
    pub is_loading: bool,
    pub notice: Option<String>,
    /// How long the simulated fetch takes. Read by the TUI when it starts the timer.
    pub loading_delay: Duration,
}

impl App {
    pub fn new() -> Self {
        Self {
            view: View::Explore,
            active_tab: Tab::Explore,
            active_category: ALL_CATEGORY,
            filtered: filter_by_category(CATALOGUE, ALL_CATEGORY),
            selected_item: None,
            detail_origin: View::Explore,
            is_loading: true,
            notice: None,
            loading_delay: crate::core::loading::DEFAULT_LOADING_DELAY,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new();
        app.active_tab = config.start_tab;
        app.view = config.start_tab.view();
        app.set_category(config.default_category);
        app.loading_delay = config.loading_delay;
        app
    }

    /// Switch the active chip and refresh the filtered list.
    pub(crate) fn set_category(&mut self, category: &'static str) {
        if self.active_category == category {
            return;
        }
        self.active_category = category;
        self.filtered = filter_by_category(CATALOGUE, category);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
