//! # Views and Tabs
//!
//! The closed set of screens the app can show, and the bottom-navigation
//! tabs that lead to some of them.
//!
//! ```text
//! Tab::Explore ─▶ View::Explore        View::Detail ─▶ View::Tweak
//! Tab::Search  ─▶ View::Search               ▲              │
//! Tab::Create  ─▶ View::List                 └──── back ────┘
//! Tab::Library ─▶ View::Library
//! Tab::Profile ─▶ View::Profile
//! ```
//!
//! Detail and Tweak have no tab of their own; they are reached by opening an
//! item from the grid.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Explore,
    Search,
    Detail,
    Tweak,
    List,
    Library,
    Profile,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Explore => "Explorer",
            View::Search => "Search",
            View::Detail => "Detail",
            View::Tweak => "Tweak Template",
            View::List => "List Template",
            View::Library => "Library",
            View::Profile => "Profile",
        }
    }

    /// Views that need a selected item to render.
    pub fn requires_item(&self) -> bool {
        matches!(self, View::Detail | View::Tweak)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Explore,
    Search,
    Create,
    Library,
    Profile,
}

impl Tab {
    /// Tabs in bottom-bar order.
    pub const ALL: [Tab; 5] = [Tab::Explore, Tab::Search, Tab::Create, Tab::Library, Tab::Profile];

    /// The view a tab press lands on.
    pub fn view(&self) -> View {
        match self {
            Tab::Explore => View::Explore,
            Tab::Search => View::Search,
            Tab::Create => View::List,
            Tab::Library => View::Library,
            Tab::Profile => View::Profile,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Explore => "Explore",
            Tab::Search => "Search",
            Tab::Create => "Create",
            Tab::Library => "Library",
            Tab::Profile => "Profile",
        }
    }

    /// Digit shortcut shown in the bottom bar.
    pub fn hotkey(&self) -> char {
        match self {
            Tab::Explore => '1',
            Tab::Search => '2',
            Tab::Create => '3',
            Tab::Library => '4',
            Tab::Profile => '5',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.hotkey() == c)
    }
}
