//! # Actions
//!
//! Everything that can happen in Tracebay becomes an `Action`.
//! User taps a tile? That's `Action::OpenItem(item)`.
//! The loading timer fires? That's `Action::LoadingFinished`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state in place. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::catalogue::{CATEGORIES, Item};
use crate::core::state::App;
use crate::core::view::{Tab, View};

pub const NOTICE_PUBLISHED: &str = "Published!";
pub const NOTICE_EXPORTING: &str = "Generating Export...";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectCategory(&'static str),
    NextCategory,
    PrevCategory,
    OpenItem(&'static Item),
    CloseDetail,
    OpenTweak,
    CloseTweak,
    OpenSearch,
    SelectTab(Tab),
    /// "List New" on the library screen.
    ListNew,
    CloseList,
    PublishListing,
    GenerateExport,
    /// Esc: leave the current screen.
    Back,
    LoadingFinished,
    /// Any key or click that doesn't map to another action.
    DismissNotice,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} (view={:?})", action, app.view);

    // Notices last until the next thing the user does
    if action != Action::LoadingFinished {
        app.notice = None;
    }

    let before = app.view;
    let effect = match action {
        Action::SelectCategory(category) => {
            app.set_category(category);
            Effect::None
        }
        Action::NextCategory => {
            app.set_category(step_category(app.active_category, 1));
            Effect::None
        }
        Action::PrevCategory => {
            app.set_category(step_category(app.active_category, -1));
            Effect::None
        }
        Action::OpenItem(item) => {
            app.selected_item = Some(item);
            if !app.view.requires_item() {
                app.detail_origin = app.view;
            }
            app.view = View::Detail;
            Effect::None
        }
        Action::CloseDetail => {
            if app.view == View::Detail {
                app.view = app.detail_origin;
            }
            Effect::None
        }
        Action::OpenTweak => {
            if app.view == View::Detail && app.selected_item.is_some() {
                app.view = View::Tweak;
            }
            Effect::None
        }
        Action::CloseTweak => {
            if app.view == View::Tweak {
                app.view = View::Detail;
            }
            Effect::None
        }
        Action::OpenSearch => {
            select_tab(app, Tab::Search);
            Effect::None
        }
        Action::SelectTab(tab) => {
            select_tab(app, tab);
            Effect::None
        }
        Action::ListNew => {
            select_tab(app, Tab::Create);
            Effect::None
        }
        Action::CloseList => {
            select_tab(app, Tab::Explore);
            Effect::None
        }
        Action::PublishListing => {
            select_tab(app, Tab::Explore);
            app.notice = Some(NOTICE_PUBLISHED.to_string());
            Effect::None
        }
        Action::GenerateExport => {
            select_tab(app, Tab::Explore);
            app.notice = Some(NOTICE_EXPORTING.to_string());
            Effect::None
        }
        Action::Back => match app.view {
            View::Tweak => {
                app.view = View::Detail;
                Effect::None
            }
            View::Detail => {
                app.view = app.detail_origin;
                Effect::None
            }
            View::Explore => Effect::Quit,
            View::Search | View::List | View::Library | View::Profile => {
                select_tab(app, Tab::Explore);
                Effect::None
            }
        },
        Action::LoadingFinished => {
            if app.is_loading {
                app.is_loading = false;
                info!("Catalogue loaded ({} items)", app.filtered.len());
            }
            Effect::None
        }
        Action::DismissNotice => Effect::None,
        Action::Quit => Effect::Quit,
    };

    if app.view != before {
        info!("View: {:?} -> {:?}", before, app.view);
    }
    effect
}

fn select_tab(app: &mut App, tab: Tab) {
    app.active_tab = tab;
    app.view = tab.view();
}

/// The chip `offset` positions away from `current`, wrapping around.
/// An unknown current category steps from `All`.
fn step_category(current: &str, offset: isize) -> &'static str {
    let len = CATEGORIES.len() as isize;
    let index = CATEGORIES.iter().position(|c| *c == current).unwrap_or(0) as isize;
    CATEGORIES[(index + offset).rem_euclid(len) as usize]
}
