//! # TUI Components
//!
//! Every screen of the marketplace plus the chrome around it.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status line with the current screen and notice
//! - `BottomNav`: Tab bar with hotkeys and click areas
//!
//! ### Stateful Components (Event-Driven)
//!
//! Screens keep a persistent `XState` in `TuiState` and are drawn through a
//! transient `XScreen` wrapper built each frame. `XState::handle_event`
//! returns a screen-specific event that the router turns into a core
//! `Action`:
//! - `ExploreState` / `ExploreScreen`: Hero, category chips, template grid
//! - `DetailState` / `DetailScreen`: Scrollable template page
//! - `TweakState` / `TweakSheet`: Bottom sheet over the detail page
//! - `ListFormState` / `ListForm`: "List Template" form
//! - `SearchState`, `LibraryState`, `ProfileState`: the other tabs
//! - `TextField`: Single-line input shared by search and the list form
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs
//! ├── bottom_nav.rs
//! ├── text_field.rs
//! ├── explore.rs
//! ├── detail.rs
//! ├── tweak.rs
//! ├── list_form.rs
//! ├── search.rs
//! ├── library.rs
//! └── profile.rs
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod bottom_nav;
pub use bottom_nav::BottomNav;
pub mod text_field;

pub mod detail;
pub mod explore;
pub mod library;
pub mod list_form;
pub mod profile;
pub mod search;
pub mod tweak;
pub use detail::{DetailEvent, DetailScreen, DetailState};
pub use explore::{ExploreEvent, ExploreScreen, ExploreState};
pub use library::{LibraryEvent, LibraryScreen, LibraryState};
pub use list_form::{ListForm, ListFormEvent, ListFormState};
pub use profile::{ProfileEvent, ProfileScreen, ProfileState};
pub use search::{SearchEvent, SearchScreen, SearchState};
pub use tweak::{TweakEvent, TweakSheet, TweakState};
