//! # Core Application Logic
//!
//! This module contains Tracebay's marketplace logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalogue (items)    │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌──────┴─────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalogue`]: The fixed item list and category filter
//! - [`view`]: The `View` and `Tab` enums
//! - [`state`]: The `App` struct, all marketplace state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`loading`]: The one-shot simulated fetch timer
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod catalogue;
pub mod config;
pub mod loading;
pub mod state;
pub mod view;
