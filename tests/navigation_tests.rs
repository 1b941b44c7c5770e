use std::sync::mpsc;
use std::time::Duration;

use tracebay::core::action::{Action, Effect, NOTICE_EXPORTING, NOTICE_PUBLISHED, update};
use tracebay::core::catalogue::{ALL_CATEGORY, CATALOGUE, CATEGORIES};
use tracebay::core::config::{CliOverrides, ResolvedConfig, parse_config, resolve_with};
use tracebay::core::loading::LoadingTimer;
use tracebay::core::state::App;
use tracebay::core::view::{Tab, View};

// ============================================================================
// Helper Functions
// ============================================================================

/// An app past its loading phase, as the user sees it after the first second.
fn ready_app() -> App {
    let mut app = App::new();
    update(&mut app, Action::LoadingFinished);
    app
}

fn ids(app: &App) -> Vec<&'static str> {
    app.filtered.iter().map(|item| item.id).collect()
}

/// Apply a sequence of actions, returning the effect of the last one.
fn apply(app: &mut App, actions: impl IntoIterator<Item = Action>) -> Effect {
    actions
        .into_iter()
        .fold(Effect::None, |_, action| update(app, action))
}

// ============================================================================
// Category Filter
// ============================================================================

#[test]
fn test_power_filter_shows_items_one_and_two() {
    let mut app = ready_app();
    update(&mut app, Action::SelectCategory("Power"));
    assert_eq!(ids(&app), vec!["1", "2"]);
}

#[test]
fn test_new_category_is_empty() {
    let mut app = ready_app();
    update(&mut app, Action::SelectCategory("New"));
    assert!(app.filtered.is_empty());
}

#[test]
fn test_every_category_matches_exactly() {
    let mut app = ready_app();
    for &category in CATEGORIES {
        update(&mut app, Action::SelectCategory(category));
        let expected: Vec<&str> = CATALOGUE
            .iter()
            .filter(|item| category == ALL_CATEGORY || item.category == category)
            .map(|item| item.id)
            .collect();
        assert_eq!(ids(&app), expected, "category {category}");
    }
}

#[test]
fn test_cycling_categories_wraps_back_to_all() {
    let mut app = ready_app();
    for _ in 0..CATEGORIES.len() {
        update(&mut app, Action::NextCategory);
    }
    assert_eq!(app.active_category, ALL_CATEGORY);
    assert_eq!(app.filtered.len(), CATALOGUE.len());
}

// ============================================================================
// View Router
// ============================================================================

#[test]
fn test_open_and_close_detail_keeps_catalogue() {
    let mut app = ready_app();
    let before: Vec<_> = CATALOGUE.to_vec();

    update(&mut app, Action::OpenItem(&CATALOGUE[3]));
    assert_eq!(app.view, View::Detail);
    assert_eq!(app.selected_item.map(|i| i.title), Some("IMU Breakout"));

    update(&mut app, Action::CloseDetail);
    assert_eq!(app.view, View::Explore);
    assert_eq!(CATALOGUE.to_vec(), before);
}

#[test]
fn test_tweak_requires_selected_item() {
    let mut app = ready_app();
    update(&mut app, Action::OpenTweak);
    assert_eq!(app.view, View::Explore);
}

#[test]
fn test_full_export_flow() {
    let mut app = ready_app();
    let effect = apply(
        &mut app,
        [
            Action::SelectCategory("Connectivity"),
            Action::OpenItem(&CATALOGUE[4]),
            Action::OpenTweak,
            Action::GenerateExport,
        ],
    );
    assert_eq!(effect, Effect::None);
    assert_eq!(app.view, View::Explore);
    assert_eq!(app.active_tab, Tab::Explore);
    assert_eq!(app.notice.as_deref(), Some(NOTICE_EXPORTING));

    // The next user action clears it
    update(&mut app, Action::NextCategory);
    assert_eq!(app.notice, None);
}

#[test]
fn test_library_list_publish_flow() {
    let mut app = ready_app();
    apply(&mut app, [Action::SelectTab(Tab::Library), Action::ListNew]);
    assert_eq!(app.view, View::List);
    assert_eq!(app.active_tab, Tab::Create);

    update(&mut app, Action::PublishListing);
    assert_eq!(app.view, View::Explore);
    assert_eq!(app.notice.as_deref(), Some(NOTICE_PUBLISHED));
}

#[test]
fn test_back_chain_ends_in_quit() {
    let mut app = ready_app();
    apply(&mut app, [Action::OpenItem(&CATALOGUE[0]), Action::OpenTweak]);

    assert_eq!(update(&mut app, Action::Back), Effect::None);
    assert_eq!(app.view, View::Detail);
    assert_eq!(update(&mut app, Action::Back), Effect::None);
    assert_eq!(app.view, View::Explore);
    assert_eq!(update(&mut app, Action::Back), Effect::Quit);
}

#[test]
fn test_every_tab_maps_to_its_view() {
    let mut app = ready_app();
    for tab in Tab::ALL {
        update(&mut app, Action::SelectTab(tab));
        assert_eq!(app.view, tab.view());
        assert_eq!(app.active_tab, tab);
    }
}

// ============================================================================
// Config → App
// ============================================================================

#[test]
fn test_config_file_sets_start_state() {
    let file = parse_config(
        r#"
[general]
default_category = "robotics"
start_tab = "library"
loading_delay_ms = 10
"#,
    )
    .unwrap();
    let resolved = resolve_with(&file, &CliOverrides::default(), |_| None);
    let app = App::from_config(&resolved);

    assert_eq!(app.active_category, "Robotics");
    assert_eq!(ids(&app), vec!["3"]);
    assert_eq!(app.view, View::Library);
    assert_eq!(app.loading_delay, Duration::from_millis(10));
    assert!(app.is_loading);
}

// ============================================================================
// Loading Simulator
// ============================================================================

#[tokio::test]
async fn test_loading_timer_drives_app_out_of_loading() {
    let config = ResolvedConfig {
        loading_delay: Duration::from_millis(20),
        ..ResolvedConfig::default()
    };
    let mut app = App::from_config(&config);
    assert!(app.is_loading);

    let (tx, rx) = mpsc::channel();
    let timer = LoadingTimer::start(app.loading_delay, tx);
    tokio::time::sleep(Duration::from_millis(100)).await;

    let actions: Vec<Action> = rx.try_iter().collect();
    assert_eq!(actions, vec![Action::LoadingFinished]);
    for action in actions {
        update(&mut app, action);
    }
    assert!(!app.is_loading);
    assert!(timer.is_finished());

    // A stray second delivery changes nothing
    update(&mut app, Action::LoadingFinished);
    assert!(!app.is_loading);
}
