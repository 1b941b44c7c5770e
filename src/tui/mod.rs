//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (skeleton pulse while loading, screen transition): draws
//!   every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize,
//!   or an action from the loading timer.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod theme;
mod transition;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::loading::LoadingTimer;
use crate::core::state::App;
use crate::core::view::{Tab, View};
use crate::tui::components::bottom_nav;
use crate::tui::components::{
    DetailEvent, DetailState, ExploreEvent, ExploreState, LibraryEvent, LibraryState,
    ListFormEvent, ListFormState, ProfileEvent, ProfileState, SearchEvent, SearchState,
    TweakEvent, TweakState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::transition::{Transition, TransitionKind};

const ANIMATING_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent screen states
    pub explore: ExploreState,
    pub detail: DetailState,
    pub tweak: TweakState,
    pub list_form: ListFormState,
    pub search: SearchState,
    pub library: LibraryState,
    pub profile: ProfileState,
    // Animation state
    pub pulse_value: f32,
    pub transition: Option<Transition>,
    animations: bool,
    transition_duration: Duration,
    // Bottom nav hit areas, filled during render
    pub nav_areas: Vec<(Tab, Rect)>,
    // Last synced core state, used to notice view and category changes
    last_view: View,
    last_category: &'static str,
}

impl TuiState {
    pub fn new(app: &App, config: &ResolvedConfig) -> Self {
        Self {
            explore: ExploreState::new(),
            detail: DetailState::new(),
            tweak: TweakState::new(),
            list_form: ListFormState::new(),
            search: SearchState::new(),
            library: LibraryState::new(),
            profile: ProfileState::new(),
            pulse_value: 0.0,
            transition: None,
            animations: config.animations,
            transition_duration: config.transition,
            nav_areas: Vec::new(),
            last_view: app.view,
            last_category: app.active_category,
        }
    }

    #[cfg(test)]
    pub fn without_animations() -> Self {
        let config = ResolvedConfig {
            animations: false,
            ..ResolvedConfig::default()
        };
        Self::new(&App::new(), &config)
    }

    /// Reconcile presentation state with the core state after updates.
    ///
    /// Entering a screen resets its local state and starts its transition.
    /// A category change moves the grid cursor back to the first tile.
    pub fn sync(&mut self, app: &App, now: Instant) {
        if app.active_category != self.last_category {
            self.explore.reset_selection();
            self.last_category = app.active_category;
        }
        if app.view != self.last_view {
            self.on_view_change(self.last_view, app.view, now);
            self.last_view = app.view;
        }
        if self.transition.is_some_and(|t| t.is_done(now)) {
            self.transition = None;
        }
    }

    fn on_view_change(&mut self, from: View, to: View, now: Instant) {
        debug!("Screen change {:?} -> {:?}", from, to);
        match to {
            // Coming back down from the sheet keeps the detail scroll position
            View::Detail if from == View::Tweak => {}
            View::Detail => self.detail = DetailState::new(),
            View::Tweak => self.tweak = TweakState::new(),
            View::List => self.list_form = ListFormState::new(),
            View::Search => self.search = SearchState::new(),
            View::Profile => self.profile = ProfileState::new(),
            View::Explore | View::Library => {}
        }

        let animate = self.animations && !(from == View::Tweak && to == View::Detail);
        self.transition = animate
            .then(|| Transition::new(TransitionKind::for_view(to), now, self.transition_duration));
    }

    /// Whether keystrokes are going into a text field, which turns off
    /// single-key shortcuts such as the tab digits.
    fn captures_text(&self, app: &App) -> bool {
        match app.view {
            View::Search => true,
            View::List => self.list_form.captures_text(),
            _ => false,
        }
    }

    pub fn is_animating(&self, app: &App) -> bool {
        app.is_loading || self.transition.is_some()
    }
}

/// Translate one terminal event into at most one core action.
///
/// Global bindings (Ctrl+C, tab digits, tab-bar clicks) are checked first;
/// everything else goes to the screen that is showing.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::MouseClick(col, row) => {
            if let Some(tab) = bottom_nav::hit_test(&tui.nav_areas, *col, *row) {
                return Some(Action::SelectTab(tab));
            }
        }
        TuiEvent::InputChar(c) if !tui.captures_text(app) => {
            if let Some(tab) = Tab::from_hotkey(*c) {
                return Some(Action::SelectTab(tab));
            }
        }
        _ => {}
    }

    match app.view {
        View::Explore => {
            if matches!(event, TuiEvent::Escape) {
                return Some(Action::Back);
            }
            let explore_event = tui
                .explore
                .handle_event(event, app.filtered.len(), app.is_loading)?;
            match explore_event {
                ExploreEvent::Open(index) => {
                    app.filtered.get(index).copied().map(Action::OpenItem)
                }
                ExploreEvent::SelectCategory(category) => Some(Action::SelectCategory(category)),
                ExploreEvent::NextCategory => Some(Action::NextCategory),
                ExploreEvent::PrevCategory => Some(Action::PrevCategory),
                ExploreEvent::OpenSearch => Some(Action::OpenSearch),
            }
        }
        View::Search => match tui.search.handle_event(event)? {
            SearchEvent::Back => Some(Action::Back),
        },
        View::Detail => match tui.detail.handle_event(event)? {
            DetailEvent::Back => Some(Action::CloseDetail),
            DetailEvent::OpenTweak => Some(Action::OpenTweak),
        },
        View::Tweak => match tui.tweak.handle_event(event)? {
            TweakEvent::Close => Some(Action::CloseTweak),
            TweakEvent::GenerateExport => Some(Action::GenerateExport),
        },
        View::List => match tui.list_form.handle_event(event)? {
            ListFormEvent::Close => Some(Action::CloseList),
            ListFormEvent::Publish => Some(Action::PublishListing),
        },
        View::Library => match tui.library.handle_event(event)? {
            LibraryEvent::ListNew => Some(Action::ListNew),
            LibraryEvent::Back => Some(Action::Back),
        },
        View::Profile => match tui.profile.handle_event(event)? {
            ProfileEvent::Back => Some(Action::Back),
        },
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Text fields draw a real cursor
            SetCursorStyle::SteadyBlock, // Steady under continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled \
             (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Apply one terminal event: route it, run the reducer, resync screens.
///
/// A key or click that maps to no action still dismisses a pending notice.
pub fn handle_terminal_event(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    now: Instant,
) -> Effect {
    let action = route_event(app, tui, event).or_else(|| {
        let is_input = !matches!(event, TuiEvent::Resize);
        (is_input && app.notice.is_some()).then_some(Action::DismissNotice)
    });
    let Some(action) = action else {
        return Effect::None;
    };
    let effect = update(app, action);
    // Screens reset on entry, so later events in this batch must see the new one
    tui.sync(app, now);
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app, &config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Aborted on drop, so leaving the loop cancels a pending timer
    let _loading_timer = LoadingTimer::start(app.loading_delay, tx);

    let result = event_loop(&mut terminal, &mut app, &mut tui, &rx);
    if let Err(e) = &result {
        warn!("Event loop failed: {}", e);
    }

    info!("Shutting down");
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        tui.sync(app, now);

        let animating = tui.is_animating(app);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, app, tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATING_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_terminal_event(app, tui, &event, Instant::now()) == Effect::Quit {
                return Ok(());
            }
        }

        // Handle background task actions (loading timer)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(app, action) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogue::CATALOGUE;
    use crate::test_support::loaded_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// One loop iteration's worth of event handling.
    fn press(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
        handle_terminal_event(app, tui, &event, Instant::now())
    }

    fn setup() -> (App, TuiState) {
        let app = loaded_app();
        let tui = TuiState::without_animations();
        (app, tui)
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let (mut app, mut tui) = setup();
        update(&mut app, Action::OpenSearch);
        assert_eq!(press(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_enter_on_grid_opens_selected_item() {
        let (mut app, mut tui) = setup();
        press(&mut app, &mut tui, TuiEvent::CursorRight);
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.view, View::Detail);
        assert!(std::ptr::eq(app.selected_item.unwrap(), &CATALOGUE[1]));
    }

    #[test]
    fn test_enter_ignored_while_loading() {
        let mut app = App::new();
        let mut tui = TuiState::without_animations();
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Submit), None);
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.view, View::Explore);
    }

    #[test]
    fn test_detail_tweak_export_flow() {
        let (mut app, mut tui) = setup();
        press(&mut app, &mut tui, TuiEvent::Submit);
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.view, View::Tweak);
        press(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(app.view, View::Detail);
        press(&mut app, &mut tui, TuiEvent::InputChar('t'));
        press(&mut app, &mut tui, TuiEvent::InputChar('g'));
        assert_eq!(app.view, View::Explore);
        assert_eq!(app.notice.as_deref(), Some("Generating Export..."));
    }

    #[test]
    fn test_digits_switch_tabs() {
        let (mut app, mut tui) = setup();
        press(&mut app, &mut tui, TuiEvent::InputChar('4'));
        assert_eq!(app.view, View::Library);
        assert_eq!(app.active_tab, Tab::Library);
        press(&mut app, &mut tui, TuiEvent::InputChar('3'));
        assert_eq!(app.view, View::List);
        assert_eq!(app.active_tab, Tab::Create);
    }

    #[test]
    fn test_digits_type_into_search_field() {
        let (mut app, mut tui) = setup();
        press(&mut app, &mut tui, TuiEvent::InputChar('2'));
        assert_eq!(app.view, View::Search);
        press(&mut app, &mut tui, TuiEvent::InputChar('3'));
        assert_eq!(app.view, View::Search);
        assert_eq!(tui.search.query.buffer, "3");
    }

    #[test]
    fn test_search_query_cleared_on_reentry() {
        let (mut app, mut tui) = setup();
        press(&mut app, &mut tui, TuiEvent::InputChar('/'));
        press(&mut app, &mut tui, TuiEvent::InputChar('x'));
        press(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(app.view, View::Explore);
        press(&mut app, &mut tui, TuiEvent::InputChar('/'));
        assert_eq!(tui.search.query.buffer, "");
    }

    #[test]
    fn test_list_form_publish_flow() {
        let (mut app, mut tui) = setup();
        press(&mut app, &mut tui, TuiEvent::InputChar('4'));
        press(&mut app, &mut tui, TuiEvent::InputChar('n'));
        assert_eq!(app.view, View::List);
        press(&mut app, &mut tui, TuiEvent::FocusPrev);
        // Publish button focused: digits switch tabs again
        assert!(!tui.captures_text(&app));
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.view, View::Explore);
        assert_eq!(app.notice.as_deref(), Some("Published!"));
    }

    #[test]
    fn test_list_form_reset_on_reentry() {
        let (mut app, mut tui) = setup();
        press(&mut app, &mut tui, TuiEvent::InputChar('3'));
        press(&mut app, &mut tui, TuiEvent::Backspace);
        assert_ne!(tui.list_form.title.buffer, "My Custom Board");
        press(&mut app, &mut tui, TuiEvent::Escape);
        press(&mut app, &mut tui, TuiEvent::InputChar('3'));
        assert_eq!(tui.list_form.title.buffer, "My Custom Board");
    }

    #[test]
    fn test_category_change_resets_grid_cursor() {
        let (mut app, mut tui) = setup();
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        assert_eq!(tui.explore.selected, 2);
        press(&mut app, &mut tui, TuiEvent::FocusNext);
        assert_eq!(app.active_category, "Power");
        assert_eq!(tui.explore.selected, 0);
    }

    #[test]
    fn test_tile_click_after_category_change_needs_redraw() {
        let (mut app, mut tui) = setup();
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|f| ui::draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();
        let chip = tui.explore.chip_area("Audio").unwrap();
        let tile = tui.explore.tile_area(0).unwrap();

        // Both clicks land in one event batch, before the next frame
        press(&mut app, &mut tui, TuiEvent::MouseClick(chip.x + 1, chip.y));
        assert_eq!(app.active_category, "Audio");
        press(&mut app, &mut tui, TuiEvent::MouseClick(tile.x + 1, tile.y + 1));
        assert_eq!(app.view, View::Explore);
        assert!(app.selected_item.is_none());

        // After a redraw the same spot is the Audio tile
        terminal
            .draw(|f| ui::draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();
        press(&mut app, &mut tui, TuiEvent::MouseClick(tile.x + 1, tile.y + 1));
        assert_eq!(app.selected_item.map(|i| i.title), Some("Audio Amp D"));
    }

    #[test]
    fn test_any_key_dismisses_notice() {
        let (mut app, mut tui) = setup();
        update(&mut app, Action::ListNew);
        update(&mut app, Action::PublishListing);
        tui.sync(&app, Instant::now());

        press(&mut app, &mut tui, TuiEvent::Resize);
        assert_eq!(app.notice.as_deref(), Some("Published!"));

        press(&mut app, &mut tui, TuiEvent::CursorRight);
        assert!(app.notice.is_none());
        // The key still does its normal job
        assert_eq!(tui.explore.selected, 1);
    }

    #[test]
    fn test_escape_from_explore_quits() {
        let (mut app, mut tui) = setup();
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Escape), Effect::Quit);
    }

    #[test]
    fn test_nav_click_selects_tab() {
        let (app, mut tui) = setup();
        tui.nav_areas = vec![(Tab::Profile, Rect::new(10, 20, 8, 1))];
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::MouseClick(12, 20)),
            Some(Action::SelectTab(Tab::Profile))
        );
    }

    #[test]
    fn test_transition_started_and_finished() {
        let mut app = loaded_app();
        let config = ResolvedConfig::default();
        let mut tui = TuiState::new(&app, &config);
        let start = Instant::now();

        update(&mut app, Action::OpenItem(&CATALOGUE[0]));
        tui.sync(&app, start);
        let transition = tui.transition.expect("transition started");
        assert_eq!(transition.kind, TransitionKind::SlideFromRight);
        assert!(tui.is_animating(&app));

        tui.sync(&app, start + config.transition + Duration::from_millis(1));
        assert!(tui.transition.is_none());
        assert!(!tui.is_animating(&app));
    }

    #[test]
    fn test_closing_sheet_has_no_transition() {
        let mut app = loaded_app();
        let mut tui = TuiState::new(&app, &ResolvedConfig::default());
        let start = Instant::now();
        update(&mut app, Action::OpenItem(&CATALOGUE[0]));
        update(&mut app, Action::OpenTweak);
        tui.sync(&app, start);
        assert_eq!(tui.transition.map(|t| t.kind), Some(TransitionKind::SlideFromBottom));
        update(&mut app, Action::CloseTweak);
        tui.sync(&app, start);
        assert!(tui.transition.is_none());
    }
}
