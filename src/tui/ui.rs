use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::App;
use crate::core::view::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    BottomNav, DetailScreen, ExploreScreen, LibraryScreen, ListForm, ProfileScreen, SearchScreen,
    TitleBar, TweakSheet,
};
use crate::tui::theme;

/// Share of the main area covered by the tweak sheet, in percent.
const SHEET_HEIGHT_PERCENT: u16 = 75;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min, Percentage};
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BG).fg(theme::TEXT)),
        frame.area(),
    );

    // Detail and Tweak carry their own CTA bar in place of the tab bar
    let nav_height = if app.view.requires_item() { 0 } else { 1 };
    let [title_area, main_area, nav_area] =
        Layout::vertical([Length(1), Min(0), Length(nav_height)]).areas(frame.area());

    let progress = tui.transition.map(|t| t.progress(now)).unwrap_or(1.0);

    let screen_area = match app.view {
        View::Tweak => {
            let [_, sheet] =
                Layout::vertical([Min(0), Percentage(SHEET_HEIGHT_PERCENT)]).areas(main_area);
            draw_detail(frame, app, tui, main_area);
            sheet
        }
        _ => main_area,
    };
    let screen_area = match tui.transition {
        Some(transition) => transition.apply(screen_area, progress),
        None => screen_area,
    };

    match app.view {
        View::Explore => ExploreScreen::new(
            &mut tui.explore,
            &app.filtered,
            app.active_category,
            app.is_loading,
            tui.pulse_value,
        )
        .render(frame, screen_area),
        View::Search => SearchScreen::new(&mut tui.search).render(frame, screen_area),
        View::Detail => draw_detail(frame, app, tui, screen_area),
        View::Tweak => {
            if let Some(item) = app.selected_item {
                TweakSheet::new(&mut tui.tweak, item).render(frame, screen_area);
            }
        }
        View::List => ListForm::new(&mut tui.list_form).render(frame, screen_area),
        View::Library => LibraryScreen::new(&mut tui.library).render(frame, screen_area),
        View::Profile => ProfileScreen::new(&mut tui.profile).render(frame, screen_area),
    }

    if let Some(transition) = tui.transition
        && transition.dimmed(progress)
    {
        frame
            .buffer_mut()
            .set_style(screen_area, Style::default().add_modifier(Modifier::DIM));
    }

    TitleBar::new(app.view.label(), app.notice.clone(), app.is_loading).render(frame, title_area);
    if nav_height > 0 {
        BottomNav::new(app.active_tab, &mut tui.nav_areas).render(frame, nav_area);
    } else {
        tui.nav_areas.clear();
    }
}

fn draw_detail(frame: &mut Frame, app: &App, tui: &mut TuiState, area: Rect) {
    match app.selected_item {
        Some(item) => DetailScreen::new(&mut tui.detail, item).render(frame, area),
        None => frame.render_widget(
            Paragraph::new("No template selected.")
                .style(theme::subtle())
                .alignment(Alignment::Center),
            area,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, NOTICE_PUBLISHED, update};
    use crate::core::catalogue::CATALOGUE;
    use crate::core::view::Tab;
    use crate::test_support::{buffer_text, loaded_app, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, Instant::now()))
            .unwrap();
        buffer_text(terminal.backend())
    }

    #[test]
    fn test_explore_shows_grid_and_nav() {
        let app = loaded_app();
        let mut tui = TuiState::without_animations();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Tracebay | Explore"));
        assert!(text.contains("USB-C PD Sink"));
        assert!(text.contains("Audio Amp D"));
        assert!(text.contains("5 Profile"));
        assert_eq!(tui.nav_areas.len(), Tab::ALL.len());
    }

    #[test]
    fn test_loading_shows_skeletons_not_items() {
        let app = test_app();
        let mut tui = TuiState::without_animations();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("USB-C PD Sink"));
    }

    #[test]
    fn test_tweak_draws_sheet_over_detail() {
        let mut app = loaded_app();
        update(&mut app, Action::OpenItem(&CATALOGUE[0]));
        update(&mut app, Action::OpenTweak);
        let mut tui = TuiState::without_animations();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Tweak Template"));
        assert!(text.contains("LIVE: $9.00"));
        // Detail header peeks out above the sheet
        assert!(text.contains("Back"));
        assert!(tui.nav_areas.is_empty());
    }

    #[test]
    fn test_notice_in_title_bar() {
        let mut app = loaded_app();
        update(&mut app, Action::ListNew);
        update(&mut app, Action::PublishListing);
        let mut tui = TuiState::without_animations();
        let text = draw(&app, &mut tui);
        assert!(text.contains(NOTICE_PUBLISHED));
    }

    #[test]
    fn test_every_tab_renders() {
        for tab in Tab::ALL {
            let mut app = loaded_app();
            update(&mut app, Action::SelectTab(tab));
            let mut tui = TuiState::without_animations();
            let text = draw(&app, &mut tui);
            assert!(text.contains(app.view.label()), "{tab:?}");
        }
    }
}
