use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use pamui::{
    core::state::{Focus, MenuPhase},
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
    presentation::layout::PageLayout,
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn runner_with(events: Vec<Event>) -> (AppRunner, Arc<Mutex<TestTui>>) {
    let test_tui = Arc::new(Mutex::new(TestTui::new(80, 40).unwrap()));
    let tui: Arc<Mutex<dyn TuiLike + Send>> = test_tui.clone();
    let runner = AppRunner::new_with_tui(Config::embedded().unwrap(), tui, events);
    (runner, test_tui)
}

#[tokio::test]
async fn test_quit_stops_the_loop() {
    let (mut runner, test_tui) = runner_with(vec![Event::Init, key(KeyCode::Char('q'))]);
    runner.run().await.unwrap();

    assert!(runner.runtime().state().system.should_quit);
    // Init asks for a first frame
    assert_eq!(test_tui.lock().await.draw_count(), 1);
}

#[tokio::test]
async fn test_initial_size_becomes_viewport() {
    let (mut runner, _) = runner_with(vec![]);
    runner.run().await.unwrap();
    assert_eq!(runner.runtime().state().ui.viewport.width, 80);
    assert_eq!(runner.runtime().state().ui.viewport.height, 40);
}

#[tokio::test]
async fn test_keys_step_carousel_and_move_focus() {
    let (mut runner, _) = runner_with(vec![
        key(KeyCode::Right),
        key(KeyCode::Right),
        key(KeyCode::Tab),
        key(KeyCode::Down),
        key(KeyCode::Enter),
    ]);
    runner.run().await.unwrap();

    let state = runner.runtime().state();
    assert_eq!(state.carousel.current_index(), 2);
    assert_eq!(state.ui.focus, Focus::Faq);
    assert_eq!(state.faq.expanded(), Some(1));
}

#[tokio::test]
async fn test_menu_navigation_closes_menu() {
    let (mut runner, _) = runner_with(vec![
        key(KeyCode::Char('m')),
        key(KeyCode::Down),
        key(KeyCode::Enter),
    ]);
    runner.run().await.unwrap();

    let state = runner.runtime().state();
    assert_eq!(state.ui.focus, Focus::Faq);
    assert_eq!(state.menu.phase(), MenuPhase::Closing);
}

#[tokio::test]
async fn test_resize_redraws_and_closes_wide_menu() {
    let (mut runner, test_tui) = runner_with(vec![
        key(KeyCode::Char('m')),
        Event::Resize(100, 30),
        key(KeyCode::Char('q')),
    ]);
    runner.run().await.unwrap();

    let state = runner.runtime().state();
    assert_eq!(state.ui.viewport.width, 100);
    assert_eq!(state.menu.phase(), MenuPhase::Closing);
    let tui = test_tui.lock().await;
    assert_eq!(tui.draw_count(), 1);
    assert_eq!(tui.size().unwrap().width, 100);
}

#[tokio::test]
async fn test_clicked_indicator_is_drawn_active() {
    let indicator = {
        let mut state =
            pamui::core::state::AppState::new_with_config(Config::embedded().unwrap());
        state.ui.viewport = ratatui::layout::Rect::new(0, 0, 80, 40);
        PageLayout::compute(state.ui.viewport, &state).indicators[2]
    };
    let click = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: indicator.x + 1,
        row: indicator.y,
        modifiers: KeyModifiers::NONE,
    });
    let (mut runner, test_tui) = runner_with(vec![click, Event::Render]);
    runner.run().await.unwrap();

    assert_eq!(runner.runtime().state().carousel.current_index(), 2);
    let tui = test_tui.lock().await;
    let row = &tui.screen_lines()[indicator.y as usize];
    assert!(row.contains("○  ○  ●"));
}
