use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;
use yalla::config::Config;
use yalla::stores::StoreCatalog;
use yalla::ui::app::AppComponent;
use yalla::ui::core::{Action, DelayedAction, EventType};
use yalla::ui::router::{DrawerRoute, Route};

fn new_app() -> AppComponent {
    AppComponent::new(Config::default(), StoreCatalog::seed())
}

fn key(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn ctrl(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn code(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(c));
    }
}

/// Drive a fresh app past the splash screen
async fn app_at_login() -> AppComponent {
    let mut app = new_app();
    tokio::time::sleep(Duration::from_secs(4)).await;
    for action in app.process_background_actions() {
        app.apply_action(action);
    }
    assert_eq!(app.current_route(), Route::Login);
    app
}

#[tokio::test(start_paused = true)]
async fn test_splash_auto_advances_to_login() {
    let mut app = new_app();
    assert_eq!(app.current_route(), Route::Splash);

    // Before the delay elapses nothing is pending
    assert!(app.process_background_actions().is_empty());

    tokio::time::sleep(Duration::from_secs(4)).await;
    let actions = app.process_background_actions();
    assert_eq!(actions, vec![Action::Replace(Route::Login)]);

    for action in actions {
        app.apply_action(action);
    }
    assert_eq!(app.current_route(), Route::Login);
}

#[tokio::test(start_paused = true)]
async fn test_splash_timer_cancelled_on_teardown() {
    let mut app = new_app();

    // Navigating away drops the splash screen and with it the timer
    app.apply_action(Action::Replace(Route::Login));
    assert_eq!(app.current_route(), Route::Login);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(app.process_background_actions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_delayed_action_abort_on_drop() {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let timer = DelayedAction::schedule(Duration::from_secs(3), Action::Quit, tx.clone());
    drop(timer);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());

    // An undropped timer still fires
    let _timer = DelayedAction::schedule(Duration::from_secs(3), Action::Quit, tx);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(matches!(rx.try_recv(), Ok(Action::Quit)));
}

#[tokio::test(start_paused = true)]
async fn test_login_flow_reaches_drawer() {
    let mut app = app_at_login().await;

    type_text(&mut app, "user@example.com");
    app.handle_event(code(KeyCode::Tab));
    type_text(&mut app, "Abcdef1!");
    app.handle_event(code(KeyCode::Enter));

    assert_eq!(app.current_route(), Route::Drawer);
    assert_eq!(app.drawer_route(), DrawerRoute::Search);
}

#[tokio::test(start_paused = true)]
async fn test_failed_login_stays_put() {
    let mut app = app_at_login().await;

    type_text(&mut app, "bad");
    app.handle_event(code(KeyCode::Enter));
    assert_eq!(app.current_route(), Route::Login);
}

#[tokio::test(start_paused = true)]
async fn test_signup_round_trip() {
    let mut app = app_at_login().await;

    app.handle_event(ctrl('n'));
    assert_eq!(app.current_route(), Route::CreateAccount);

    // Esc pops back to a fresh login screen
    app.handle_event(code(KeyCode::Esc));
    assert_eq!(app.current_route(), Route::Login);
}

#[tokio::test(start_paused = true)]
async fn test_drawer_toggle_and_selection() {
    let mut app = app_at_login().await;
    type_text(&mut app, "user@example.com");
    app.handle_event(code(KeyCode::Tab));
    type_text(&mut app, "Abcdef1!");
    app.handle_event(code(KeyCode::Enter));
    assert_eq!(app.current_route(), Route::Drawer);
    assert!(!app.is_drawer_open());

    app.handle_event(ctrl('b'));
    assert!(app.is_drawer_open());

    app.handle_event(code(KeyCode::Down));
    app.handle_event(code(KeyCode::Enter));
    assert!(!app.is_drawer_open());
    assert_eq!(app.drawer_route(), DrawerRoute::Settings);

    // Selection switches screens without touching the stack
    assert_eq!(app.current_route(), Route::Drawer);
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_c_quits_from_anywhere() {
    let mut app = new_app();
    assert!(!app.should_quit());
    app.handle_event(ctrl('c'));
    assert!(app.should_quit());
}
