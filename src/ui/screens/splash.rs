//! Splash screen
//!
//! Shows the brand text, then replaces itself with the login screen after
//! a fixed delay. The transition is a one-shot scheduled task owned by
//! this screen; dropping the screen cancels it, so tearing the splash
//! down early can never produce a stale navigation.

use crate::constants::SPLASH_BRAND;
use crate::ui::core::{Action, Component, DelayedAction};
use crate::ui::layout::LayoutManager;
use crate::ui::router::Route;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;
use tokio::sync::mpsc;

pub struct SplashScreen {
    timer: DelayedAction,
}

impl SplashScreen {
    pub fn new(delay: Duration, actions: mpsc::UnboundedSender<Action>) -> Self {
        let timer = DelayedAction::schedule(delay, Action::Replace(Route::Login), actions);
        Self { timer }
    }

    pub fn timer_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

impl Component for SplashScreen {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // The splash ignores input; only the timer advances it
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect_lines(60, 1, rect);
        let brand = Paragraph::new(SPLASH_BRAND)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Rgb(255, 165, 0))
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            );
        f.render_widget(brand, area);
    }
}
