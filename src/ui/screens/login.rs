//! Login screen

use crate::constants::{
    APP_NAME, ERROR_INVALID_EMAIL, ERROR_INVALID_LOGIN_PASSWORD, TITLE_SIGN_IN,
};
use crate::ui::components::text_field::{error_line, TextField};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::router::Route;
use crate::validation;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

pub struct LoginScreen {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            email: TextField::new("Email"),
            password: TextField::masked("Password"),
            focus: LoginField::default(),
        }
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    /// Re-run every predicate against the current field values. Each
    /// field's error is set independently; navigation happens only if
    /// everything passed in this same evaluation pass.
    pub fn submit(&mut self) -> Action {
        let email_ok = validation::is_valid_email(&self.email.value);
        let password_ok = validation::is_valid_password(&self.password.value);

        self.email.error = (!email_ok).then_some(ERROR_INVALID_EMAIL);
        self.password.error = (!password_ok).then_some(ERROR_INVALID_LOGIN_PASSWORD);

        if email_ok && password_ok {
            log::info!("login accepted, entering app shell");
            Action::Navigate(Route::Drawer)
        } else {
            Action::None
        }
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LoginScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.cycle_focus();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.cycle_focus();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.focus == LoginField::Password {
                    self.password.toggle_visibility();
                }
                Action::None
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::Navigate(Route::CreateAccount)
            }
            KeyCode::Esc => Action::Quit,
            _ => {
                self.focused_field().handle_key(key);
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect(60, 90, rect);

        let chunks = Layout::vertical([
            Constraint::Length(2), // app name
            Constraint::Length(2), // sign in title
            Constraint::Length(3), // email
            Constraint::Length(1), // email error
            Constraint::Length(3), // password
            Constraint::Length(1), // password error
            Constraint::Length(2), // login hint
            Constraint::Length(1), // separator
            Constraint::Length(1), // instagram row
            Constraint::Length(2), // create account footer
            Constraint::Min(0),
        ])
        .split(area);

        let brand = Paragraph::new(APP_NAME).alignment(Alignment::Center).style(
            Style::default()
                .fg(Color::Rgb(255, 127, 0))
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(brand, chunks[0]);

        let title = Paragraph::new(TITLE_SIGN_IN)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(title, chunks[1]);

        self.email.render(f, chunks[2], self.focus == LoginField::Email);
        if let Some(error) = self.email.error {
            f.render_widget(error_line(error), chunks[3]);
        }

        self.password
            .render(f, chunks[4], self.focus == LoginField::Password);
        if let Some(error) = self.password.error {
            f.render_widget(error_line(error), chunks[5]);
        }

        let login_hint = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" Login", Style::default().fg(Color::Gray)),
            Span::styled("  •  ", Style::default().fg(Color::Gray)),
            Span::styled("Ctrl+R", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" Show/hide password", Style::default().fg(Color::Gray)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(login_hint, chunks[6]);

        let separator = Paragraph::new("─".repeat(area.width.saturating_sub(4) as usize))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(separator, chunks[7]);

        // Decorative only; there is no handler behind it
        let instagram = Paragraph::new("Login with Instagram")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Magenta));
        f.render_widget(instagram, chunks[8]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Don't have an account? ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Create Account (Ctrl+N)",
                Style::default()
                    .fg(Color::Rgb(255, 127, 0))
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(footer, chunks[9]);
    }
}
