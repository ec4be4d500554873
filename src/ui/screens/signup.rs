//! Sign-up screen

use crate::constants::{
    APP_NAME, ERROR_INVALID_EMAIL, ERROR_INVALID_PASSWORD, ERROR_INVALID_USERNAME,
    ERROR_PASSWORD_MISMATCH, TITLE_CREATE_ACCOUNT,
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
pub enum SignUpField {
    #[default]
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl SignUpField {
    fn next(self) -> Self {
        match self {
            SignUpField::Username => SignUpField::Email,
            SignUpField::Email => SignUpField::Password,
            SignUpField::Password => SignUpField::ConfirmPassword,
            SignUpField::ConfirmPassword => SignUpField::Username,
        }
    }

    fn previous(self) -> Self {
        match self {
            SignUpField::Username => SignUpField::ConfirmPassword,
            SignUpField::Email => SignUpField::Username,
            SignUpField::Password => SignUpField::Email,
            SignUpField::ConfirmPassword => SignUpField::Password,
        }
    }
}

pub struct SignUpScreen {
    pub username: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub focus: SignUpField,
}

impl SignUpScreen {
    pub fn new() -> Self {
        Self {
            username: TextField::new("Username"),
            email: TextField::new("Email"),
            password: TextField::masked("Password"),
            confirm_password: TextField::masked("Confirm Password"),
            focus: SignUpField::default(),
        }
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            SignUpField::Username => &mut self.username,
            SignUpField::Email => &mut self.email,
            SignUpField::Password => &mut self.password,
            SignUpField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Re-run every predicate against the current field values, setting
    /// each field's error independently. Navigates back to login only if
    /// all checks passed in this same pass.
    pub fn submit(&mut self) -> Action {
        let username_ok = validation::is_valid_username(&self.username.value);
        let email_ok = validation::is_valid_email(&self.email.value);
        let password_ok = validation::is_valid_password(&self.password.value);
        let confirm_ok = self.password.value == self.confirm_password.value;

        self.username.error = (!username_ok).then_some(ERROR_INVALID_USERNAME);
        self.email.error = (!email_ok).then_some(ERROR_INVALID_EMAIL);
        self.password.error = (!password_ok).then_some(ERROR_INVALID_PASSWORD);
        self.confirm_password.error = (!confirm_ok).then_some(ERROR_PASSWORD_MISMATCH);

        if username_ok && email_ok && password_ok && confirm_ok {
            log::info!("sign-up accepted for '{}'", self.username.value);
            Action::Navigate(Route::Login)
        } else {
            Action::None
        }
    }
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SignUpScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.focus {
                    SignUpField::Password => self.password.toggle_visibility(),
                    SignUpField::ConfirmPassword => self.confirm_password.toggle_visibility(),
                    _ => {}
                }
                Action::None
            }
            KeyCode::Esc => Action::Back,
            _ => {
                self.focused_field().handle_key(key);
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect(60, 95, rect);

        let chunks = Layout::vertical([
            Constraint::Length(2), // app name
            Constraint::Length(2), // title
            Constraint::Length(3), // username
            Constraint::Length(1), // username error
            Constraint::Length(3), // email
            Constraint::Length(1), // email error
            Constraint::Length(3), // password
            Constraint::Length(1), // password error
            Constraint::Length(3), // confirm password
            Constraint::Length(1), // confirm error
            Constraint::Length(2), // submit hint
            Constraint::Min(0),
        ])
        .split(area);

        let brand = Paragraph::new(APP_NAME).alignment(Alignment::Center).style(
            Style::default()
                .fg(Color::Rgb(255, 127, 0))
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(brand, chunks[0]);

        let title = Paragraph::new(TITLE_CREATE_ACCOUNT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(title, chunks[1]);

        self.username
            .render(f, chunks[2], self.focus == SignUpField::Username);
        if let Some(error) = self.username.error {
            f.render_widget(error_line(error), chunks[3]);
        }

        self.email.render(f, chunks[4], self.focus == SignUpField::Email);
        if let Some(error) = self.email.error {
            f.render_widget(error_line(error), chunks[5]);
        }

        self.password
            .render(f, chunks[6], self.focus == SignUpField::Password);
        if let Some(error) = self.password.error {
            f.render_widget(error_line(error), chunks[7]);
        }

        self.confirm_password
            .render(f, chunks[8], self.focus == SignUpField::ConfirmPassword);
        if let Some(error) = self.confirm_password.error {
            f.render_widget(error_line(error), chunks[9]);
        }

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" Sign Up", Style::default().fg(Color::Gray)),
            Span::styled("  •  ", Style::default().fg(Color::Gray)),
            Span::styled("Esc", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(" Back to login", Style::default().fg(Color::Gray)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(hint, chunks[10]);
    }
}
