//! Settings screen
//!
//! Two independent forms: user details (username/email/password/confirm)
//! and a free-text feedback box. Successful submission shows a transient
//! acknowledgement; nothing is persisted and no navigation happens.

use crate::constants::{
    ACK_DETAILS_UPDATED, ACK_FEEDBACK_SUBMITTED, APP_NAME, ERROR_EMPTY_FEEDBACK,
    ERROR_INVALID_EMAIL, ERROR_PASSWORD_MISMATCH, ERROR_SETTINGS_PASSWORD,
    ERROR_SETTINGS_USERNAME, TITLE_EDIT_DETAILS, TITLE_FEEDBACK,
};
use crate::ui::components::text_field::{error_line, TextField};
use crate::ui::core::{Action, Component};
use crate::validation;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    Username,
    Email,
    Password,
    ConfirmPassword,
    Feedback,
}

impl SettingsField {
    fn next(self) -> Self {
        match self {
            SettingsField::Username => SettingsField::Email,
            SettingsField::Email => SettingsField::Password,
            SettingsField::Password => SettingsField::ConfirmPassword,
            SettingsField::ConfirmPassword => SettingsField::Feedback,
            SettingsField::Feedback => SettingsField::Username,
        }
    }

    fn previous(self) -> Self {
        match self {
            SettingsField::Username => SettingsField::Feedback,
            SettingsField::Email => SettingsField::Username,
            SettingsField::Password => SettingsField::Email,
            SettingsField::ConfirmPassword => SettingsField::Password,
            SettingsField::Feedback => SettingsField::ConfirmPassword,
        }
    }
}

pub struct SettingsScreen {
    pub username: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub feedback: TextField,
    pub focus: SettingsField,
    ack: Option<&'static str>,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self {
            username: TextField::new("Username"),
            email: TextField::new("Email"),
            password: TextField::masked("Password"),
            confirm_password: TextField::masked("Confirm Password"),
            feedback: TextField::new("Feedback"),
            focus: SettingsField::default(),
            ack: None,
        }
    }

    pub fn acknowledgement(&self) -> Option<&'static str> {
        self.ack
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            SettingsField::Username => &mut self.username,
            SettingsField::Email => &mut self.email,
            SettingsField::Password => &mut self.password,
            SettingsField::ConfirmPassword => &mut self.confirm_password,
            SettingsField::Feedback => &mut self.feedback,
        }
    }

    /// Validate and "save" the user details. All errors are cleared up
    /// front and re-set independently, matching the field-scoped error
    /// contract; success shows the transient acknowledgement.
    pub fn submit_details(&mut self) -> Action {
        self.username.error = None;
        self.email.error = None;
        self.password.error = None;
        self.confirm_password.error = None;

        let username_ok = validation::is_valid_username(&self.username.value);
        let email_ok = validation::is_valid_email(&self.email.value);
        let password_ok = validation::is_valid_password(&self.password.value);
        let confirm_ok = self.password.value == self.confirm_password.value;

        self.username.error = (!username_ok).then_some(ERROR_SETTINGS_USERNAME);
        self.email.error = (!email_ok).then_some(ERROR_INVALID_EMAIL);
        self.password.error = (!password_ok).then_some(ERROR_SETTINGS_PASSWORD);
        self.confirm_password.error = (!confirm_ok).then_some(ERROR_PASSWORD_MISMATCH);

        if username_ok && email_ok && password_ok && confirm_ok {
            log::info!("settings details accepted");
            self.ack = Some(ACK_DETAILS_UPDATED);
        }
        Action::None
    }

    /// Submit the feedback form: non-empty after trimming, cleared on
    /// success.
    pub fn submit_feedback(&mut self) -> Action {
        if self.feedback.value.trim().is_empty() {
            self.feedback.error = Some(ERROR_EMPTY_FEEDBACK);
        } else {
            self.feedback.error = None;
            self.feedback.value.clear();
            self.ack = Some(ACK_FEEDBACK_SUBMITTED);
        }
        Action::None
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SettingsScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // The acknowledgement is transient: any further input dismisses it
        if !matches!(key.code, KeyCode::Enter) {
            self.ack = None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Enter => {
                self.ack = None;
                if self.focus == SettingsField::Feedback {
                    self.submit_feedback()
                } else {
                    self.submit_details()
                }
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.focus {
                    SettingsField::Password => self.password.toggle_visibility(),
                    SettingsField::ConfirmPassword => self.confirm_password.toggle_visibility(),
                    _ => {}
                }
                Action::None
            }
            _ => {
                self.focused_field().handle_key(key);
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(2),  // app name
            Constraint::Length(1),  // section title
            Constraint::Length(3),  // username
            Constraint::Length(1),  // username error
            Constraint::Length(3),  // email
            Constraint::Length(1),  // email error
            Constraint::Length(3),  // password
            Constraint::Length(1),  // password error
            Constraint::Length(3),  // confirm password
            Constraint::Length(1),  // confirm error
            Constraint::Length(1),  // feedback section title
            Constraint::Length(3),  // feedback
            Constraint::Length(1),  // feedback error
            Constraint::Length(1),  // acknowledgement
            Constraint::Min(0),
        ])
        .split(rect);

        let brand = Paragraph::new(APP_NAME).alignment(Alignment::Center).style(
            Style::default()
                .fg(Color::Rgb(255, 127, 0))
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(brand, chunks[0]);

        let section = Paragraph::new(TITLE_EDIT_DETAILS)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(section, chunks[1]);

        self.username
            .render(f, chunks[2], self.focus == SettingsField::Username);
        if let Some(error) = self.username.error {
            f.render_widget(error_line(error), chunks[3]);
        }

        self.email.render(f, chunks[4], self.focus == SettingsField::Email);
        if let Some(error) = self.email.error {
            f.render_widget(error_line(error), chunks[5]);
        }

        self.password
            .render(f, chunks[6], self.focus == SettingsField::Password);
        if let Some(error) = self.password.error {
            f.render_widget(error_line(error), chunks[7]);
        }

        self.confirm_password
            .render(f, chunks[8], self.focus == SettingsField::ConfirmPassword);
        if let Some(error) = self.confirm_password.error {
            f.render_widget(error_line(error), chunks[9]);
        }

        let feedback_section = Paragraph::new(TITLE_FEEDBACK)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(feedback_section, chunks[10]);

        self.feedback
            .render(f, chunks[11], self.focus == SettingsField::Feedback);
        if let Some(error) = self.feedback.error {
            f.render_widget(error_line(error), chunks[12]);
        }

        if let Some(ack) = self.ack {
            let ack_line = Paragraph::new(ack)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
            f.render_widget(ack_line, chunks[13]);
        }
    }
}
