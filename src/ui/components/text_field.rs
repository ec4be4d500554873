//! Single-line text input
//!
//! Shared by every form screen. A field owns its buffer, its inline
//! validation error and, for password-style fields, the visibility flag.
//! Editing a field clears that field's error and nothing else.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct TextField {
    label: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
    masked: bool,
    pub revealed: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            error: None,
            masked: false,
            revealed: false,
        }
    }

    /// A password-style field, hidden until revealed
    pub fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Flip the show/hide toggle; independent of validation state.
    pub fn toggle_visibility(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Feed a key into the buffer. Returns true if the field consumed it.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.value.push(c);
                self.error = None;
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                self.error = None;
                true
            }
            _ => false,
        }
    }

    fn display_value(&self) -> String {
        if self.masked && !self.revealed {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, focused: bool) {
        let cursor = if focused { "█" } else { "" };
        let display = format!("{}{}", self.display_value(), cursor);

        let border_color = if focused { Color::Yellow } else { Color::Gray };
        let mut title = format!(" {} ", self.label);
        if self.masked {
            let hint = if self.revealed { "shown" } else { "hidden" };
            title = format!(" {} ({}) ", self.label, hint);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::White))
            .style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(display)
            .block(block)
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, rect);
    }
}

/// Inline validation error, rendered below the offending field
pub fn error_line(message: &str) -> Paragraph<'_> {
    Paragraph::new(message).style(Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC))
}
