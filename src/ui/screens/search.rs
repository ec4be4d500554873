//! Store search screen
//!
//! Live substring filtering over the catalog by store name. The welcome
//! placeholder is shown until the first non-empty result set has been
//! rendered; after that it never comes back, even if the query is
//! cleared. Expansion state is per record and per field type, and lives
//! only as long as this screen instance.

use crate::constants::{
    COMMENT_PREVIEW_COUNT, DESCRIPTION_PREVIEW_CHARS, SEARCH_PLACEHOLDER, WELCOME_TEXT,
};
use crate::stores::{filter_by_name, StoreCatalog, StoreRecord};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::collections::HashMap;

/// Per-record display flags, created lazily on first toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionState {
    pub description: bool,
    pub comments: bool,
}

pub struct SearchScreen {
    records: Vec<StoreRecord>,
    query: String,
    results: Vec<StoreRecord>,
    selected: usize,
    list_state: ListState,
    expanded: HashMap<i64, ExpansionState>,
    welcome_visible: bool,
}

impl SearchScreen {
    pub fn new(catalog: &StoreCatalog) -> Self {
        Self {
            records: catalog.records().to_vec(),
            query: String::new(),
            results: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            expanded: HashMap::new(),
            welcome_visible: true,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[StoreRecord] {
        &self.results
    }

    pub fn welcome_visible(&self) -> bool {
        self.welcome_visible
    }

    /// Replace the query and re-derive the result set.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = filter_by_name(&self.query, &self.records);

        // One-directional: the placeholder never comes back
        if !self.results.is_empty() {
            self.welcome_visible = false;
        }

        if self.selected >= self.results.len() {
            self.selected = self.results.len().saturating_sub(1);
        }
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.results.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn selected_record(&self) -> Option<&StoreRecord> {
        self.results.get(self.selected)
    }

    pub fn expansion(&self, id: i64) -> ExpansionState {
        self.expanded.get(&id).copied().unwrap_or_default()
    }

    pub fn toggle_description(&mut self, id: i64) {
        let state = self.expanded.entry(id).or_default();
        state.description = !state.description;
    }

    pub fn toggle_comments(&mut self, id: i64) {
        let state = self.expanded.entry(id).or_default();
        state.comments = !state.comments;
    }

    /// Description text as displayed: the full text when expanded, the
    /// first 50 characters plus an ellipsis otherwise.
    pub fn display_description(&self, record: &StoreRecord) -> String {
        if self.expansion(record.id).description {
            record.description.clone()
        } else {
            let preview: String = record
                .description
                .chars()
                .take(DESCRIPTION_PREVIEW_CHARS)
                .collect();
            format!("{}...", preview)
        }
    }

    /// Comments as displayed: all of them when expanded, the first two
    /// otherwise.
    pub fn visible_comments<'a>(&self, record: &'a StoreRecord) -> &'a [String] {
        if self.expansion(record.id).comments {
            &record.comments
        } else {
            let count = record.comments.len().min(COMMENT_PREVIEW_COUNT);
            &record.comments[..count]
        }
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.update_list_state();
    }

    fn select_next(&mut self) {
        if !self.results.is_empty() && self.selected < self.results.len() - 1 {
            self.selected += 1;
        }
        self.update_list_state();
    }

    /// Card accent color, stable per store id
    fn card_color(id: i64) -> Color {
        const CARD_COLORS: [Color; 6] = [
            Color::Rgb(0xb2, 0x22, 0x22),
            Color::Rgb(0x41, 0x69, 0xe1),
            Color::Rgb(0x00, 0x64, 0x00),
            Color::Rgb(0x8b, 0x45, 0x13),
            Color::Rgb(0xa5, 0x2a, 0x2a),
            Color::Rgb(0x4b, 0x00, 0x82),
        ];
        CARD_COLORS[((id - 1).rem_euclid(CARD_COLORS.len() as i64)) as usize]
    }

    fn card_item(&self, record: &StoreRecord) -> ListItem<'static> {
        let expansion = self.expansion(record.id);
        let accent = Self::card_color(record.id);

        let mut lines = vec![Line::from(Span::styled(
            record.name.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))];

        lines.push(Line::from(Span::styled(
            self.display_description(record),
            Style::default().fg(Color::White),
        )));

        let description_hint = if expansion.description { "Show Less" } else { "Show More" };
        lines.push(Line::from(Span::styled(
            format!("[Ctrl+D] {}", description_hint),
            Style::default().fg(Color::Cyan),
        )));

        lines.push(Line::from(Span::styled(
            format!("[Ctrl+O] Visit {}", record.link),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )));

        for comment in self.visible_comments(record) {
            lines.push(Line::from(Span::styled(
                format!("  • {}", comment),
                Style::default().fg(Color::Gray),
            )));
        }

        if record.comments.len() > COMMENT_PREVIEW_COUNT {
            let comments_hint = if expansion.comments {
                "Hide Comments"
            } else {
                "View All Comments"
            };
            lines.push(Line::from(Span::styled(
                format!("[Ctrl+L] {}", comments_hint),
                Style::default().fg(Color::Cyan),
            )));
        }

        lines.push(Line::from(""));
        ListItem::new(lines)
    }
}

impl Component for SearchScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('d') => {
                    if let Some(id) = self.selected_record().map(|r| r.id) {
                        self.toggle_description(id);
                    }
                    Action::None
                }
                KeyCode::Char('l') => {
                    if let Some(id) = self.selected_record().map(|r| r.id) {
                        self.toggle_comments(id);
                    }
                    Action::None
                }
                KeyCode::Char('o') => match self.selected_record() {
                    Some(record) => Action::OpenUrl(record.link.clone()),
                    None => Action::None,
                },
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut query = self.query.clone();
                query.push(c);
                self.set_query(query);
                Action::None
            }
            KeyCode::Backspace => {
                let mut query = self.query.clone();
                query.pop();
                self.set_query(query);
                Action::None
            }
            KeyCode::Up => {
                self.select_previous();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(rect);

        if self.results.is_empty() {
            if self.welcome_visible {
                let area = LayoutManager::centered_rect_lines(80, 1, chunks[0]);
                let welcome = Paragraph::new(WELCOME_TEXT)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Rgb(0x33, 0x33, 0x33)).bg(Color::White));
                f.render_widget(welcome, area);
            }
        } else {
            let items: Vec<ListItem> = self.results.iter().map(|r| self.card_item(r)).collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::NONE))
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            f.render_stateful_widget(list, chunks[0], &mut self.list_state);
        }

        let input_display = if self.query.is_empty() {
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(format!("{}█", self.query), Style::default().fg(Color::White))
        };
        let input = Paragraph::new(Line::from(input_display)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Search "),
        );
        f.render_widget(input, chunks[1]);
    }
}
