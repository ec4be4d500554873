//! Application component
//!
//! Composes the router with the active screen, routes key events, applies
//! actions and owns the background action channel the splash timer feeds.

use crate::config::Config;
use crate::stores::StoreCatalog;
use crate::ui::core::{Action, Component, EventType};
use crate::ui::layout::LayoutManager;
use crate::ui::router::{DrawerRoute, Route, Router};
use crate::ui::screens::{LoginScreen, SearchScreen, SettingsScreen, SignUpScreen, SplashScreen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Both drawer screens stay mounted while the drawer route is active;
/// they are torn down together when navigation leaves the route.
pub struct DrawerScreens {
    pub search: SearchScreen,
    pub settings: SettingsScreen,
}

enum ActiveScreen {
    Splash(SplashScreen),
    Login(LoginScreen),
    CreateAccount(SignUpScreen),
    Drawer(Box<DrawerScreens>),
}

pub struct AppComponent {
    config: Config,
    catalog: StoreCatalog,
    router: Router,
    screen: ActiveScreen,
    drawer_open: bool,
    drawer_cursor: DrawerRoute,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config, catalog: StoreCatalog) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let router = Router::new();
        let screen = ActiveScreen::Splash(SplashScreen::new(
            Duration::from_secs(config.splash.delay_secs),
            action_tx.clone(),
        ));

        Self {
            config,
            catalog,
            router,
            screen,
            drawer_open: false,
            drawer_cursor: DrawerRoute::default(),
            action_tx,
            action_rx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_route(&self) -> Route {
        self.router.current()
    }

    pub fn drawer_route(&self) -> DrawerRoute {
        self.router.drawer_route()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Screens are rebuilt from scratch whenever navigation enters a
    /// route, so per-screen state is discarded on navigation away.
    fn build_screen(&self, route: Route) -> ActiveScreen {
        match route {
            Route::Splash => ActiveScreen::Splash(SplashScreen::new(
                Duration::from_secs(self.config.splash.delay_secs),
                self.action_tx.clone(),
            )),
            Route::Login => ActiveScreen::Login(LoginScreen::new()),
            Route::CreateAccount => ActiveScreen::CreateAccount(SignUpScreen::new()),
            Route::Drawer => ActiveScreen::Drawer(Box::new(DrawerScreens {
                search: SearchScreen::new(&self.catalog),
                settings: SettingsScreen::new(),
            })),
        }
    }

    fn rebuild_screen(&mut self) {
        self.screen = self.build_screen(self.router.current());
        self.drawer_open = false;
        self.drawer_cursor = self.router.drawer_route();
    }

    /// Keys for the drawer sidebar while it is open
    fn handle_drawer_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.drawer_cursor = DrawerRoute::Search;
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.drawer_cursor = DrawerRoute::Settings;
                Action::None
            }
            KeyCode::Enter => Action::SelectDrawer(self.drawer_cursor),
            KeyCode::Esc => Action::ToggleDrawer,
            _ => Action::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.router.current() == Route::Drawer {
            if key.code == KeyCode::Char('b') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Action::ToggleDrawer;
            }
            if self.drawer_open {
                return self.handle_drawer_key(key);
            }
        }

        let drawer_route = self.router.drawer_route();
        match &mut self.screen {
            ActiveScreen::Splash(screen) => screen.handle_key_events(key),
            ActiveScreen::Login(screen) => screen.handle_key_events(key),
            ActiveScreen::CreateAccount(screen) => screen.handle_key_events(key),
            ActiveScreen::Drawer(drawer) => match drawer_route {
                DrawerRoute::Search => drawer.search.handle_key_events(key),
                DrawerRoute::Settings => drawer.settings.handle_key_events(key),
            },
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Navigate(route) => {
                log::info!("navigate to {:?}", route);
                self.router.navigate(route);
                self.rebuild_screen();
            }
            Action::Replace(route) => {
                log::info!("replace current route with {:?}", route);
                self.router.replace(route);
                self.rebuild_screen();
            }
            Action::Back => {
                if self.router.pop() {
                    log::info!("back to {:?}", self.router.current());
                    self.rebuild_screen();
                } else {
                    log::warn!("back requested at the bottom of the stack, ignoring");
                }
            }
            Action::ToggleDrawer => {
                if self.router.current() == Route::Drawer {
                    self.drawer_open = !self.drawer_open;
                    self.drawer_cursor = self.router.drawer_route();
                }
            }
            Action::SelectDrawer(route) => {
                log::info!("drawer selection changed to {:?}", route);
                self.router.select_drawer(route);
                self.drawer_open = false;
            }
            Action::OpenUrl(url) => {
                // Outbound side effect; nothing observes the result
                if let Err(e) = open::that(&url) {
                    log::error!("failed to open {}: {}", url, e);
                } else {
                    log::info!("opened {}", url);
                }
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.handle_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.apply_action(action);
    }

    /// Drain actions produced off the input path (the splash timer)
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    fn render_drawer_sidebar(f: &mut Frame, rect: Rect, cursor: DrawerRoute, active: DrawerRoute) {
        let items: Vec<ListItem> = DrawerRoute::all()
            .iter()
            .map(|route| {
                let marker = if *route == active { "● " } else { "  " };
                ListItem::new(Line::from(Span::styled(
                    format!("{}{}", marker, route.label()),
                    Style::default().fg(Color::White),
                )))
            })
            .collect();

        let mut state = ListState::default();
        state.select(DrawerRoute::all().iter().position(|route| *route == cursor));

        let list = List::new(items)
            .block(Block::default().borders(Borders::RIGHT).title(" Menu "))
            .highlight_style(
                Style::default()
                    .fg(Color::Rgb(0x77, 0xcc, 0xcc))
                    .add_modifier(Modifier::BOLD),
            );
        f.render_stateful_widget(list, rect, &mut state);
    }

    fn render_drawer_route(&mut self, f: &mut Frame, rect: Rect) {
        let drawer_width = self.config.ui.drawer_width;
        let drawer_open = self.drawer_open;
        let cursor = self.drawer_cursor;
        let active = self.router.drawer_route();

        let main_area = if drawer_open {
            let panes = LayoutManager::drawer_layout(rect, drawer_width);
            Self::render_drawer_sidebar(f, panes[0], cursor, active);
            panes[1]
        } else {
            rect
        };

        let ActiveScreen::Drawer(drawer) = &mut self.screen else {
            return;
        };

        match active {
            DrawerRoute::Search => {
                // Only the search screen gets a header line
                let chunks =
                    Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(main_area);
                let header = Paragraph::new(Line::from(vec![
                    Span::styled(
                        Route::Drawer.title(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  •  Ctrl+B Menu", Style::default().fg(Color::DarkGray)),
                ]));
                f.render_widget(header, chunks[0]);
                drawer.search.render(f, chunks[1]);
            }
            DrawerRoute::Settings => drawer.settings.render(f, main_area),
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &mut self.screen {
            ActiveScreen::Splash(screen) => screen.render(f, rect),
            ActiveScreen::Login(screen) => screen.render(f, rect),
            ActiveScreen::CreateAccount(screen) => screen.render(f, rect),
            ActiveScreen::Drawer(_) => self.render_drawer_route(f, rect),
        }
    }
}
