//! Route table and navigation stack
//!
//! Destinations are a closed enumeration, so every `navigate`/`replace`
//! target is checked at build time. The stack covers the splash/login/
//! sign-up flow; the two drawer screens are selected, not pushed.

use crate::constants::{DRAWER_LABEL_HOME, DRAWER_LABEL_SETTINGS};

/// Top-level navigable destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Splash,
    Login,
    CreateAccount,
    Drawer,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[Route::Splash, Route::Login, Route::CreateAccount, Route::Drawer]
    }

    /// Screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Route::Splash => "Yalla",
            Route::Login => "Sign In",
            Route::CreateAccount => "Create Account",
            Route::Drawer => "YallaApp",
        }
    }
}

/// Destinations inside the drawer, mutually reachable via selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerRoute {
    #[default]
    Search,
    Settings,
}

impl DrawerRoute {
    pub fn all() -> &'static [DrawerRoute] {
        &[DrawerRoute::Search, DrawerRoute::Settings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DrawerRoute::Search => DRAWER_LABEL_HOME,
            DrawerRoute::Settings => DRAWER_LABEL_SETTINGS,
        }
    }
}

/// Navigation state: a route stack plus the drawer selection.
///
/// The stack is never empty; the bottom entry is the initial route.
#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<Route>,
    drawer: DrawerRoute,
}

impl Router {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Splash],
            drawer: DrawerRoute::default(),
        }
    }

    pub fn current(&self) -> Route {
        // Invariant: the stack always holds at least the initial route
        *self.stack.last().unwrap_or(&Route::Splash)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a new destination onto the stack
    pub fn navigate(&mut self, route: Route) {
        if route == Route::Drawer {
            self.drawer = DrawerRoute::default();
        }
        self.stack.push(route);
    }

    /// Swap the current destination without growing the stack
    pub fn replace(&mut self, route: Route) {
        if route == Route::Drawer {
            self.drawer = DrawerRoute::default();
        }
        self.stack.pop();
        self.stack.push(route);
    }

    /// Pop back to the previous destination. Returns false when already
    /// at the bottom of the stack.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn drawer_route(&self) -> DrawerRoute {
        self.drawer
    }

    /// Switch the visible drawer screen; no stack effect.
    pub fn select_drawer(&mut self, route: DrawerRoute) {
        self.drawer = route;
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
