use crate::ui::router::{DrawerRoute, Route};

/// Everything a screen or the router can ask the app to do.
///
/// Routes are closed enums, so navigating to an unknown destination is a
/// compile error rather than a runtime defect.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    /// Push a new screen onto the stack
    Navigate(Route),
    /// Swap the top of the stack without growing it
    Replace(Route),
    /// Pop back to the previous screen
    Back,

    // Drawer
    ToggleDrawer,
    SelectDrawer(DrawerRoute),

    // Outbound side effects
    /// Open a store link in the platform browser
    OpenUrl(String),

    // App control
    Quit,
    None,
}
