//! Constants used throughout the application
//!
//! This module centralizes user-facing strings, preview sizes and other
//! constant values to improve maintainability and consistency.

// Branding
pub const APP_NAME: &str = "Yalla!";
pub const SPLASH_BRAND: &str = "Yalla !";
pub const WELCOME_TEXT: &str = "Welcome to Yalla App";

// Screen titles
pub const TITLE_SIGN_IN: &str = "Sign In";
pub const TITLE_CREATE_ACCOUNT: &str = "Create an Account";
pub const TITLE_EDIT_DETAILS: &str = "Edit User Details";
pub const TITLE_FEEDBACK: &str = "Feedback";

// Validation Error Messages
pub const ERROR_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const ERROR_INVALID_LOGIN_PASSWORD: &str = "Please enter a valid password.";
pub const ERROR_INVALID_USERNAME: &str =
    "Username must be at least 4 characters and can contain only letters, numbers, dots, and underscores.";
pub const ERROR_INVALID_PASSWORD: &str =
    "Password must contain at least 8 characters, including an uppercase letter, a number, and a symbol.";
pub const ERROR_PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const ERROR_SETTINGS_USERNAME: &str =
    "Username must be at least 4 characters and contain only alphabets, numbers, dots or underscores";
pub const ERROR_SETTINGS_PASSWORD: &str =
    "Password must have at least 8 characters with one uppercase letter, one digit, and one special character.";
pub const ERROR_EMPTY_FEEDBACK: &str = "Feedback cannot be empty.";

// Acknowledgements
pub const ACK_DETAILS_UPDATED: &str = "Details Updated";
pub const ACK_FEEDBACK_SUBMITTED: &str = "Feedback Submitted";

// Search screen
pub const SEARCH_PLACEHOLDER: &str = "Ask YallaApp";
/// Collapsed descriptions show this many leading characters plus an ellipsis
pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;
/// Collapsed comment lists show this many leading entries
pub const COMMENT_PREVIEW_COUNT: usize = 2;

// Drawer entries
pub const DRAWER_LABEL_HOME: &str = "Home";
pub const DRAWER_LABEL_SETTINGS: &str = "Settings";

// Splash timing
/// Seconds the splash screen stays up before replacing itself with login
pub const SPLASH_DELAY_DEFAULT_SECS: u64 = 3;
pub const SPLASH_DELAY_MIN_SECS: u64 = 1;
pub const SPLASH_DELAY_MAX_SECS: u64 = 30;

// UI Layout Constants
/// Minimum drawer width in columns
pub const DRAWER_MIN_WIDTH: u16 = 15;
/// Maximum drawer width in columns
pub const DRAWER_MAX_WIDTH: u16 = 50;
/// Default drawer width in columns
pub const DRAWER_DEFAULT_WIDTH: u16 = 24;

// Config generation
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
