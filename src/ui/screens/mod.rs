//! Screen implementations
//!
//! Each screen owns its state exclusively; instances are built fresh when
//! navigation enters the route and dropped when it leaves.

pub mod login;
pub mod search;
pub mod settings;
pub mod signup;
pub mod splash;

pub use login::{LoginField, LoginScreen};
pub use search::{ExpansionState, SearchScreen};
pub use settings::{SettingsField, SettingsScreen};
pub use signup::{SignUpField, SignUpScreen};
pub use splash::SplashScreen;
