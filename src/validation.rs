//! Form validation predicates
//!
//! One canonical predicate set shared by every screen. Each predicate is a
//! pure function over a text input; malformed input simply fails the check.

use once_cell::sync::Lazy;
use regex::Regex;

/// Symbols a password must draw at least one character from
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._]{4,}$").expect("username pattern compiles"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// At least 4 characters: letters, digits, dots and underscores only.
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

/// `localpart@domain.tld` shape. Permissive on purpose: anything that is
/// not whitespace or `@` counts as a local part or domain label.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least 8 characters with one uppercase letter, one digit and one
/// symbol from [`PASSWORD_SYMBOLS`], drawn entirely from that closed
/// character class.
pub fn is_valid_password(password: &str) -> bool {
    let chars_allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c));

    password.chars().count() >= 8
        && chars_allowed
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
