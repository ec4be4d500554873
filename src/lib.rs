//! Yalla - a terminal store discovery app
//!
//! This library provides a small multi-screen terminal application: a
//! splash screen, login and sign-up forms, a store search screen and a
//! settings screen, wired together by a stack router plus a side drawer.
//! All business logic is client-side form validation and local UI state.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`constants`] - User-facing strings and default values
//! * [`logger`] - Opt-in file logging
//! * [`stores`] - The store catalog and name filtering
//! * [`validation`] - Canonical form validation predicates
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Store catalog, seed data and filtering
pub mod stores;

/// Form validation predicates shared by all screens
pub mod validation;

/// Terminal user interface components and rendering
pub mod ui;

pub use stores::{StoreCatalog, StoreRecord};
