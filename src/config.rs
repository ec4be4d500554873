//! Configuration management
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DRAWER_DEFAULT_WIDTH, DRAWER_MAX_WIDTH, DRAWER_MIN_WIDTH,
    SPLASH_DELAY_DEFAULT_SECS, SPLASH_DELAY_MAX_SECS, SPLASH_DELAY_MIN_SECS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub splash: SplashConfig,
    pub stores: StoresConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Drawer width in columns
    pub drawer_width: u16,
}

/// Splash screen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Seconds before the splash screen replaces itself with login
    pub delay_secs: u64,
}

/// Store catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoresConfig {
    /// Optional JSON file with the store corpus; the built-in seed data
    /// is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file in the platform data directory
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            drawer_width: DRAWER_DEFAULT_WIDTH,
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            delay_secs: SPLASH_DELAY_DEFAULT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("yalla.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("yalla").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.drawer_width < DRAWER_MIN_WIDTH || self.ui.drawer_width > DRAWER_MAX_WIDTH {
            anyhow::bail!(
                "drawer_width must be between {} and {} columns, got {}",
                DRAWER_MIN_WIDTH,
                DRAWER_MAX_WIDTH,
                self.ui.drawer_width
            );
        }

        if self.splash.delay_secs < SPLASH_DELAY_MIN_SECS
            || self.splash.delay_secs > SPLASH_DELAY_MAX_SECS
        {
            anyhow::bail!(
                "splash delay_secs must be between {} and {} seconds, got {}",
                SPLASH_DELAY_MIN_SECS,
                SPLASH_DELAY_MAX_SECS,
                self.splash.delay_secs
            );
        }

        if let Some(path) = &self.stores.catalog_path {
            if !path.exists() {
                anyhow::bail!("stores catalog_path does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content =
            toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Yalla Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("yalla"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
