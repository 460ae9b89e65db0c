//! Main application configuration
//!
//! This module defines the configuration for the host stand console,
//! including environment variable loading, TOML files and validation.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub console: ConsoleSettings,
}

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name shown in the startup log
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Settings for the interactive console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Clear the terminal between screens
    pub clear_screen: bool,
    /// Show each server's table count on the servers screen
    pub show_server_load: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "host-stand".to_string(),
            // Logs share the terminal with the menu
            log_level: "warn".to_string(),
        }
    }
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            clear_screen: true,
            show_server_load: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| anyhow!("Invalid configuration: {}", e))
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("HOST_SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("HOST_LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(clear) = env::var("HOST_CLEAR_SCREEN") {
            self.console.clear_screen = clear
                .parse()
                .map_err(|_| anyhow!("Invalid HOST_CLEAR_SCREEN value: {}", clear))?;
        }
        if let Ok(show) = env::var("HOST_SHOW_SERVER_LOAD") {
            self.console.show_server_load = show
                .parse()
                .map_err(|_| anyhow!("Invalid HOST_SHOW_SERVER_LOAD value: {}", show))?;
        }
        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.trim().is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    Ok(())
}
