//! Application-level configuration
//!
//! Defines the top-level configuration: UI behavior and key bindings,
//! terminal size requirements, logging and the task data location.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use supertui_tui::app::{GlobalKeys, DEFAULT_MAX_DEPTH};
use supertui_tui::{LayoutManager, Size, ThemeManager};

/// Embedded default configuration file
const DEFAULT_CONFIG: &str = include_str!("../../supertui.config.toml");

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "supertui.config.toml";

/// Environment variable naming an explicit configuration file
const CONFIG_ENV: &str = "SUPERTUI_CONFIG";

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
    /// Terminal requirements
    #[serde(default)]
    pub terminal: TerminalConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Task data configuration
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from the first file found, or the embedded default.
    ///
    /// Looks in `./supertui.config.toml`, then `$SUPERTUI_CONFIG`, then
    /// `~/.supertui/supertui.config.toml`.
    pub fn load() -> Result<Self> {
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_NAME) {
            return Self::parse(&content, CONFIG_FILE_NAME);
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV) {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                return Self::parse(&content, &config_path);
            }
        }

        if let Some(home_config) = Self::home_config_path() {
            if let Ok(content) = std::fs::read_to_string(&home_config) {
                return Self::parse(&content, &home_config.display().to_string());
            }
        }

        Self::embedded()
    }

    /// Load configuration from a specific file path.
    ///
    /// A missing file is created with the default settings.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, &path.display().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create directory {}", parent.display()))?;
                }
                std::fs::write(path, DEFAULT_CONFIG)
                    .with_context(|| format!("Failed to create config file at {}", path.display()))?;
                eprintln!(
                    "Created {} with default settings. Edit it to customize the shell.",
                    path.display()
                );
                Self::embedded()
            }
            Err(e) => Err(anyhow::anyhow!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            )),
        }
    }

    /// The configuration compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG, "embedded default config")
    }

    /// Text of the embedded default configuration file
    pub fn default_toml() -> &'static str {
        DEFAULT_CONFIG
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", origin, e))
    }

    fn home_config_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(".supertui").join(CONFIG_FILE_NAME))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(anyhow::anyhow!("Invalid log level: {}", self.logging.level)),
        }

        if !(1..=4).contains(&self.ui.header_rows) {
            return Err(anyhow::anyhow!(
                "header_rows must be between 1 and 4, got {}",
                self.ui.header_rows
            ));
        }
        if self.ui.footer_rows > 3 {
            return Err(anyhow::anyhow!(
                "footer_rows must be between 0 and 3, got {}",
                self.ui.footer_rows
            ));
        }
        if self.ui.max_stack_depth == 0 {
            return Err(anyhow::anyhow!("max_stack_depth must be at least 1"));
        }

        self.global_keys()?;
        ThemeManager::default()
            .apply(&self.ui.theme)
            .with_context(|| format!("Invalid theme: {}", self.ui.theme))?;

        // Fixed rows alone must fit into the minimum height
        let fixed = self.ui.header_rows + 1 + self.ui.footer_rows;
        if self.terminal.min_width == 0 || self.terminal.min_height < fixed {
            return Err(anyhow::anyhow!(
                "Minimum terminal size {}x{} cannot hold the {} fixed rows",
                self.terminal.min_width,
                self.terminal.min_height,
                fixed
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(theme) = std::env::var("SUPERTUI_THEME") {
            self.ui.theme = theme;
        }
        if let Ok(level) = std::env::var("SUPERTUI_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Ok(path) = std::env::var("SUPERTUI_DATA_PATH") {
            self.data.path = Some(PathBuf::from(path));
        }
        if let Ok(value) = std::env::var("SUPERTUI_AUTO_START") {
            match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.ui.auto_start = true,
                "0" | "false" | "no" | "off" => self.ui.auto_start = false,
                other => tracing::warn!(value = other, "ignoring SUPERTUI_AUTO_START"),
            }
        }
    }

    /// Global key bindings parsed from the `[ui]` table
    pub fn global_keys(&self) -> Result<GlobalKeys> {
        GlobalKeys::parse(
            &self.ui.quit_keys,
            &self.ui.help_keys,
            &self.ui.back_keys,
            &self.ui.menu_keys,
        )
        .context("Invalid key binding in [ui]")
    }

    pub fn layout(&self) -> LayoutManager {
        LayoutManager::new(self.ui.header_rows, self.ui.footer_rows)
    }

    /// Theme manager with the configured theme applied
    pub fn theme_manager(&self) -> Result<ThemeManager> {
        let mut manager = ThemeManager::default();
        manager
            .apply(&self.ui.theme)
            .with_context(|| format!("Invalid theme: {}", self.ui.theme))?;
        Ok(manager)
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.terminal.min_width, self.terminal.min_height)
    }

    /// Get a summary of the configuration
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Configuration loaded:\n");
        summary.push_str(&format!("Theme: {}\n", self.ui.theme));
        summary.push_str(&format!("Auto start: {}\n", self.ui.auto_start));
        summary.push_str(&format!(
            "Rows: header {}, footer {}\n",
            self.ui.header_rows, self.ui.footer_rows
        ));
        summary.push_str(&format!("Minimum size: {}\n", self.min_size()));
        summary.push_str(&format!("Logging Level: {}\n", self.logging.level));
        match &self.data.path {
            Some(path) => summary.push_str(&format!("Data: {}\n", path.display())),
            None => summary.push_str("Data: built-in sample\n"),
        }
        summary
    }
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Preset name or color specifier
    pub theme: String,
    /// Open the dashboard on start instead of the idle shell
    pub auto_start: bool,
    pub header_rows: u16,
    pub footer_rows: u16,
    pub max_stack_depth: usize,
    pub quit_keys: Vec<String>,
    pub help_keys: Vec<String>,
    pub back_keys: Vec<String>,
    pub menu_keys: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            auto_start: true,
            header_rows: 2,
            footer_rows: 1,
            max_stack_depth: DEFAULT_MAX_DEPTH,
            quit_keys: strings(&["ctrl+c", "ctrl+q", "q"]),
            help_keys: strings(&["f1", "?"]),
            back_keys: strings(&["esc"]),
            menu_keys: strings(&["f10"]),
        }
    }
}

/// Terminal requirements checked before the shell starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub min_width: u16,
    pub min_height: u16,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            min_width: 40,
            min_height: 12,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log file; defaults to the platform data directory
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Task data configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// JSON task file; the built-in sample data is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_matches_defaults() {
        let config = AppConfig::embedded().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_rows_and_keys() {
        let mut config = AppConfig::default();
        config.ui.header_rows = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.ui.quit_keys.push("hyper+q".into());
        let err = config.validate().unwrap_err();
        assert!(format!("{err:#}").contains("hyper+q"));

        let mut config = AppConfig::default();
        config.ui.theme = "not-a-color".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.terminal.min_height = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn theme_manager_accepts_presets_and_colors() {
        let mut config = AppConfig::default();
        config.ui.theme = "ocean".into();
        assert_eq!(config.theme_manager().unwrap().theme().name, "ocean");

        config.ui.theme = "#FF8800".into();
        let manager = config.theme_manager().unwrap();
        assert_eq!(manager.theme().primary.to_string(), "#ff8800");
    }
}
