use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::locale::Locale;

/// Configuration from the optional TOML config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, slot name → "#RRGGBB"
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            locale: Locale::default(),
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log destination. No file, no logging: the terminal belongs to the UI.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values given on the command line, which win over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locale: Option<Locale>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(locale) = overrides.locale {
            self.ui.locale = locale;
        }
        if let Some(file) = overrides.log_file {
            self.log.file = Some(file);
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
    }
}
