use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage key used when the config doesn't name one
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Configuration from config.toml in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key of the entry holding the task sequence
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            key: default_storage_key(),
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start in the dark theme
    #[serde(default)]
    pub dark_theme: bool,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides applied to both palettes (e.g. `accent = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            dark_theme: false,
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}
