use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::ConfigError;

/// Default config file contents
pub const DEFAULT_CONFIG: &str = include_str!("../../cardpager.toml");

/// Pager configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Items on single page.
    /// Kept raw, it is validated on first pagination
    pub page_size: i64,
    /// Id of the element items are rendered into
    pub item_container: String,
    /// Id of the element page buttons are rendered into
    pub button_container: String,
    /// Max log level: trace, debug, info, warn or error
    pub log_level: String,
    /// If Some, log is also appended to this file (native only)
    pub log_file: Option<String>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: 6,
            item_container: "cards".to_string(),
            button_container: "pages".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl PagerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
