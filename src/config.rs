//! App Configuration
//!
//! Parsed from the bundled `wishlist.toml`. Missing keys take defaults.

use leptos_swipe::SwipeConfig;
use serde::Deserialize;
use tracing::Level;

use crate::error::Result;

const BUNDLED_CONFIG: &str = include_str!("../wishlist.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// trace | debug | info | warn | error
    pub log_level: String,
    pub swipe: SwipeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            swipe: SwipeConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(source)?;
        config.swipe.validate()?;
        Ok(config)
    }

    /// Bundled config, or defaults if it does not parse
    pub fn load() -> (Self, Option<String>) {
        match Self::from_toml_str(BUNDLED_CONFIG) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e.to_string())),
        }
    }

    /// Unknown level names fall back to info
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
