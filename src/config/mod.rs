//! Configuration Module - Store Settings
//!
//! The store needs exactly one setting: where the data directory
//! lives. It can come from a TOML file, from the `DATA_DIR`
//! environment variable, or fall back to `data/` under the working
//! tree.

pub mod loader;

use serde::Deserialize;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Top-level store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Directory holding `db.json`. Created on first use.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StoreConfig {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let data_dir = std::env::var(DATA_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(default_data_dir);
        Self { data_dir }
    }
}

// Default value functions for serde

fn default_data_dir() -> String {
    "data".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir() {
        assert_eq!(StoreConfig::default().data_dir, "data");
    }

    #[test]
    fn test_deserialize_with_absent_field() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, "data");
    }
}
