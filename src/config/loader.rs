//! Configuration Loader - File Loading and Validation
//!
//! Loads `store.toml`, validates it, and applies the `DATA_DIR`
//! environment override on top.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{DATA_DIR_ENV, StoreConfig};

/// Load and validate configuration from a TOML file.
///
/// The `DATA_DIR` environment variable, when set and non-empty, takes
/// precedence over the file's `data_dir`.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<StoreConfig> {
    let path = Path::new(path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: StoreConfig =
        toml::from_str(&content).with_context(|| "Failed to parse store config")?;

    if let Some(dir) = std::env::var(DATA_DIR_ENV)
        .ok()
        .filter(|dir| !dir.trim().is_empty())
    {
        config.data_dir = dir;
    }

    validate_config(&config)?;

    info!(data_dir = %config.data_dir, "Configuration loaded successfully");

    Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &StoreConfig) -> Result<()> {
    anyhow::ensure!(
        !config.data_dir.trim().is_empty(),
        "data_dir must not be empty"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_blank_dir() {
        let config = StoreConfig {
            data_dir: "   ".to_string(),
        };
        assert!(validate_config(&config).is_err());
    }
}
