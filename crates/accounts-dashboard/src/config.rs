//! Dashboard configuration
//!
//! Stored as TOML under the user's config directory. Accounts are never
//! written here; only presentation and session settings are.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{DashboardError, DashboardResult};

/// Config directory name under the platform config dir
const CONFIG_DIR: &str = "accounts-vault";

/// Config file name
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "ACCOUNTS_VAULT_CONFIG";

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Simulated login delay in milliseconds
    pub login_delay_ms: u64,

    /// Placeholder shown instead of a hidden password
    pub password_mask: String,

    /// chrono format string for the "added on" date
    pub date_format: String,

    /// Load the two demo accounts at startup
    pub seed_demo_accounts: bool,

    /// Explicit clipboard command line (auto-detected when unset)
    pub clipboard_command: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            password_mask: "•".repeat(12),
            date_format: "%Y-%m-%d".to_string(),
            seed_demo_accounts: false,
            clipboard_command: None,
        }
    }
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Load configuration, falling back to defaults when the file is missing
pub async fn load_config(path: &Path) -> DashboardResult<DashboardConfig> {
    if !path.exists() {
        return Ok(DashboardConfig::default());
    }

    let content = fs::read_to_string(path).await?;
    let config: DashboardConfig =
        toml::from_str(&content).map_err(|e| DashboardError::Config(e.to_string()))?;

    Ok(config)
}

/// Save configuration, creating the parent directory if needed
pub async fn save_config(path: &Path, config: &DashboardConfig) -> DashboardResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| DashboardError::Config(e.to_string()))?;
    fs::write(path, content).await?;

    Ok(())
}
