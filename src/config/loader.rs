use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};

/// Where an empty `api_url` points. A browser page would fall back to its own
/// origin; a standalone consumer falls back to the provider's default local
/// address.
pub const DEFAULT_LOCAL_ORIGIN: &str = "http://localhost:4000";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Base URL of the portfolio provider. Empty means "same origin",
    /// resolved to [`DEFAULT_LOCAL_ORIGIN`].
    #[serde(default)]
    pub api_url: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl LoaderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FolioError::IoError)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FolioError::ConfigError {
            message: format!("Loader TOML parsing error: {}", e),
        })
    }

    pub fn base_url(&self) -> &str {
        if self.api_url.is_empty() {
            DEFAULT_LOCAL_ORIGIN
        } else {
            self.api_url.trim_end_matches('/')
        }
    }

    pub fn portfolio_url(&self) -> String {
        format!("{}/portfolio", self.base_url())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for LoaderConfig {
    fn validate(&self) -> Result<()> {
        if !self.api_url.is_empty() {
            validate_url("api_url", &self.api_url)?;
        }
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
