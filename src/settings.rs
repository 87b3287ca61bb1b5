//! User settings for the `sitedraft` application, read from `~/.sitedraft.toml`.

use crate::constants::{
    DEFAULT_API_BASE, DEFAULT_RAW_BASE, DEFAULT_SERVER_BASE, DEFAULT_TIMEOUT_SECS,
    DEFAULT_UPLOAD_ROOT, SITEDRAFT_CFG_FILE_NAME,
};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf, time::Duration};

/// User settings. Every field is optional in the file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// The GitHub access token. Overridden by `GITHUB_TOKEN`.
    pub github_token: String,
    /// The repository API root.
    pub api_base: String,
    /// The raw content host.
    pub raw_base: String,
    /// The site server, which performs clones.
    pub server_base: String,
    /// The path under which uploaded assets live.
    pub upload_root: String,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            github_token: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
            server_base: DEFAULT_SERVER_BASE.to_string(),
            upload_root: DEFAULT_UPLOAD_ROOT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Returns the path to the settings file.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(SITEDRAFT_CFG_FILE_NAME))
    }

    /// Loads the settings file if it exists, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::path().ok_or(anyhow!("Home directory not found."))?;

        let settings = if path.exists() {
            Self::from_toml(&std::fs::read_to_string(&path)?)
                .map_err(|e| anyhow!("Invalid settings at {}: {}", path.display(), e))?
        } else {
            Self::default()
        };

        Ok(settings.with_token_override(env::var("GITHUB_TOKEN").ok()))
    }

    /// Parses settings from TOML.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(Into::into)
    }

    /// Replaces the token with `token`, if it is set and non-empty.
    fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.github_token = token;
        }
        self
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
