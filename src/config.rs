use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::Level;

/// Backend address used when `API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// `API_URL`; `None` when unset or blank.
    pub api_url: Option<String>,
    pub log_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let log_dir = lookup("LOG_DIR")
            .unwrap_or_else(|| "logs".to_string())
            .into();

        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string()) // default info
            .parse()
            .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?;

        Ok(Self {
            api_url,
            log_dir,
            log_level,
        })
    }

    /// Base URL every request is resolved against. Resolved once at startup.
    pub fn base_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
