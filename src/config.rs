//! Configuration handling for the waitlist client

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Form endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/modelship-waitlist";

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "MODELSHIP_WAITLIST_ENDPOINT";

/// User configuration for the waitlist client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WaitlistConfig {
    /// Form-processing endpoint that receives the POST
    pub endpoint: Option<String>,
    /// Per-request timeout; no timeout when unset
    pub request_timeout_secs: Option<u64>,
}

impl WaitlistConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ai", "modelship", "modelship-waitlist")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory, then apply
    /// the environment override
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok());
        Ok(config)
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: WaitlistConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Replace the endpoint with a non-blank override value
    fn apply_endpoint_override(&mut self, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!("Endpoint overridden by {ENDPOINT_ENV_VAR}");
            self.endpoint = Some(value);
        }
    }

    /// Endpoint to post to
    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
