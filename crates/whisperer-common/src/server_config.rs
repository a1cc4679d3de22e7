//! Server configuration.
//!
//! Loaded from an optional TOML file, then overridden by environment
//! variables. A missing file means defaults; a present-but-broken file is an
//! error.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, WhispererError};

/// Runtime configuration for the web server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Minimum similarity score for a mapping suggestion (0.0 - 1.0).
    #[serde(default = "default_threshold")]
    pub match_threshold: f64,

    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5001
}
fn default_threshold() -> f64 {
    0.3
}
fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            match_threshold: default_threshold(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// Load configuration: `.env`, then the TOML file (`WHISPERER_CONFIG` or
    /// `whisperer.toml` if present), then `WHISPERER_*` env overrides.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("WHISPERER_CONFIG").unwrap_or_else(|_| "whisperer.toml".into());
        let mut config = if Path::new(&path).exists() {
            tracing::debug!(path, "loading config file");
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WhispererError::Config(format!("cannot read {path}: {e}")))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WhispererError::Config(e.to_string()))
    }

    /// Apply `WHISPERER_*` overrides from the given lookup. Takes a closure so
    /// tests don't have to mutate process-wide environment state.
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(host) = get("WHISPERER_HOST") {
            self.host = host;
        }
        if let Some(port) = get("WHISPERER_PORT").and_then(|v| v.parse().ok()) {
            self.port = port;
        }
        if let Some(threshold) = get("WHISPERER_MATCH_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.match_threshold = threshold;
        }
        if let Some(dir) = get("WHISPERER_STATIC_DIR") {
            self.static_dir = dir;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(WhispererError::Config(format!(
                "match_threshold must be within [0.0, 1.0], got {}",
                self.match_threshold
            )));
        }
        Ok(())
    }
}
