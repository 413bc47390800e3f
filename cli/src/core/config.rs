//! # NameGen Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, expands and validates the client configuration. All
//! settings have defaults, so running without a config file is the normal
//! case; a file only needs the keys it wants to change.
//!
//! Configuration sources (first match wins):
//! 1. An explicit path (`--config` flag or the `NAMEGEN_CONFIG` variable)
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/namegen/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! ## Example
//!
//! ```toml
//! platform = "android"
//!
//! [server]
//! port = 5000
//! lan_subnets = ["192.168.1", "192.168.0"]
//! probe_timeout_ms = 2000
//! request_timeout_ms = 15000
//!
//! [storage]
//! path = "~/.local/share/namegen/preferences.toml"
//! ```
//!
use crate::core::error::{NameGenError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides the detected platform (`android`, `ios`, anything else is `other`).
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Settings that shape discovery and the request layer.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Port the backend listens on; shared by every candidate and static default.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Two-octet prefixes of the /24 subnets swept on android, in probe order.
    #[serde(default = "default_lan_subnets")]
    pub lan_subnets: Vec<String>,
    /// Timeout for a single `/health` probe.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Timeout for ordinary API requests.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Where the preference file lives.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the preference file (can use ~). Will be expanded.
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            lan_subnets: default_lan_subnets(),
            probe_timeout_ms: default_probe_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl ServerConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_port() -> u16 {
    5000
}
fn default_lan_subnets() -> Vec<String> {
    vec!["192.168.1".to_string(), "192.168.0".to_string()]
}
fn default_probe_timeout_ms() -> u64 {
    2_000
}
fn default_request_timeout_ms() -> u64 {
    15_000
}
fn default_storage_path() -> String {
    match ProjectDirs::from("com", "NameGen", "namegen") {
        Some(dirs) => dirs
            .data_dir()
            .join(PREFERENCES_FILENAME)
            .to_string_lossy()
            .into_owned(),
        None => format!("~/.namegen/{}", PREFERENCES_FILENAME),
    }
}

const CONFIG_FILENAME: &str = "config.toml";
const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Loads the effective configuration.
///
/// An explicit path must exist; a missing user config simply means defaults.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let mut config = match explicit_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "NameGen", "namegen") {
        let config_path = proj_dirs.config_dir().join(CONFIG_FILENAME);
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) {
    config.storage.path = shellexpand::tilde(&config.storage.path).into_owned();
    debug!("Expanded preference path: {}", config.storage.path);
}

impl Config {
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.path)
    }
}

fn validate_config(config: &Config) -> Result<()> {
    let server = &config.server;
    if server.port == 0 {
        return Err(anyhow!(NameGenError::Config(
            "server.port must be non-zero".to_string()
        )));
    }
    for subnet in &server.lan_subnets {
        let octets: Vec<&str> = subnet.split('.').collect();
        if octets.len() != 3 || octets.iter().any(|o| o.parse::<u8>().is_err()) {
            return Err(anyhow!(NameGenError::Config(format!(
                "Invalid LAN subnet '{}'. Expected a /24 prefix of three octets, e.g. 192.168.1",
                subnet
            ))));
        }
    }
    if server.probe_timeout_ms == 0 || server.request_timeout_ms == 0 {
        return Err(anyhow!(NameGenError::Config(
            "Timeouts must be non-zero".to_string()
        )));
    }
    // A probe must fail well before an ordinary request would.
    if server.probe_timeout_ms >= server.request_timeout_ms {
        return Err(anyhow!(NameGenError::Config(format!(
            "probe_timeout_ms ({}) must be shorter than request_timeout_ms ({})",
            server.probe_timeout_ms, server.request_timeout_ms
        ))));
    }
    if config.storage.path.trim().is_empty() {
        return Err(anyhow!(NameGenError::Config(
            "storage.path cannot be empty".to_string()
        )));
    }
    Ok(())
}
