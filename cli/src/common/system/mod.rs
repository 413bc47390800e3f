//! # NameGen System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Host inspection for the client. Right now that means one thing: working out
//! which platform family the client is running on, because the right backend
//! address differs between an Android emulator, an iOS simulator and
//! everything else.
//!
//! ## Architecture
//!
//! - **`Platform`**: the closed set `android`, `ios`, `other`. Any other name
//!   collapses to `other`.
//! - **`PlatformDetector`**: the seam the discovery orchestrator asks once per
//!   pass. `HostPlatform` is the real implementation; tests use
//!   `FixedPlatform`.
//!
//! `HostPlatform` looks at, in order: the `NAMEGEN_PLATFORM` environment
//! variable, the configured override, and finally the target OS the binary
//! was compiled for.
//!
use crate::core::error::{NameGenError, Result};
use std::fmt;
use tracing::debug;

/// Environment variable that overrides platform detection.
pub const PLATFORM_ENV_VAR: &str = "NAMEGEN_PLATFORM";

/// Platform family the client runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    Other,
}

impl Platform {
    /// Maps a platform name to a `Platform`; unknown names become `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "android" => Platform::Android,
            "ios" => Platform::Ios,
            _ => Platform::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the platform identity for a discovery pass.
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> Result<Platform>;
}

/// Detects the platform of the running host.
#[derive(Debug, Clone, Default)]
pub struct HostPlatform {
    configured: Option<String>,
}

impl HostPlatform {
    /// `configured` is the `platform` key from the config file, if any.
    pub fn new(configured: Option<String>) -> Self {
        Self { configured }
    }
}

impl PlatformDetector for HostPlatform {
    fn detect(&self) -> Result<Platform> {
        match std::env::var(PLATFORM_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => {
                debug!("Platform taken from {}: {}", PLATFORM_ENV_VAR, value);
                return Ok(Platform::from_name(&value));
            }
            Ok(_) | Err(std::env::VarError::NotPresent) => {}
            Err(std::env::VarError::NotUnicode(raw)) => {
                return Err(NameGenError::Platform(format!(
                    "{} is not valid unicode: {:?}",
                    PLATFORM_ENV_VAR, raw
                ))
                .into());
            }
        }
        if let Some(name) = &self.configured {
            debug!("Platform taken from configuration: {}", name);
            return Ok(Platform::from_name(name));
        }
        Ok(Platform::from_name(std::env::consts::OS))
    }
}

/// Always reports the same platform.
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform(pub Platform);

impl PlatformDetector for FixedPlatform {
    fn detect(&self) -> Result<Platform> {
        Ok(self.0)
    }
}
