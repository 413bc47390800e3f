//! # NameGen Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the NameGen client.
//! It follows the same two-layer approach everywhere:
//! - `NameGenError`: a `thiserror` enum naming the failure domains the client
//!   knows about (configuration, storage, transport, HTTP status, decoding).
//! - `Result<T>`: an alias for `anyhow::Result<T>`, so call sites can attach
//!   context with `anyhow::Context` and callers can still `downcast_ref` to a
//!   specific `NameGenError` when they need to branch on it.
//!
//! ## Discovery and errors
//!
//! The discovery subsystem never lets these errors escape. Storage and
//! platform lookups return `Result`, and the orchestrator turns an `Err` into
//! "no stored value" or "unknown platform" at the call site after logging it.
//! The health prober turns every error into `reachable = false`.
//!
//! ```rust
//! # use namegen::core::error::{NameGenError, Result};
//! # fn check(status: u16) -> Result<()> {
//! if status != 200 {
//!     return Err(NameGenError::Unhealthy(format!("HTTP {}", status)).into());
//! }
//! # Ok(())
//! # }
//! ```
//!
use thiserror::Error;

/// Custom error type for the NameGen client.
#[derive(Error, Debug)]
pub enum NameGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Platform detection failed: {0}")]
    Platform(String),

    /// Connection refused, DNS failure, timeout, or any other transport-level failure.
    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    HttpStatus { status: u16, message: String },

    #[error("Malformed response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// A `/health` response that was well-formed but did not report `healthy`.
    #[error("Server is not healthy: {0}")]
    Unhealthy(String),

    #[error("Invalid server address: '{0}'")]
    InvalidAddress(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = NameGenError::Config("probe timeout must be non-zero".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: probe timeout must be non-zero"
        );

        let status_err = NameGenError::HttpStatus {
            status: 503,
            message: "Request failed (503)".into(),
        };
        assert_eq!(status_err.to_string(), "Request failed (503)");

        let invalid = NameGenError::InvalidAddress("  ".into());
        assert_eq!(invalid.to_string(), "Invalid server address: '  '");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = NameGenError::NetworkUnavailable("connection refused".into()).into();
        assert!(matches!(
            err.downcast_ref::<NameGenError>(),
            Some(NameGenError::NetworkUnavailable(_))
        ));
    }
}
