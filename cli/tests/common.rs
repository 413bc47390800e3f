//! # NameGen CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test gets
//! its own configuration file and preference file inside a temporary
//! directory, so runs never touch the user's real settings.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::net::TcpListener;
use std::path::{Path, PathBuf};

/// Creates an `assert_cmd::Command` for the compiled `namegen` binary with
/// platform and config overrides from the environment removed.
///
/// ## Panics
/// Panics if the `namegen` binary cannot be found via `Command::cargo_bin`.
pub fn namegen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("namegen").expect("Failed to find namegen binary for testing");
    cmd.env_remove("NAMEGEN_PLATFORM")
        .env_remove("NAMEGEN_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a config for the `other` platform that points discovery at `port`
/// and keeps the preference file under `dir`. Returns the config path.
pub fn write_test_config(dir: &Path, port: u16) -> PathBuf {
    let config_path = dir.join("config.toml");
    let storage_path = dir.join("preferences.toml");
    let content = format!(
        r#"platform = "other"

[server]
port = {port}
probe_timeout_ms = 500
request_timeout_ms = 2000

[storage]
path = "{}"
"#,
        storage_path.display()
    );
    fs::write(&config_path, content).expect("Failed to write test config");
    config_path
}

/// A localhost port with nothing listening on it.
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    listener.local_addr().expect("No local address").port()
}
