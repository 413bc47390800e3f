//! # NameGen Server Command Integration Tests
//!
//! File: cli/tests/server.rs
//!
//! Drives `namegen server ...` and a backend command end to end against a
//! `wiremock` health endpoint on 127.0.0.1. With the `other` platform and the
//! configured port set to the mock's port, the first discovery candidate is
//! the mock itself.
//!
mod common;
use common::{namegen_cmd, unused_port, write_test_config};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn healthy_backend() -> MockServer {
    backend_with_version("1.0.0").await
}

/// A healthy backend that reports `version`, so tests can tell two apart.
async fn backend_with_version(version: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "timestamp": "2026-10-19T10:00:00",
            "version": version
        })))
        .mount(&server)
        .await;
    server
}

#[test]
fn test_show_without_saved_address() {
    let dir = tempdir().unwrap();
    let port = unused_port();
    let config = write_test_config(dir.path(), port);

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"))
        .stdout(predicate::str::contains(format!("http://127.0.0.1:{}", port)));
}

#[test]
fn test_discover_with_nothing_reachable_falls_back() {
    let dir = tempdir().unwrap();
    let port = unused_port();
    let config = write_test_config(dir.path(), port);

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "discover"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("http://127.0.0.1:{}", port)))
        .stderr(predicate::str::contains("Warning"));

    // A fallback result is never persisted.
    assert!(!dir.path().join("preferences.toml").exists());
}

#[test]
fn test_set_unreachable_address_fails() {
    let dir = tempdir().unwrap();
    let config = write_test_config(dir.path(), unused_port());
    let dead = format!("http://127.0.0.1:{}", unused_port());

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "set", &dead])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    assert!(!dir.path().join("preferences.toml").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_set_then_show_then_clear() {
    let backend = healthy_backend().await;
    let dir = tempdir().unwrap();
    let config = write_test_config(dir.path(), unused_port());

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "set", &format!("{}/", backend.uri())])
        .assert()
        .success()
        .stdout(predicate::str::contains(backend.uri()));

    let saved = fs::read_to_string(dir.path().join("preferences.toml")).unwrap();
    assert!(saved.contains("custom_server_url"));
    assert!(saved.contains(&backend.uri()));

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Saved server address:   {}",
            backend.uri()
        )));

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "clear"])
        .assert()
        .success();

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_discover_finds_local_backend_and_saves_it() {
    let backend = healthy_backend().await;
    let port = backend.address().port();
    let dir = tempdir().unwrap();
    let config = write_test_config(dir.path(), port);

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "discover"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("http://127.0.0.1:{}", port)))
        .stdout(predicate::str::contains("discovered and saved"));

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "discover"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved address is reachable"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_health_command_uses_discovered_backend() {
    let backend = healthy_backend().await;
    let dir = tempdir().unwrap();
    let config = write_test_config(dir.path(), backend.address().port());

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("healthy"))
        .stdout(predicate::str::contains("1.0.0"));
}

#[test]
fn test_backend_command_reports_network_error() {
    let dir = tempdir().unwrap();
    let config = write_test_config(dir.path(), unused_port());

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .arg("options")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Network unavailable"));
}

#[test]
fn test_set_blank_address_is_invalid() {
    let dir = tempdir().unwrap();
    let config = write_test_config(dir.path(), unused_port());

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "set", " / "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid server address"));
}

#[test]
fn test_show_with_minimal_config() {
    let dir = tempdir().unwrap();
    let storage = dir.path().join("preferences.toml");
    let config = dir.path().join("config.toml");
    fs::write(&config, format!("[storage]\npath = \"{}\"\n", storage.display())).unwrap();

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "show"])
        .env("NAMEGEN_PLATFORM", "other")
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"))
        .stdout(predicate::str::contains("http://127.0.0.1:5000"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_backend_command_uses_saved_address_over_reachable_default() {
    let saved = backend_with_version("saved-backend").await;
    let default = backend_with_version("default-backend").await;
    let dir = tempdir().unwrap();
    // The static default for `other` is 127.0.0.1:<port>, which `default` answers on.
    let config = write_test_config(dir.path(), default.address().port());

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .args(["server", "set", &saved.uri()])
        .assert()
        .success();

    namegen_cmd()
        .arg("--config")
        .arg(&config)
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains(saved.uri()))
        .stdout(predicate::str::contains("saved-backend"))
        .stdout(predicate::str::contains("default-backend").not());
}
