//! # NameGen Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers and the core
//! resolver. Command-specific logic lives in `commands::`, foundational
//! infrastructure in `core::`.
//!
//! ## Architecture
//!
//! - **`api`**: typed client for the NameGen REST endpoints (health, options,
//!   generation, stats, favorites, history).
//! - **`fs`**: filesystem helpers (missing-file-tolerant reads, atomic writes).
//! - **`network`**: request primitive, health prober, candidate generation and
//!   the discovery orchestrator.
//! - **`storage`**: persisted key-value preferences.
//! - **`system`**: platform detection.
//!

/// Typed client for the NameGen REST API.
pub mod api;
/// Utilities for filesystem operations.
pub mod fs;
/// Requests, health probes and backend discovery.
pub mod network;
/// Persisted preferences (the saved server address).
pub mod storage;
/// Host platform detection.
pub mod system;
