//! # NameGen Client Library
//!
//! File: cli/src/lib.rs
//!
//! Library half of the `namegen` crate. The binary in `main.rs` is a thin
//! clap front-end over these modules:
//!
//! - `core`: configuration, errors and the `Resolver` that owns the current
//!   backend address
//! - `common`: platform detection, preference storage, the health prober,
//!   candidate generation, the discovery orchestrator and the REST client
//! - `commands`: CLI command handlers
//!
pub mod commands;
pub mod common;
pub mod core;
