//! # NameGen Network Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! Everything the client needs to talk to, and first find, the NameGen
//! backend on a local network.
//!
//! ## Architecture
//!
//! - **`http`**: the generic request primitive (timeout, JSON parsing, status
//!   classification) shared by probing and the REST surface.
//! - **`probe`**: `HealthProbe` trait and its HTTP implementation, reducing a
//!   `/health` call to reachable / unreachable.
//! - **`candidates`**: pure generation of the addresses to try per platform,
//!   plus the static per-platform default.
//! - **`discovery`**: the orchestrator that combines the saved preference,
//!   candidate fan-out and fallback into one discovery pass.
//!
//! The public entry point for the rest of the client is
//! `crate::core::resolver::Resolver`, which wraps `discovery`.
//!

pub mod candidates;
pub mod discovery;
pub mod http;
pub mod probe;
