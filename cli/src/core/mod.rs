//! # NameGen Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: configuration loading and validation
//! - `error`: error types and the crate-wide `Result` alias
//! - `resolver`: the owned "current server address" and the discovery facade
//!   that every request goes through
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{NameGenError, Result}; // For error handling
//! use crate::core::resolver::Resolver; // For the current server address
//! ```
//!
pub mod config;
pub mod error;
pub mod resolver;
