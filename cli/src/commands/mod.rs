//! # NameGen Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level command groups of the `namegen` CLI
//! and the `AppContext` they all receive.
//!
//! ## Command Groups
//!
//! - `server`: discovery and manual override of the backend address
//! - `names`: health, options, stats and name generation
//! - `favorites`: list, add and remove saved favorites
//! - `history`: paginated generation history
//!
//! ## Architecture
//!
//! `main.rs` loads the configuration once and builds an `AppContext`. The
//! context owns the single `Resolver` of the process and an API client that
//! shares it, so every handler sees the same current server address.
//!
use crate::common::api::NameGenApi;
use crate::common::network::http;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::resolver::Resolver;
use std::sync::Arc;
use tracing::debug;

/// Command group for backend discovery and the saved server address.
pub mod server;
/// Commands that talk to the name-generation endpoints.
pub mod names;
/// Command group for saved favorites.
pub mod favorites;
/// Command for the generation history.
pub mod history;

/// Shared state handed to every command handler.
pub struct AppContext {
    pub config: Config,
    pub resolver: Arc<Resolver>,
    pub api: NameGenApi,
}

impl AppContext {
    /// Builds the resolver and API client from a loaded configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = http::build_client()?;
        let resolver = Arc::new(Resolver::from_config(&config, client.clone()));
        let api = NameGenApi::new(client, resolver.clone(), config.server.request_timeout());
        debug!("Initial server address: {}", resolver.api_base_url());
        Ok(Self {
            config,
            resolver,
            api,
        })
    }

    /// # Connect to the Backend (`connect`)
    ///
    /// The client startup path, run before every backend command.
    ///
    /// ## Workflow:
    /// 1. Adopts the saved server address, if there is one, so a previous
    ///    `server set` or discovery wins over the static platform default.
    /// 2. Probes the current address and keeps it if it answers.
    /// 3. Otherwise runs a full discovery pass.
    ///
    /// Never fails; with nothing reachable the static default is returned.
    pub async fn connect(&self) -> String {
        if let Some(saved) = self.resolver.restore_saved_server_url().await {
            debug!("Starting from saved server address {}", saved);
        }
        self.resolver.ensure_server_url().await
    }
}
