//! # NameGen Address Resolver
//!
//! File: cli/src/core/resolver.rs
//!
//! ## Overview
//!
//! The `Resolver` is the only piece of the discovery subsystem the rest of the
//! client talks to. It owns the **current base address** (the prefix for every
//! outgoing request) and exposes the operations that change it:
//!
//! - `api_base_url`: the current address, no I/O.
//! - `discover_server`: run a full discovery pass and adopt its result.
//! - `ensure_server_url`: keep the current address if it still answers its
//!   health check, otherwise discover.
//! - `set_server_url`: manual override; only installed if it probes healthy.
//! - `restore_saved_server_url`: adopt the saved preference without probing;
//!   the CLI startup path runs it before `ensure_server_url`.
//! - `get_custom_server_url`: the saved preference, if any.
//! - `clear_custom_server_url`: forget the preference and return to the
//!   static platform default.
//!
//! ## Concurrency
//!
//! The current address is replaced as a whole under an `RwLock`, so readers
//! see the old or the new value and never anything in between. It starts out
//! as the static default for the detected platform and is never empty.
//!
//! Every mutating operation takes the same async in-flight guard for its whole
//! duration. A discovery requested while another is running waits for it and
//! then performs its own complete pass; passes and manual overrides never
//! interleave.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # use namegen::core::{config::Config, resolver::Resolver};
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::default();
//! let client = namegen::common::network::http::build_client()?;
//! let resolver = Resolver::from_config(&config, client);
//! let base = resolver.ensure_server_url().await;
//! println!("Using {}", base);
//! # Ok(())
//! # }
//! ```
//!
use crate::common::network::candidates::CandidateSettings;
use crate::common::network::discovery::{Discovery, DiscoveryOutcome};
use crate::common::network::probe::HttpProbe;
use crate::common::storage::{FileStore, ServerPreference};
use crate::common::system::HostPlatform;
use crate::core::config::Config;
use reqwest::Client;
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// # Address Resolver (`Resolver`)
///
/// Owns the current backend base address and the discovery collaborators.
/// One instance is created per process and shared by `Arc` with the REST
/// client, which reads `api_base_url()` at the moment each request is sent.
///
/// ## Invariants
///
/// * The current address is never empty; it starts at the static platform
///   default.
/// * Discover, ensure, set and clear hold `pass_guard` for their whole
///   duration and never interleave.
pub struct Resolver {
    discovery: Discovery,
    current: RwLock<String>,
    pass_guard: Mutex<()>,
}

impl Resolver {
    /// Creates a resolver whose current address is the static platform default.
    pub fn new(discovery: Discovery) -> Self {
        let initial = discovery.static_default();
        debug!("Initial server address: {}", initial);
        Self {
            discovery,
            current: RwLock::new(initial),
            pass_guard: Mutex::new(()),
        }
    }

    /// Wires the production collaborators: HTTP prober, file-backed
    /// preferences and host platform detection.
    pub fn from_config(config: &Config, client: Client) -> Self {
        let prober = Arc::new(HttpProbe::new(client, config.server.probe_timeout()));
        let store = Arc::new(FileStore::new(config.storage_path()));
        let platform = Arc::new(HostPlatform::new(config.platform.clone()));
        let settings = CandidateSettings::new(config.server.port, config.server.lan_subnets.clone());
        Self::new(Discovery::new(
            prober,
            ServerPreference::new(store),
            platform,
            settings,
        ))
    }

    /// The address currently used to prefix requests.
    pub fn api_base_url(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn adopt(&self, address: String) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        if *current != address {
            info!("Server address changed: {} -> {}", *current, address);
        }
        *current = address;
    }

    /// # Discover Server (`discover_server`)
    ///
    /// Runs a full discovery pass and adopts its result.
    ///
    /// ## Workflow:
    /// 1. Waits for any pass or override already in flight.
    /// 2. Runs `Discovery::run` (saved preference, then candidate fan-out,
    ///    then static default).
    /// 3. Replaces the current address with the result.
    ///
    /// Never fails; the returned address is always non-empty.
    pub async fn discover_server(&self) -> String {
        let _guard = self.pass_guard.lock().await;
        self.discover_locked().await.address
    }

    /// Like `discover_server`, but also reports where the address came from.
    pub async fn discover_with_outcome(&self) -> DiscoveryOutcome {
        let _guard = self.pass_guard.lock().await;
        self.discover_locked().await
    }

    async fn discover_locked(&self) -> DiscoveryOutcome {
        let outcome = self.discovery.run().await;
        self.adopt(outcome.address.clone());
        outcome
    }

    /// # Ensure Server URL (`ensure_server_url`)
    ///
    /// Keeps the current address if it is reachable, otherwise discovers.
    ///
    /// ## Workflow:
    /// 1. Probes the current address once.
    /// 2. If it answers, returns it without touching candidates or storage.
    /// 3. Otherwise runs a discovery pass under the same guard and returns
    ///    its result.
    pub async fn ensure_server_url(&self) -> String {
        let _guard = self.pass_guard.lock().await;
        let current = self.api_base_url();
        if self.discovery.prober().probe(&current).await {
            debug!("Current server address {} is reachable", current);
            return current;
        }
        info!("Current server address {} is unreachable", current);
        self.discover_locked().await.address
    }

    /// # Restore Saved Server Address (`restore_saved_server_url`)
    ///
    /// Adopts the saved preference as the current address without probing it.
    /// A fresh process starts at the static platform default, so the startup
    /// path calls this before `ensure_server_url` to make the saved address
    /// the one that gets checked first.
    ///
    /// ## Returns
    ///
    /// The adopted address, or `None` (current address unchanged) when
    /// nothing is saved or the store cannot be read.
    pub async fn restore_saved_server_url(&self) -> Option<String> {
        let _guard = self.pass_guard.lock().await;
        let saved = self.discovery.saved_address()?;
        debug!("Restoring saved server address {}", saved);
        self.adopt(saved.clone());
        Some(saved)
    }

    /// # Set Server URL (`set_server_url`)
    ///
    /// Installs a manual server address if it passes the health check.
    ///
    /// ## Workflow:
    /// 1. Normalizes the input with `normalize_address`; blank input is
    ///    rejected without probing.
    /// 2. Probes the address.
    /// 3. On success saves it as the preference (a storage failure is logged
    ///    only) and adopts it.
    ///
    /// ## Returns
    ///
    /// `true` if the address was adopted. `false` leaves both the current
    /// address and the saved preference unchanged.
    pub async fn set_server_url(&self, address: &str) -> bool {
        let address = normalize_address(address);
        if address.is_empty() {
            warn!("Refusing to set an empty server address");
            return false;
        }
        let _guard = self.pass_guard.lock().await;
        if !self.discovery.prober().probe(&address).await {
            warn!("Server address {} failed its health check; not saved", address);
            return false;
        }
        if let Err(e) = self.discovery.preference().set(&address) {
            warn!("Could not save server address {}: {:#}", address, e);
        }
        self.adopt(address);
        true
    }

    /// Static default address for the current platform.
    pub fn default_server_url(&self) -> String {
        self.discovery.static_default()
    }

    /// The saved preference, or `None` if unset or unreadable.
    pub fn get_custom_server_url(&self) -> Option<String> {
        self.discovery.saved_address()
    }

    /// Forgets the saved preference and reverts to the static default.
    pub async fn clear_custom_server_url(&self) {
        let _guard = self.pass_guard.lock().await;
        if let Err(e) = self.discovery.preference().clear() {
            warn!("Could not clear saved server address: {:#}", e);
        }
        self.adopt(self.discovery.static_default());
    }
}

/// Trims whitespace and trailing slashes so `{address}/health` stays well-formed.
///
/// An empty result means the input was blank and is never a usable address.
pub fn normalize_address(address: &str) -> String {
    address.trim().trim_end_matches('/').to_string()
}
