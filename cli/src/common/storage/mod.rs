//! # NameGen Preference Storage (`common::storage`)
//!
//! File: cli/src/common/storage/mod.rs
//!
//! ## Overview
//!
//! Durable key→string storage that survives process restarts. Discovery uses
//! exactly one key of it, `custom_server_url`, to remember the last address
//! that was confirmed reachable.
//!
//! ## Architecture
//!
//! - **`PreferenceStore`**: the generic key-value trait (`get`/`set`/`remove`).
//!   A missing key is `Ok(None)`; `Err` is reserved for real I/O or format
//!   failures.
//! - **`file::FileStore`**: TOML file on disk, the store the binary uses.
//! - **`memory::MemoryStore`**: in-process map for tests and embedders that
//!   do not want anything on disk.
//! - **`ServerPreference`**: the typed view of the one key discovery cares
//!   about.
//!
use crate::core::error::Result;
use std::sync::Arc;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key holding the last known-good server address.
pub const SERVER_URL_KEY: &str = "custom_server_url";

/// A persisted key-value store with string values.
pub trait PreferenceStore: Send + Sync {
    /// Returns the value for `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}

/// The persisted server address preference.
#[derive(Clone)]
pub struct ServerPreference {
    store: Arc<dyn PreferenceStore>,
}

impl ServerPreference {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// The saved address; empty values count as absent.
    pub fn get(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(SERVER_URL_KEY)?
            .filter(|value| !value.trim().is_empty()))
    }

    pub fn set(&self, address: &str) -> Result<()> {
        self.store.set(SERVER_URL_KEY, address)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(SERVER_URL_KEY)
    }
}
