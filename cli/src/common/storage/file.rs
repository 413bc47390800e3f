//! # File-Backed Preference Store
//!
//! File: cli/src/common/storage/file.rs
//!
//! ## Overview
//!
//! Stores preferences as a flat TOML table in a single file:
//!
//! ```toml
//! custom_server_url = "http://192.168.1.20:5000"
//! ```
//!
//! Every operation re-reads the file, so two processes sharing the file see
//! each other's writes. A missing file is an empty store. Writes go through
//! `common::fs::io::write_string_to_file`, which replaces the file atomically.
//!
use super::PreferenceStore;
use crate::common::fs::io;
use crate::core::error::{NameGenError, Result};
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let Some(content) = io::read_optional_file(&self.path)? else {
            return Ok(BTreeMap::new());
        };
        toml::from_str(&content).map_err(|e| {
            NameGenError::Storage(format!(
                "Preference file {} is not a valid string table: {}",
                self.path.display(),
                e
            ))
            .into()
        })
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let content = toml::to_string(values).context("Failed to serialize preferences")?;
        io::write_string_to_file(&self.path, &content)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.guard();
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.guard();
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)?;
        info!("Saved preference '{}' to {}", key, self.path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.guard();
        let mut values = self.load()?;
        if values.remove(key).is_none() {
            debug!("Preference '{}' was not set; nothing to remove.", key);
            return Ok(());
        }
        self.save(&values)?;
        info!("Removed preference '{}' from {}", key, self.path.display());
        Ok(())
    }
}
