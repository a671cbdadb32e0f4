//! Storage Location Module
//!
//! This module resolves the external-storage root under which the application
//! keeps its data. The rest of the crate depends only on the [`StorageProvider`]
//! trait, so each target platform supplies its own resolution strategy.

use std::path::Path;

use crate::module::define;

/// Resolves the root storage location for the application.
pub trait StorageProvider {
    /// Resolve the storage root.
    ///
    /// Returns `Some(path)` if a usable root exists, or `None` if no storage
    /// location can be resolved on this platform.
    fn root(&self) -> Option<String>;
}

/// Platform storage resolution.
///
/// Checks the `GABRIEL_ROOT` environment variable first, then falls back to
/// the persistent data directory if it exists, and the ephemeral data
/// directory otherwise.
#[derive(Debug, Clone)]
pub struct ExternalStorage {
    /// Persistent candidate directory
    pub persistent: String,
    /// Ephemeral candidate directory
    pub ephemeral: String,
}

impl Default for ExternalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalStorage {
    /// Construct a provider over the built-in candidate directories.
    pub fn new() -> Self {
        Self {
            persistent: define::path::PERSISTENT_DIR.to_string(),
            ephemeral: define::path::EPHEMERAL_DIR.to_string(),
        }
    }
}

impl StorageProvider for ExternalStorage {
    fn root(&self) -> Option<String> {
        if let Ok(root) = std::env::var(define::path::ROOT_ENV) {
            if !root.is_empty() {
                return Some(root);
            }
        }
        if Path::new(&self.persistent).is_dir() {
            return Some(self.persistent.clone());
        }
        if Path::new(&self.ephemeral).is_dir() {
            return Some(self.ephemeral.clone());
        }
        None
    }
}

/// Fixed storage root, for tests and explicit configuration.
#[derive(Debug, Clone)]
pub struct FixedStorage {
    pub root: String,
}

impl FixedStorage {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
        }
    }
}

impl StorageProvider for FixedStorage {
    fn root(&self) -> Option<String> {
        Some(self.root.clone())
    }
}
