//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration.
///
/// Every field is defaulted, so the server starts with no config file and no
/// environment variables set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Create a test configuration.
    ///
    /// **For testing only.** Callers are expected to point `storage.work_root`
    /// at a scratch directory.
    pub fn for_testing() -> Self {
        Self::default()
    }
}

/// HTTP server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Maximum accepted request body size in bytes. Bounds the uploaded icon;
    /// the text form fields are tiny.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// On-disk storage configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding transient working trees and finished archives.
    /// Created at startup if absent. Archive expiry is an operator concern;
    /// nothing in the service deletes finished archives.
    #[serde(default = "default_work_root")]
    pub work_root: PathBuf,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_max_body_bytes() -> usize {
    8 * 1024 * 1024
}

fn default_work_root() -> PathBuf {
    std::env::temp_dir().join("webwrap")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            work_root: default_work_root(),
        }
    }
}
