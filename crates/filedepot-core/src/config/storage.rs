//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Blob storage configuration.
///
/// The root path is the single override point for the local content
/// area (`FILEDEPOT__STORAGE__ROOT_PATH` or the `storage.root_path`
/// TOML key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all stored blobs.
    #[serde(default = "default_root_path")]
    pub root_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
        }
    }
}

fn default_root_path() -> String {
    std::env::temp_dir()
        .join("filedepot")
        .to_string_lossy()
        .into_owned()
}
