//! Configuration loading and management

mod io;
mod settings;

pub use settings::{DashboardSettings, StorageBackendKind, StorageSettings};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure (`~/.reconnect/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where app state is persisted
    #[serde(default)]
    pub storage: StorageSettings,

    /// Dashboard presentation settings
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

impl Config {
    /// Data directory for the file backend, falling back to `~/.reconnect/data`
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("data"))
    }
}
