//! Settings sections

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::leaderboard::DEFAULT_LEADERBOARD_SIZE;

/// Which backend holds app state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    /// JSON files in the data directory
    #[default]
    File,
    /// Nothing survives the process
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Override for the data directory (defaults to `~/.reconnect/data`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub backend: StorageBackendKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Number of leaderboard entries shown
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,

    /// Seconds between motivation quotes in follow mode
    #[serde(default = "default_quote_interval_secs")]
    pub quote_interval_secs: u64,
}

fn default_leaderboard_size() -> usize {
    DEFAULT_LEADERBOARD_SIZE
}

fn default_quote_interval_secs() -> u64 {
    4
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            leaderboard_size: default_leaderboard_size(),
            quote_interval_secs: default_quote_interval_secs(),
        }
    }
}
