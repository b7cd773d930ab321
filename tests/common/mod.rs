//! Shared test utilities for integration tests

#![allow(dead_code)]

use reconnect::App;
use reconnect::config::Config;
use reconnect::store::{FileBackend, Storage};
use tempfile::TempDir;

/// Config pointing the file backend at a fresh temporary directory
pub fn temp_config() -> (TempDir, Config) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.storage.data_dir = Some(temp_dir.path().join("data"));
    (temp_dir, config)
}

/// Storage backed by JSON files in `dir`
pub fn file_storage(dir: &TempDir) -> Storage {
    Storage::new(FileBackend::open(dir.path().join("data")).expect("Failed to open backend"))
}

/// A freshly started app on its own data directory
pub fn fresh_app() -> (TempDir, App) {
    let (temp_dir, config) = temp_config();
    let app = App::open(config).expect("Failed to open app");
    (temp_dir, app)
}
