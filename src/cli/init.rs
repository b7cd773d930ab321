//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;

use reconnect::config::Config;

/// Write a config file with every default spelled out
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    let mut config = Config::default();
    config.storage.data_dir = Some(config.data_dir());
    config.save_to_file(config_path)?;

    println!("Created: {}", config_path.display());
    Ok(())
}
