use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("tray-integration"))
}

pub fn config_path() -> Result<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}
