//! Common paths for РыбаКоп data storage
//!
//! Everything lives under ~/.config/rybakop/ on all platforms:
//! - config.toml - User configuration

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the data directory (~/.config/rybakop/), creating it if needed
pub fn rybakop_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let dir = home.join(".config").join("rybakop");
    fs::create_dir_all(&dir).context("Failed to create rybakop directory")?;
    Ok(dir)
}

/// Get the config file path (~/.config/rybakop/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(rybakop_dir()?.join("config.toml"))
}
