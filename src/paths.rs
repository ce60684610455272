//! XDG-style path utilities for the configuration directory.
//!
//! Prefers the XDG Base Directory convention over OS-specific locations so the
//! config file lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for polytl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/polytl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/polytl` otherwise
///
/// # Errors
///
/// Returns an error if `XDG_CONFIG_HOME` is unset and the home directory
/// cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("polytl")),
        _ => Ok(home_dir()?.join(".config").join("polytl")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
