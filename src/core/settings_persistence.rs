//! Settings persistence
//!
//! Loads and saves [`Settings`] as JSON.
//!
//! # File Location
//!
//! 1. The path given with `--config`
//! 2. `settings.json` in the user's configuration directory, if it exists
//! 3. `settings.json` in the working directory
//!
//! Saving without an explicit path always writes to the configuration
//! directory.
//!
//! # Error Handling
//!
//! [`load_or_default`] never fails: a missing file is normal and an
//! unreadable or invalid one is logged and replaced by defaults.

use crate::core::error::CoreResult;
use crate::core::settings::Settings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// `settings.json` in the user's configuration directory, if one exists
pub fn config_dir_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "miniuci", "miniuci")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILENAME))
}

/// Resolve which settings file to read
pub fn resolve_settings_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match config_dir_settings_path() {
        Some(path) if path.exists() => path,
        _ => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Read settings from `path`
pub fn load_settings(path: &Path) -> CoreResult<Settings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Read settings from `path`, falling back to defaults
pub fn load_or_default(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return Settings::default();
    }

    match load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_settings(settings: &Settings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

/// Where `--save-config` writes when no `--config` path was given
pub fn default_save_path() -> PathBuf {
    config_dir_settings_path().unwrap_or_else(|| PathBuf::from(SETTINGS_FILENAME))
}
