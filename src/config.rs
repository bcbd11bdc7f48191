// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Durations are stored in milliseconds so the file stays human-editable.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Newsdesk";

/// Default display duration for toast notifications.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;
/// Default duration a button keeps its temporary feedback appearance.
pub const DEFAULT_FEEDBACK_DURATION_MS: u64 = 2000;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Whether tooltips are attached to toolbar controls.
    #[serde(default)]
    pub tooltips: Option<bool>,
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,
    #[serde(default)]
    pub feedback_duration_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tooltips: Some(true),
            toast_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            feedback_duration_ms: Some(DEFAULT_FEEDBACK_DURATION_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_enables_tooltips() {
        let config = Config::default();
        assert_eq!(config.tooltips, Some(true));
        assert_eq!(config.toast_duration_ms, Some(DEFAULT_TOAST_DURATION_MS));
        assert_eq!(
            config.feedback_duration_ms,
            Some(DEFAULT_FEEDBACK_DURATION_MS)
        );
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let config = Config {
            tooltips: Some(false),
            toast_duration_ms: Some(2500),
            feedback_duration_ms: Some(1000),
        };
        save_to_path(&config, &path).expect("failed to save config");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.tooltips, Some(false));
        assert_eq!(loaded.toast_duration_ms, Some(2500));
        assert_eq!(loaded.feedback_duration_ms, Some(1000));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not = [valid").expect("failed to write file");

        let loaded = load_from_path(&path).expect("load should not fail");
        assert_eq!(loaded.tooltips, Some(true));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("failed to save config");
        assert!(path.exists());
    }
}
