//! On-disk configuration for Patternbook.
//!
//! A single JSON file under the user config dir holds the few settings
//! that survive restarts: the appearance preference and the window size.
//! Loading is lenient end to end - a missing or corrupt file degrades to
//! defaults with a warning, never a startup failure.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{PatternbookError, Result};
use crate::theme::Appearance;

/// Window geometry saved across sessions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize {
            width: 1100.0,
            height: 760.0,
        }
    }
}

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme preference: system, light, or dark
    pub appearance: Appearance,
    pub window: WindowSize,
}

/// Path to the config file (`<config dir>/patternbook/config.json`)
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("patternbook").join("config.json"))
        .unwrap_or_else(|| std::env::temp_dir().join("patternbook-config.json"))
}

/// Load config from the default location, falling back to defaults.
pub fn load() -> Config {
    load_from(&config_path())
}

/// Load config from an explicit path.
///
/// Absent file is the common first-run case and logs at info; a file that
/// exists but fails to parse logs a warning. Both return defaults.
pub fn load_from(path: &Path) -> Config {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            info!(path = %path.display(), "No config file, using defaults");
            return Config::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(config) => {
            info!(path = %path.display(), "Config loaded");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Config file unreadable, using defaults");
            Config::default()
        }
    }
}

/// Save config to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_to(config, &config_path())
}

/// Save config to an explicit path, creating parent directories.
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| PatternbookError::ConfigIo {
            path: parent.display().to_string(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(|source| PatternbookError::ConfigIo {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Appearance;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("nope.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not valid json!").unwrap();
        let config = load_from(&path);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            appearance: Appearance::Light,
            window: WindowSize {
                width: 900.0,
                height: 600.0,
            },
        };
        save_to(&config, &path).unwrap();
        let loaded = load_from(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"appearance":"dark"}"#).unwrap();
        let config = load_from(&path);
        assert_eq!(config.appearance, Appearance::Dark);
        assert_eq!(config.window, WindowSize::default());
    }
}
