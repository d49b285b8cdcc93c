//! Settings persistence
//!
//! Saves and loads [`ClientSettings`] to/from a JSON file so preferences
//! survive between sessions.
//!
//! # File Location
//!
//! `settings.json` in the per-user configuration directory resolved by
//! [`directories::ProjectDirs`] (e.g. `~/.config/duelchess/settings.json`),
//! or `./settings.json` when no such directory can be determined. An explicit
//! path (the `--settings` flag) overrides both.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller, which decides whether to care

use crate::core::error::CoreResult;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences for the chess client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Name shown to the opponent in networked games
    pub player_name: String,
    /// Whether new games start with a clock
    pub timer_enabled: bool,
    /// Initial time per side, in seconds
    pub time_per_player_secs: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            timer_enabled: false,
            time_per_player_secs: 600,
        }
    }
}

impl ClientSettings {
    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> ClientSettings {
        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return ClientSettings::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<ClientSettings>(&contents) {
                Ok(settings) => {
                    info!("[SETTINGS] Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!(
                        "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                        path, e
                    );
                    ClientSettings::default()
                }
            },
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                ClientSettings::default()
            }
        }
    }

    /// Write settings to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }
}

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "duelchess", "duelchess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("duelchess-test-{}", uuid::Uuid::new_v4()))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_defaults() {
        //! Timer is off and ten minutes per side by default
        let settings = ClientSettings::default();
        assert!(!settings.timer_enabled);
        assert_eq!(settings.time_per_player_secs, 600);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path();
        let settings = ClientSettings {
            player_name: "Ann".to_string(),
            timer_enabled: true,
            time_per_player_secs: 300,
            ..ClientSettings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(ClientSettings::load_from(&path), settings);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_or_corrupt_file_uses_defaults() {
        let path = scratch_path();
        assert_eq!(ClientSettings::load_from(&path), ClientSettings::default());

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(ClientSettings::load_from(&path), ClientSettings::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let path = scratch_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"player_name": "Bo"}"#).unwrap();
        let settings = ClientSettings::load_from(&path);
        assert_eq!(settings.player_name, "Bo");
        assert_eq!(settings.time_per_player_secs, 600);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
