//! Read-only application settings
//!
//! Settings are read once at startup from a JSON file in the user's config
//! directory. The editor never writes this file, so nothing about a session
//! carries over to the next run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Startup settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory the file chooser starts in
    pub start_directory: PathBuf,

    /// JPEG quality used when saving (1-100)
    pub jpeg_quality: u8,

    /// Initial window size in logical pixels
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_directory: PathBuf::from("."),
            jpeg_quality: 90,
            window_width: 900.0,
            window_height: 640.0,
        }
    }
}

impl Config {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Read settings from `path`.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Ok(Self::from_json(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read settings from the standard location, falling back to the
    /// defaults if the file cannot be used.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::debug!("No config directory on this platform, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => {
                log::debug!("Settings: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("⚠️  Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Where the settings file is expected:
    /// - Linux: ~/.config/snapshop/config.json
    /// - macOS: ~/Library/Application Support/snapshop/config.json
    /// - Windows: %APPDATA%\snapshop\config.json
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("snapshop");
        path.push("config.json");
        Some(path)
    }

    fn sanitized(mut self) -> Self {
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        self
    }
}
