//! Settings persistence
//!
//! A single JSON document (`settings.json`) inside the application config
//! directory. The store never validates values; whatever the settings window
//! sends is written as-is.
//!
//! ```text
//!   Settings Window ──invoke──▶ Tauri command ──▶ SettingsStore ──▶ settings.json
//! ```

mod error;

#[cfg(test)]
mod store_tests;

pub use error::SettingsError;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mascot_types::{DEFAULT_SETTINGS, Settings};

use crate::APP_IDENTIFIER;

/// File name of the settings document inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Directory-rooted store for the settings record.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// Create a store rooted at `dir`. Nothing is touched on disk until the
    /// first `load` or `save`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the platform config directory, e.g. `~/.config/com.mascot.app`.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|p| Self::new(p.join(APP_IDENTIFIER)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the settings file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE_NAME)
    }

    /// Load the stored settings, or the defaults if nothing has been saved yet.
    ///
    /// Creates the config directory if it does not exist, but never writes
    /// the settings file itself.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        self.ensure_dir()?;

        let path = self.path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(DEFAULT_SETTINGS);
            }
            Err(source) => return Err(SettingsError::Read { path, source }),
        };

        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse { path, source })
    }

    /// Persist `settings`, replacing any existing file.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        self.ensure_dir()?;

        let path = self.path();
        let json = serde_json::to_string_pretty(settings).map_err(|source| {
            SettingsError::Serialize {
                path: path.clone(),
                source,
            }
        })?;

        fs::write(&path, json).map_err(|source| SettingsError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// Delete the stored settings and return the defaults.
    ///
    /// Succeeds when there is nothing to delete. Does not create the config
    /// directory.
    pub fn reset(&self) -> Result<Settings, SettingsError> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => tracing::info!(path = %path.display(), "Settings reset to defaults"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(SettingsError::Remove { path, source }),
        }
        Ok(DEFAULT_SETTINGS)
    }

    fn ensure_dir(&self) -> Result<(), SettingsError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| SettingsError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
