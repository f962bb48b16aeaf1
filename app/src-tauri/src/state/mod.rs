//! Application state management
//!
//! `SettingsState` is the Tauri managed state shared by all commands. The
//! store is immutable after setup, so commands need no locking; concurrent
//! saves are last-writer-wins on the file.

use mascot_core::{SettingsError, SettingsStore};
use mascot_types::Settings;

pub struct SettingsState {
    store: SettingsStore,
}

impl SettingsState {
    pub fn new(store: SettingsStore) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Settings, SettingsError> {
        self.store
            .load()
            .inspect(|_| tracing::debug!("Settings loaded"))
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load settings"))
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        tracing::debug!(
            animation_speed = settings.animation_speed,
            opacity = settings.opacity,
            always_on_top = settings.always_on_top,
            "Saving settings"
        );
        self.store
            .save(settings)
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to save settings"))
    }

    pub fn reset(&self) -> Result<Settings, SettingsError> {
        self.store
            .reset()
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to reset settings"))
    }
}
