pub mod settings_store;

// Re-exports for convenience
pub use mascot_types::{DEFAULT_SETTINGS, ImagePaths, Settings, WindowPosition, WindowSize};
pub use settings_store::{SETTINGS_FILE_NAME, SettingsError, SettingsStore};

/// Directory name used under the platform config and data directories.
/// Matches the bundle identifier in `tauri.conf.json`.
pub const APP_IDENTIFIER: &str = "com.mascot.app";
