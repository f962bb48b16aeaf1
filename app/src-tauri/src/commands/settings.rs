//! Settings Tauri commands
//!
//! Thin wrappers over [`SettingsState`]; errors cross the IPC boundary as strings.

use tauri::State;

use mascot_types::Settings;

use crate::state::SettingsState;

#[tauri::command]
pub fn get_settings(state: State<'_, SettingsState>) -> Result<Settings, String> {
    state.load().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn save_settings(settings: Settings, state: State<'_, SettingsState>) -> Result<(), String> {
    state.save(&settings).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn reset_settings(state: State<'_, SettingsState>) -> Result<Settings, String> {
    state.reset().map_err(|e| e.to_string())
}
