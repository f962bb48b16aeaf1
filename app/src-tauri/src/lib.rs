//! Tauri host for the mascot settings window.
//!
//! Owns the settings store and exposes it to the Dioxus front-end through
//! the commands in [`commands`].

mod commands;
mod logging;
mod state;

use tauri::Manager;

use mascot_core::SettingsStore;

use crate::state::SettingsState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Held until the event loop exits so buffered log lines get flushed
    let _log_guard = logging::init_logging();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting mascot");

    let result = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .setup(|app| {
            let store = match app.path().app_config_dir() {
                Ok(dir) => SettingsStore::new(dir),
                Err(e) => {
                    tracing::warn!(error = %e, "No app config dir from Tauri, using platform default");
                    SettingsStore::default_location()
                        .ok_or("Failed to get config directory")?
                }
            };
            tracing::info!(path = %store.path().display(), "Settings location");
            app.manage(SettingsState::new(store));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_settings,
            commands::save_settings,
            commands::reset_settings,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!(error = %e, "Error while running tauri application");
        std::process::exit(1);
    }
}
