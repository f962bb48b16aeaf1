//! Tests for the settings store
//!
//! Every test works in its own temporary directory.

use std::fs;

use mascot_types::{DEFAULT_SETTINGS, ImagePaths, Settings, WindowPosition, WindowSize};
use tempfile::TempDir;

use super::{SETTINGS_FILE_NAME, SettingsError, SettingsStore};

fn custom_settings() -> Settings {
    Settings {
        window_position: WindowPosition { x: -40, y: 320 },
        window_size: WindowSize {
            width: 128,
            height: 96,
        },
        animation_speed: 75,
        images: ImagePaths {
            typing1: "/home/me/mascot/typing1.png".to_string(),
            typing2: "/home/me/mascot/typing2.png".to_string(),
            idle: "/home/me/mascot/idle.gif".to_string(),
        },
        opacity: 0.8,
        always_on_top: false,
    }
}

#[test]
fn load_without_file_returns_defaults_and_creates_dir() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("config").join("mascot");
    let store = SettingsStore::new(&dir);

    let settings = store.load().unwrap();

    assert_eq!(settings, DEFAULT_SETTINGS);
    assert!(dir.is_dir());
    assert!(!store.path().exists(), "load must not write the settings file");
}

#[test]
fn save_then_load() {
    let tmp = TempDir::new().unwrap();
    let store = SettingsStore::new(tmp.path().join("nested"));
    let settings = custom_settings();

    store.save(&settings).unwrap();

    assert_eq!(store.load().unwrap(), settings);
}

#[test]
fn save_writes_pretty_camel_case_json() {
    let tmp = TempDir::new().unwrap();
    let store = SettingsStore::new(tmp.path());

    store.save(&DEFAULT_SETTINGS).unwrap();

    let contents = fs::read_to_string(tmp.path().join(SETTINGS_FILE_NAME)).unwrap();
    assert!(contents.contains('\n'));
    assert!(contents.contains("\"windowPosition\""));
    assert!(contents.contains("\"alwaysOnTop\": true"));
    assert!(!contents.contains("window_position"));
}

#[test]
fn save_overwrites_previous_file() {
    let tmp = TempDir::new().unwrap();
    let store = SettingsStore::new(tmp.path());

    store.save(&custom_settings()).unwrap();
    store.save(&DEFAULT_SETTINGS).unwrap();

    assert_eq!(store.load().unwrap(), DEFAULT_SETTINGS);
}

#[test]
fn reset_removes_file_and_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    let store = SettingsStore::new(tmp.path());
    store.save(&custom_settings()).unwrap();

    let settings = store.reset().unwrap();

    assert_eq!(settings, DEFAULT_SETTINGS);
    assert!(!store.path().exists());
    assert_eq!(store.load().unwrap(), DEFAULT_SETTINGS);
}

#[test]
fn reset_without_file_is_ok_and_does_not_create_dir() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("missing");
    let store = SettingsStore::new(&dir);

    assert_eq!(store.reset().unwrap(), DEFAULT_SETTINGS);
    assert!(!dir.exists());
}

#[test]
fn partial_file_is_filled_with_defaults() {
    let tmp = TempDir::new().unwrap();
    let store = SettingsStore::new(tmp.path());
    fs::write(store.path(), r#"{ "animationSpeed": 120 }"#).unwrap();

    let settings = store.load().unwrap();

    assert_eq!(settings.animation_speed, 120);
    assert_eq!(settings.window_size, DEFAULT_SETTINGS.window_size);
    assert!(settings.always_on_top);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let store = SettingsStore::new(tmp.path());
    fs::write(store.path(), "{ not json").unwrap();

    let err = store.load().unwrap_err();

    assert!(matches!(err, SettingsError::Parse { .. }));
    assert_eq!(err.path(), store.path());
    assert!(err.to_string().starts_with("Failed to parse settings"));
}

#[test]
fn unusable_dir_is_a_create_dir_error() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let store = SettingsStore::new(blocker.join("mascot"));

    let err = store.save(&DEFAULT_SETTINGS).unwrap_err();

    assert!(matches!(err, SettingsError::CreateDir { .. }));
    assert_eq!(err.path(), blocker.join("mascot"));
}

#[test]
fn reset_on_directory_is_a_remove_error() {
    let tmp = TempDir::new().unwrap();
    let store = SettingsStore::new(tmp.path());
    fs::create_dir(store.path()).unwrap();

    let err = store.reset().unwrap_err();

    assert!(matches!(err, SettingsError::Remove { .. }));
}

#[test]
fn path_is_inside_dir() {
    let store = SettingsStore::new("/tmp/mascot-config");
    assert_eq!(store.dir(), std::path::Path::new("/tmp/mascot-config"));
    assert_eq!(
        store.path(),
        std::path::Path::new("/tmp/mascot-config/settings.json")
    );
}
