//! Persisted user preferences for the mascot window.
//!
//! Field names are serialized in camelCase; the same JSON shape is used for
//! the settings file on disk and for the IPC payload exchanged with the
//! settings window.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Intended animation speed range in milliseconds per frame.
///
/// Informational only: used to configure UI controls, never enforced.
pub const ANIMATION_SPEED_RANGE_MS: RangeInclusive<i32> = 50..=500;

/// Intended opacity range. Informational only, like [`ANIMATION_SPEED_RANGE_MS`].
pub const OPACITY_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Window position coordinates in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl Default for WindowPosition {
    fn default() -> Self {
        DEFAULT_SETTINGS.window_position
    }
}

/// Window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        DEFAULT_SETTINGS.window_size
    }
}

/// Image file paths for the mascot animation frames.
///
/// An empty string means no image has been chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePaths {
    pub typing1: String,
    pub typing2: String,
    pub idle: String,
}

impl ImagePaths {
    /// True when every frame has an image assigned.
    pub fn is_complete(&self) -> bool {
        !self.typing1.is_empty() && !self.typing2.is_empty() && !self.idle.is_empty()
    }
}

/// Application settings.
///
/// Missing fields in a stored document are taken from [`DEFAULT_SETTINGS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub window_position: WindowPosition,
    pub window_size: WindowSize,
    /// Milliseconds per frame (50-500)
    pub animation_speed: i32,
    pub images: ImagePaths,
    /// 0-1
    pub opacity: f32,
    pub always_on_top: bool,
}

/// Default application settings.
pub const DEFAULT_SETTINGS: Settings = Settings {
    window_position: WindowPosition { x: 100, y: 100 },
    window_size: WindowSize {
        width: 200,
        height: 200,
    },
    animation_speed: 200,
    images: ImagePaths {
        typing1: String::new(),
        typing2: String::new(),
        idle: String::new(),
    },
    opacity: 1.0,
    always_on_top: true,
};

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn default_values() {
        assert_eq!(DEFAULT_SETTINGS.window_position, WindowPosition { x: 100, y: 100 });
        assert_eq!(
            DEFAULT_SETTINGS.window_size,
            WindowSize {
                width: 200,
                height: 200
            }
        );
        assert_eq!(DEFAULT_SETTINGS.animation_speed, 200);
        assert_eq!(
            DEFAULT_SETTINGS.images,
            ImagePaths {
                typing1: String::new(),
                typing2: String::new(),
                idle: String::new(),
            }
        );
        assert_eq!(DEFAULT_SETTINGS.opacity, 1.0);
        assert!(DEFAULT_SETTINGS.always_on_top);
        assert_eq!(Settings::default(), DEFAULT_SETTINGS);
    }

    #[test]
    fn field_set_is_exact() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        let Value::Object(map) = value else {
            panic!("settings should serialize to an object");
        };
        let mut keys: Vec<_> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "alwaysOnTop",
                "animationSpeed",
                "images",
                "opacity",
                "windowPosition",
                "windowSize"
            ]
        );
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "windowPosition": { "x": 100, "y": 100 },
                "windowSize": { "width": 200, "height": 200 },
                "animationSpeed": 200,
                "images": { "typing1": "", "typing2": "", "idle": "" },
                "opacity": 1.0,
                "alwaysOnTop": true
            })
        );
    }

    #[test]
    fn partial_document_uses_defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{ "opacity": 0.5, "images": { "idle": "/tmp/idle.png" }, "windowPosition": { "x": -20 } }"#,
        )
        .unwrap();

        assert_eq!(settings.opacity, 0.5);
        assert_eq!(settings.images.idle, "/tmp/idle.png");
        assert_eq!(settings.images.typing1, "");
        assert_eq!(settings.window_position, WindowPosition { x: -20, y: 100 });
        assert_eq!(settings.window_size, DEFAULT_SETTINGS.window_size);
        assert_eq!(settings.animation_speed, 200);
        assert!(settings.always_on_top);
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let settings: Settings =
            serde_json::from_str(r#"{ "animationSpeed": 5000, "opacity": 3.0 }"#).unwrap();
        assert_eq!(settings.animation_speed, 5000);
        assert_eq!(settings.opacity, 3.0);
        assert!(!ANIMATION_SPEED_RANGE_MS.contains(&settings.animation_speed));
        assert!(!OPACITY_RANGE.contains(&settings.opacity));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{ "alwaysOnTop": false, "theme": "dark" }"#).unwrap();
        assert!(!settings.always_on_top);
    }

    #[test]
    fn image_paths_complete() {
        let mut images = ImagePaths::default();
        assert!(!images.is_complete());
        images.typing1 = "a.png".into();
        images.typing2 = "b.png".into();
        assert!(!images.is_complete());
        images.idle = "c.png".into();
        assert!(images.is_complete());
    }
}
